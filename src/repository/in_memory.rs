use std::collections::HashMap;

use log::{debug, trace};

use crate::outcome::{Outcome, Unit};

use super::{Identifiable, RepoOutcome, Repository, RepositoryError};

/// In-memory repository backed by a `HashMap`.
///
/// The reference backing store: no persistence across the process lifetime
/// and no interior locking. Reads hand out clones of the stored entities,
/// so nothing a caller holds aliases into the map.
pub struct InMemoryRepository<T: Identifiable> {
    entries: HashMap<T::Id, T>,
}

impl<T: Identifiable> InMemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        InMemoryRepository {
            entries: HashMap::new(),
        }
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Identifiable> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable + Clone> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &T::Id) -> RepoOutcome<T> {
        match self.entries.get(id) {
            Some(entity) => Outcome::Ok(entity.clone()),
            None => Outcome::Err(RepositoryError::not_found(id)),
        }
    }

    fn find_all(&self) -> RepoOutcome<Vec<T>> {
        Outcome::Ok(self.entries.values().cloned().collect())
    }

    fn save(&mut self, entity: &T) -> RepoOutcome<T> {
        let id = entity.id();
        if self.entries.contains_key(id) {
            debug!("save rejected: id '{}' already present", id);
            return Outcome::Err(RepositoryError::already_exists(id));
        }
        trace!("saving entity '{}'", id);
        self.entries.insert(id.clone(), entity.clone());
        Outcome::Ok(entity.clone())
    }

    fn delete(&mut self, id: &T::Id) -> RepoOutcome<Unit> {
        match self.entries.remove(id) {
            Some(_) => {
                trace!("deleted entity '{}'", id);
                Outcome::Ok(Unit)
            }
            None => {
                debug!("delete rejected: id '{}' not present", id);
                Outcome::Err(RepositoryError::not_found(id))
            }
        }
    }
}
