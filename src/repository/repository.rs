use crate::outcome::Unit;

use super::{Identifiable, RepoOutcome};

/// Generic storage contract for identifiable entities.
///
/// Implementations own their entities outright: callers always get owned
/// copies back, never aliases into the backing store. Writes take
/// `&mut self` — a repository instance is single-threaded by contract, and
/// callers that share one serialize access behind a lock of their own.
pub trait Repository<T: Identifiable> {
    /// Look up the entity stored under `id`.
    ///
    /// Reports a `NOT_FOUND` error if nothing is stored under the id.
    fn find_by_id(&self, id: &T::Id) -> RepoOutcome<T>;

    /// A snapshot of every stored entity, in no guaranteed order.
    ///
    /// The in-memory implementation cannot fail here; the signature still
    /// reports through [`RepoOutcome`] for backends with fallible reads.
    fn find_all(&self) -> RepoOutcome<Vec<T>>;

    /// Insert `entity` keyed by its id, returning a copy of what was stored.
    ///
    /// Saving is insert-only: a second save under the same id reports
    /// `ALREADY_EXISTS` and leaves the stored entity untouched. Replacing
    /// an entity is an explicit `delete` followed by `save`.
    fn save(&mut self, entity: &T) -> RepoOutcome<T>;

    /// Remove the entity stored under `id`.
    ///
    /// Reports a `NOT_FOUND` error if nothing is stored under the id.
    fn delete(&mut self, id: &T::Id) -> RepoOutcome<Unit>;
}
