//! Repositories - capability-constrained storage for identifiable entities.
//!
//! A repository maps identifiers to entities. Any type exposing a unique,
//! hashable identifier can be stored; every operation reports through
//! [`Outcome`](crate::Outcome) so callers compose lookups and writes with
//! combinators instead of exception-style control flow.
//!
//! ## Example
//!
//! ```
//! use entity_store::{Identifiable, InMemoryRepository, Repository};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User {
//!     id: String,
//!     name: String,
//! }
//!
//! impl Identifiable for User {
//!     type Id = String;
//!
//!     fn id(&self) -> &String {
//!         &self.id
//!     }
//! }
//!
//! let mut repo = InMemoryRepository::new();
//! let user = User { id: "1".into(), name: "John".into() };
//!
//! assert!(repo.save(&user).is_ok());
//! assert_eq!(repo.find_by_id(&"1".to_string()).unwrap(), user);
//! ```

mod error;
mod in_memory;
mod repository;

use std::fmt;
use std::hash::Hash;

use crate::outcome::Outcome;

/// Capability for entity types that can live in a repository.
///
/// The identifier keys the backing map, so it must support equality and
/// hashing. `Clone` lets a store keep an owned copy of the key, and
/// `Display` lets error messages embed the offending identifier.
pub trait Identifiable {
    /// The identifier type.
    type Id: Eq + Hash + Clone + fmt::Display;

    /// The unique identifier of this entity.
    fn id(&self) -> &Self::Id;
}

/// Outcome of a repository operation.
pub type RepoOutcome<T> = Outcome<T, RepositoryError>;

pub use error::{ErrorCode, RepositoryError};
pub use in_memory::InMemoryRepository;
pub use repository::Repository;
