mod outcome;
mod repository;
mod stack;

pub use outcome::{Outcome, Unit};
pub use repository::{
    ErrorCode, Identifiable, InMemoryRepository, RepoOutcome, Repository, RepositoryError,
};
pub use stack::Stack;
