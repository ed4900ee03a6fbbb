mod support;

use entity_store::{
    ErrorCode, InMemoryRepository, Outcome, RepoOutcome, Repository, RepositoryError, Unit,
};
use support::{Account, Post, User};
use uuid::Uuid;

#[test]
fn user_lifecycle() {
    let mut repo = InMemoryRepository::new();
    let john = User::new("1", "John", "john@example.com");

    // Create
    assert_eq!(repo.save(&john), Outcome::Ok(john.clone()));

    // A second save under the same id is rejected, whatever the fields say
    let imposter = User::new("1", "Jane", "jane@example.com");
    let error = repo.save(&imposter).unwrap_err();
    assert_eq!(error.code(), ErrorCode::AlreadyExists);
    assert!(error.message().contains("1"));

    // Delete, then the id is gone
    assert_eq!(repo.delete(&"1".to_string()), Outcome::Ok(Unit));
    let error = repo.find_by_id(&"1".to_string()).unwrap_err();
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[test]
fn update_is_delete_then_save() {
    let mut repo = InMemoryRepository::new();
    repo.save(&User::new("1", "John", "john@example.com")).unwrap();

    let renamed = User::new("1", "John", "john.doe@example.com");
    repo.delete(&"1".to_string()).unwrap();
    repo.save(&renamed).unwrap();

    assert_eq!(repo.find_by_id(&"1".to_string()).unwrap(), renamed);
}

#[test]
fn repositories_for_different_entity_types_are_independent() {
    let mut users = InMemoryRepository::new();
    let mut posts = InMemoryRepository::new();

    let jane = User::new("2", "Jane", "jane@example.com");
    users.save(&jane).unwrap();

    let post = Post::new("Hello World", &jane.id);
    posts.save(&post).unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(posts.len(), 1);

    let stored = posts.find_by_id(&post.id).unwrap();
    assert_eq!(stored.title, "Hello World");
    assert_eq!(stored.author_id, jane.id);
}

#[test]
fn uuid_identifiers_work_like_any_other() {
    let mut posts = InMemoryRepository::new();
    let post = Post::new("Generics", "2");
    posts.save(&post).unwrap();

    assert_eq!(posts.find_by_id(&post.id).unwrap(), post);
    assert_eq!(posts.delete(&post.id).unwrap(), Unit);

    let missing = Uuid::new_v4();
    let error = posts.find_by_id(&missing).unwrap_err();
    assert!(error.message().contains(&missing.to_string()));
}

#[test]
fn integer_identifiers_embed_in_messages() {
    let mut accounts: InMemoryRepository<Account> = InMemoryRepository::new();
    let error = accounts.delete(&404).unwrap_err();
    assert_eq!(error, RepositoryError::not_found(404));
    assert_eq!(error.message(), "entity with id '404' not found");
}

#[test]
fn find_all_returns_every_saved_entity() {
    let mut accounts = InMemoryRepository::new();
    for id in 1..=4u32 {
        accounts
            .save(&Account {
                id,
                balance_cents: i64::from(id) * 100,
            })
            .unwrap();
    }

    let all = accounts.find_all().unwrap();
    assert_eq!(all.len(), 4);
    for id in 1..=4u32 {
        assert!(all
            .iter()
            .any(|a| a.id == id && a.balance_cents == i64::from(id) * 100));
    }
}

// Callers build their own validation on top of save; the repository only
// supplies the error constructor for it.
fn save_valid_user(repo: &mut InMemoryRepository<User>, user: &User) -> RepoOutcome<User> {
    validate(user).and_then(|_| repo.save(user))
}

fn validate(user: &User) -> RepoOutcome<Unit> {
    if user.name.trim().is_empty() {
        return Outcome::Err(RepositoryError::validation_error("name must not be empty"));
    }
    if !user.email.contains('@') {
        return Outcome::Err(RepositoryError::validation_error(format!(
            "invalid email address: '{}'",
            user.email
        )));
    }
    Outcome::Ok(Unit)
}

#[test]
fn caller_side_validation_composes_with_save() {
    let mut repo = InMemoryRepository::new();

    let nameless = User::new("1", "  ", "a@example.com");
    let error = save_valid_user(&mut repo, &nameless).unwrap_err();
    assert_eq!(error.code(), ErrorCode::ValidationError);
    assert_eq!(error.message(), "name must not be empty");
    assert!(repo.is_empty());

    let unreachable = User::new("1", "John", "nowhere");
    let error = save_valid_user(&mut repo, &unreachable).unwrap_err();
    assert_eq!(error.message(), "invalid email address: 'nowhere'");

    let john = User::new("1", "John", "john@example.com");
    assert!(save_valid_user(&mut repo, &john).is_ok());
    assert_eq!(repo.len(), 1);
}

#[test]
fn lookups_compose_with_outcome_combinators() {
    let mut repo = InMemoryRepository::new();
    repo.save(&User::new("1", "John", "john@example.com")).unwrap();

    let name = repo
        .find_by_id(&"1".to_string())
        .map(|user| user.name)
        .unwrap_or_else(|_| "guest".to_string());
    assert_eq!(name, "John");

    let fallback = repo
        .find_by_id(&"999".to_string())
        .map(|user| user.name)
        .unwrap_or_else(|_| "guest".to_string());
    assert_eq!(fallback, "guest");
}
