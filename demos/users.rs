//! End-to-end tour of the crate: outcome chaining, stacks, and a pair of
//! in-memory repositories. Run with `cargo run --example users`.

use entity_store::{Identifiable, InMemoryRepository, Outcome, Repository, Stack};

#[derive(Clone, Debug)]
struct User {
    id: String,
    name: String,
    email: String,
}

impl Identifiable for User {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

#[derive(Clone, Debug)]
struct Post {
    id: String,
    title: String,
    author_id: String,
}

impl Identifiable for Post {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

fn divide(a: f64, b: f64) -> Outcome<f64, String> {
    if b == 0.0 {
        return Outcome::Err("division by zero".to_string());
    }
    Outcome::Ok(a / b)
}

fn parse_int(s: &str) -> Outcome<i32, String> {
    s.parse::<i32>()
        .map_err(|_| format!("could not parse '{}' as integer", s))
        .into()
}

fn main() {
    println!("=== Stack ===");
    let mut history: Stack<&str> = Stack::new();
    history.push("opened editor");
    history.push("typed a line");
    history.push("saved the file");
    println!("{}", history);
    println!("undo: {:?}", history.pop());
    println!("next undo would be: {:?}", history.peek());

    println!("\n=== Outcome ===");
    println!("10 / 2 = {:?}", divide(10.0, 2.0).unwrap());
    println!("10 / 0 -> {}", divide(10.0, 0.0).unwrap_err());
    println!("10 / 0 or default = {}", divide(10.0, 0.0).unwrap_or(0.0));

    let doubled = parse_int("21").and_then(|n| Outcome::Ok(n * 2));
    println!("double of 21 = {:?}", doubled.unwrap());
    let failed = parse_int("twenty-one").and_then(|n| Outcome::Ok(n * 2));
    println!("double of 'twenty-one' -> {}", failed.unwrap_err());

    println!("\n=== Repository ===");
    let mut users = InMemoryRepository::new();

    let john = User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    };
    if let Outcome::Ok(saved) = users.save(&john) {
        println!("created {} <{}>", saved.name, saved.email);
    }

    // No overwriting: replacing an entity is delete + save
    let renamed = User {
        email: "john.doe@example.com".to_string(),
        ..john.clone()
    };
    users.delete(&john.id).unwrap();
    users.save(&renamed).unwrap();
    println!("updated {:?}", users.find_by_id(&john.id).unwrap());

    let duplicate = users.save(&renamed).unwrap_err();
    println!(
        "duplicate save -> {} (code: {})",
        duplicate.message(),
        duplicate.code()
    );

    let missing = users.find_by_id(&"999".to_string()).unwrap_err();
    println!(
        "lookup of '999' -> {} (code: {})",
        missing.message(),
        missing.code()
    );

    let mut posts = InMemoryRepository::new();
    posts
        .save(&Post {
            id: "1".to_string(),
            title: "Hello World".to_string(),
            author_id: john.id.clone(),
        })
        .unwrap();
    let all = posts.find_all().unwrap();
    println!(
        "{} post(s) stored, first: '{}' by user {}",
        all.len(),
        all[0].title,
        all[0].author_id
    );
}
