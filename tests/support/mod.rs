use entity_store::Identifiable;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

impl Identifiable for User {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author_id: String,
}

impl Post {
    pub fn new(title: &str, author_id: &str) -> Self {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author_id: author_id.to_string(),
        }
    }
}

impl Identifiable for Post {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub id: u32,
    pub balance_cents: i64,
}

impl Identifiable for Account {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}
