use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::store::memory::Keyed;

/// The one entity this service manages.
///
/// `id` 0 means "not yet assigned"; the store picks the next free id on
/// insert. A nonzero id supplied by the client is kept verbatim, which the
/// PUT-create path relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default = "default_likes_chocolate")]
    pub likes_chocolate: bool,
}

fn default_likes_chocolate() -> bool {
    true
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>, likes_chocolate: bool) -> Self {
        Self {
            id,
            name: name.into(),
            likes_chocolate,
        }
    }
}

impl Keyed for Person {
    fn key(&self) -> i64 {
        self.id
    }
    fn set_key(&mut self, key: i64) {
        self.id = key;
    }
}

// Letters, optionally separated by a single apostrophe, comma, period,
// space, or hyphen. No digits, no leading punctuation.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]+(([',. -][a-zA-Z ])?[a-zA-Z]*)*$").expect("name pattern"));

/// Shared name check used by both creation and upsert, before any store
/// mutation.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Demo dataset used when seeding is enabled and by the end-to-end tests.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(1, "Margaret Thatcher", true),
        Person::new(2, "William Shakespeare", true),
        Person::new(3, "George Orwell", false),
        Person::new(4, "J.K. Rowling", false),
        Person::new(5, "Harper Lee", true),
    ]
}
