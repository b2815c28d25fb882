use serde::Deserialize;
use serde::Serialize;

/// Chat user acting at a table. Identity comes from the chat platform and
/// is passed through untouched.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.name.is_empty() {
            true => write!(f, "<{}>", self.id),
            false => write!(f, "{}", self.name),
        }
    }
}
