//! Minimal record shared by unit tests.

use serde::{Deserialize, Serialize};

use crate::state::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

impl Record for Item {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

pub fn item(id: u32, name: &str) -> Item {
    Item { id, name: name.to_owned() }
}
