use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A stop on a line.
///
/// Identity lives in `id`; `name` is display data and takes no part in
/// equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: Uuid,
    pub name: String,
}

impl Station {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
