// revealed.rs - Monotonic set of revealed section ids

use std::collections::HashSet;

/// Ids only ever go in; there is no `remove`.
#[derive(Debug, Default, Clone)]
pub struct RevealedSet {
    ids: HashSet<String>,
}

impl RevealedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not revealed before.
    pub fn reveal(&mut self, id: &str) -> bool {
        if self.ids.contains(id) {
            return false;
        }
        self.ids.insert(id.to_string())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
