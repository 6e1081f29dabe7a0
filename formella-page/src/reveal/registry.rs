// registry.rs - Section id -> mounted region handle
//
// Each registration gets a generation number so a stale guard can tell
// it has been superseded and must leave the newer handle alone.

use std::collections::HashMap;

#[derive(Debug)]
struct Entry<H> {
    handle: H,
    generation: u64,
}

#[derive(Debug)]
pub struct Registry<H> {
    entries: HashMap<String, Entry<H>>,
    next_generation: u64,
}

impl<H> Default for Registry<H> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 0,
        }
    }
}

impl<H> Registry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the new generation and the handle it displaced.
    pub fn insert(&mut self, id: &str, handle: H) -> (u64, Option<H>) {
        let generation = self.next_generation;
        self.next_generation += 1;
        let prev = self
            .entries
            .insert(id.to_string(), Entry { handle, generation })
            .map(|e| e.handle);
        (generation, prev)
    }

    /// Remove only if the entry still belongs to `generation`.
    pub fn remove_if_current(&mut self, id: &str, generation: u64) -> Option<H> {
        match self.entries.get(id) {
            Some(e) if e.generation == generation => self.entries.remove(id).map(|e| e.handle),
            _ => None,
        }
    }

    pub fn get(&self, id: &str) -> Option<&H> {
        self.entries.get(id).map(|e| &e.handle)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (String, H)> + '_ {
        self.entries.drain().map(|(id, e)| (id, e.handle))
    }
}
