//! Interning of symbol names while productions are collected.

use elsa::FrozenIndexSet;

/// Assigns each distinct name the index of its first occurrence, whether it
/// appears on a left-hand or a right-hand side.
pub struct NameInterner {
    set: FrozenIndexSet<String>,
}

impl Default for NameInterner {
    fn default() -> Self {
        NameInterner {
            set: FrozenIndexSet::new(),
        }
    }
}

impl NameInterner {
    /// Returns the index of the name, interning it first if it is new.
    pub fn intern(&self, name: &str) -> usize {
        self.set.insert_full(name.to_string()).0
    }

    /// Consumes the interner and returns all names, indexed by interned value.
    pub fn into_names(self) -> Vec<String> {
        (0..)
            .map_while(|index| self.set.get_index(index))
            .map(str::to_string)
            .collect()
    }
}
