//! # symtab
//!
//! A minimal, flat symbol table built on [`indexmap::IndexMap`].
//!
//! Names map to `i64` values and keep the order in which they were first
//! assigned. Reading a name that was never assigned yields `0`: the language
//! has no declarations, so every variable starts out as zero.
//!
//! ## Example
//! ```rust
//! # use onepass_calc::SymTab;
//! let mut st = SymTab::new();
//! assert_eq!(st.get("X"), 0); // never assigned
//! st.set("X", 42);
//! assert_eq!(st.get("X"), 42);
//! assert_eq!(st.len(), 1);
//! ```

use indexmap::IndexMap;
use smartstring::alias::String;

/// A simple symbol table that maps names to integer values.
#[derive(Debug, Default, Clone)]
pub struct SymTab {
    tab: IndexMap<String, i64>,
}

impl SymTab {
    /// Creates a new, empty symbol table.
    pub fn new() -> Self {
        Self {
            tab: IndexMap::new(),
        }
    }

    /// Returns the number of names that have been assigned.
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Returns the value of `name`, or `0` if it was never assigned.
    ///
    /// Reading does not insert the name.
    pub fn get(&self, name: &str) -> i64 {
        self.tab.get(name).copied().unwrap_or(0)
    }

    /// Assigns `value` to `name`, inserting the name if it is new.
    ///
    /// Re-assigning keeps the name's original position in iteration order.
    pub fn set(&mut self, name: &str, value: i64) {
        match self.tab.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.tab.insert(String::from(name), value);
            }
        }
    }

    /// Returns `true` if `name` has been assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.tab.contains_key(name)
    }

    /// Iterates over `(name, value)` pairs in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.tab.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
