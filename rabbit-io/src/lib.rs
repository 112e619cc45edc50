//! Name-to-address registry of Rabbit internal I/O registers.

use std::collections::{hash_map, HashMap};

mod registers;

pub use registers::IO_REGISTERS;

/// Immutable lookup table from register name to I/O address.
#[derive(Clone, Debug)]
pub struct IoMap(HashMap<String, u16>);

impl IoMap {
    /// Builds the map of all known Rabbit registers.
    pub fn new() -> Self {
        Self::from_pairs(IO_REGISTERS.iter().copied())
    }

    /// Builds a map from arbitrary `(name, address)` pairs.
    ///
    /// Later entries win if a name occurs more than once.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u16)>,
    {
        IoMap(
            pairs
                .into_iter()
                .map(|(name, address)| (name.to_owned(), address))
                .collect(),
        )
    }

    /// Case-sensitive lookup of a register address.
    pub fn lookup(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u16> {
        self.0.iter()
    }
}

impl Default for IoMap {
    fn default() -> Self {
        Self::new()
    }
}
