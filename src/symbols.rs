use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How an address should be annotated in the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayHint {
    Bare,
    Symbol { name: String, offset: u64 },
}

pub trait AddressResolver {
    fn resolve(&self, address: u64) -> DisplayHint;
}

/// Resolver that never knows a symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSymbols;

impl AddressResolver for NoSymbols {
    fn resolve(&self, _address: u64) -> DisplayHint {
        DisplayHint::Bare
    }
}

/// Labels by address; an address resolves to the nearest label at or below it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolMap {
    labels: BTreeMap<u64, String>,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: u64, name: impl Into<String>) {
        self.labels.insert(address, name.into());
    }

    /// Adds a label unless one already exists at `address`.
    pub fn insert_missing(&mut self, address: u64, name: impl FnOnce() -> String) {
        self.labels.entry(address).or_insert_with(name);
    }

    pub fn get(&self, address: u64) -> Option<&str> {
        self.labels.get(&address).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.labels.iter().map(|(a, n)| (*a, n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(u64, String)> for SymbolMap {
    fn from_iter<T: IntoIterator<Item = (u64, String)>>(iter: T) -> Self {
        Self { labels: iter.into_iter().collect() }
    }
}

impl AddressResolver for SymbolMap {
    fn resolve(&self, address: u64) -> DisplayHint {
        match self.labels.range(..=address).next_back() {
            Some((base, name)) => DisplayHint::Symbol { name: name.clone(), offset: address - base },
            None => DisplayHint::Bare,
        }
    }
}

/// `0x00001000`, `0x00001000 <main>` or `0x00001010 <main+0x10>`.
pub fn format_address(address: u64, hint: &DisplayHint) -> String {
    match hint {
        DisplayHint::Bare => format!("{address:#010x}"),
        DisplayHint::Symbol { name, offset: 0 } => format!("{address:#010x} <{name}>"),
        DisplayHint::Symbol { name, offset } => format!("{address:#010x} <{name}+{offset:#x}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_preceding_label() {
        let map: SymbolMap = [(0x1000u64, "main".to_string()), (0x2000, "helper".to_string())]
            .into_iter()
            .collect();
        assert_eq!(map.resolve(0x0fff), DisplayHint::Bare);
        assert_eq!(map.resolve(0x1000), DisplayHint::Symbol { name: "main".into(), offset: 0 });
        assert_eq!(map.resolve(0x1ffc), DisplayHint::Symbol { name: "main".into(), offset: 0xffc });
        assert_eq!(format_address(0x2010, &map.resolve(0x2010)), "0x00002010 <helper+0x10>");
        assert_eq!(format_address(0x1000, &map.resolve(0x1000)), "0x00001000 <main>");
        assert_eq!(format_address(0x20, &NoSymbols.resolve(0x20)), "0x00000020");
    }
}
