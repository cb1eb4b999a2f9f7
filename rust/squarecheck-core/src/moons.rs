//! Planet moon counts and the stable sort-by-key example.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonCount {
    pub name: String,
    pub num_moons: u32,
}

impl MoonCount {
    pub fn new(name: impl Into<String>, num_moons: u32) -> Self {
        Self {
            name: name.into(),
            num_moons,
        }
    }
}

/// Ordered list of [`MoonCount`] records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoonTable {
    pub entries: Vec<MoonCount>,
}

impl MoonTable {
    pub fn new(entries: Vec<MoonCount>) -> Self {
        Self { entries }
    }

    /// Earth, Jupiter, Saturn, Uranus, Neptune, in that order.
    pub fn solar_system() -> Self {
        Self::new(vec![
            MoonCount::new("Earth", 1),
            MoonCount::new("Jupiter", 53),
            MoonCount::new("Saturn", 53),
            MoonCount::new("Uranus", 27),
            MoonCount::new("Neptune", 14),
        ])
    }

    /// Sort by moon count, most moons first. Ties keep their relative order.
    pub fn sort_by_moons_desc(&mut self) {
        // slice::sort_by is stable; comparing b to a reverses the key order
        // without reversing equal runs.
        self.entries.sort_by(|a, b| b.num_moons.cmp(&a.num_moons));
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Renders as a literal list of mappings:
/// `[{'name': 'Earth', 'num_moons': 1}, ...]`.
impl fmt::Display for MoonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, m) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{'name': '{}', 'num_moons': {}}}", m.name, m.num_moons)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_desc_is_stable() {
        let mut table = MoonTable::solar_system();
        table.sort_by_moons_desc();
        assert_eq!(
            table.names(),
            vec!["Jupiter", "Saturn", "Uranus", "Neptune", "Earth"]
        );
    }

    #[test]
    fn test_tie_order_follows_input() {
        let mut table = MoonTable::new(vec![
            MoonCount::new("Saturn", 53),
            MoonCount::new("Earth", 1),
            MoonCount::new("Jupiter", 53),
        ]);
        table.sort_by_moons_desc();
        assert_eq!(table.names(), vec!["Saturn", "Jupiter", "Earth"]);
    }

    #[test]
    fn test_display_literal() {
        let table = MoonTable::new(vec![MoonCount::new("Earth", 1), MoonCount::new("Mars", 2)]);
        assert_eq!(
            table.to_string(),
            "[{'name': 'Earth', 'num_moons': 1}, {'name': 'Mars', 'num_moons': 2}]"
        );
        assert_eq!(MoonTable::default().to_string(), "[]");
    }
}
