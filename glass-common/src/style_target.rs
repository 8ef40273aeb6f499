//! Write seam for global style variables
//!
//! The browser implementation lives in glass-ui and writes to
//! `document.documentElement.style`. Every panel instance writes to the same
//! document-wide variables, so only one panel should be mounted at a time.

use std::collections::BTreeMap;

/// Something that accepts CSS custom property writes
pub trait StyleTarget {
    /// Set `name` (including the leading `--`) to `value`
    fn set_variable(&mut self, name: &str, value: &str);
}

/// In-memory style root, used natively and in tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStyleTarget {
    variables: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStyleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Total number of writes received, including overwrites
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl StyleTarget for MemoryStyleTarget {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.variables.insert(name.to_string(), value.to_string());
    }
}
