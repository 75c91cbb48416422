/// Single-selection expand/collapse over list item keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<K> {
    expanded: Option<K>,
}

impl<K: PartialEq> Expansion<K> {
    pub fn new() -> Self {
        Self { expanded: None }
    }

    /// Collapses `key` if it is expanded, otherwise makes it the expanded item.
    pub fn toggle(&mut self, key: K) {
        if self.expanded.as_ref() == Some(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    pub fn current(&self) -> Option<&K> {
        self.expanded.as_ref()
    }
}

impl<K: PartialEq> Default for Expansion<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_twice_collapses() {
        let mut expansion = Expansion::new();
        expansion.toggle("k1");
        assert!(expansion.is_expanded(&"k1"));
        expansion.toggle("k1");
        assert_eq!(expansion.current(), None);
    }

    #[test]
    fn test_other_key_replaces() {
        let mut expansion = Expansion::new();
        expansion.toggle("k1");
        expansion.toggle("k2");
        assert_eq!(expansion.current(), Some(&"k2"));
        assert!(!expansion.is_expanded(&"k1"));
    }
}
