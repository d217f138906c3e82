//! Append-only result collector for a single similarity-search query.

/// A resettable, append-only sequence of search results.
#[derive(Debug, Clone)]
pub struct Collector<T> {
    items: Vec<T>,
}

impl<T> Collector<T> {
    pub fn new() -> Self {
        Collector { items: Vec::new() }
    }

    /// Truncates to empty, retaining capacity for the next query.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent_on_empty_collector() {
        let mut c: Collector<u32> = Collector::new();
        c.reset();
        assert!(c.is_empty());
        c.reset();
        assert!(c.is_empty());
    }

    #[test]
    fn append_then_reset_clears() {
        let mut c = Collector::new();
        c.append(1);
        c.append(2);
        assert_eq!(c.len(), 2);
        c.reset();
        assert!(c.is_empty());
        assert_eq!(c.iter().count(), 0);
    }
}
