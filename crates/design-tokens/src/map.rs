/// An immutable, ordered key → value token table.
///
/// Tables are declared as `const` items and never change at runtime, so a
/// `TokenMap` is `Copy` and can be passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMap {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl TokenMap {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }

    /// Table name, used as the CSS custom property prefix (`--{name}-{key}`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up a token by key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Look up a token, returning `fallback` when the key is absent.
    pub fn get_or(&self, key: &str, fallback: &'static str) -> &'static str {
        self.get(key).unwrap_or(fallback)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + 'static {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + 'static {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
