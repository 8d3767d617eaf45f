use std::fmt;

/// Read/write handle to one piece of shared state.
pub trait StateCell<T> {
    fn get(&self) -> &T;
    fn set(&mut self, value: T);
}

/// A named state cell owned by the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom<T> {
    key: &'static str,
    value: T,
}

impl<T> Atom<T> {
    pub const fn new(key: &'static str, value: T) -> Self {
        Atom { key, value }
    }
}

impl<T: Default> Atom<T> {
    pub fn with_default(key: &'static str) -> Self {
        Atom::new(key, T::default())
    }
}

impl<T: fmt::Debug> StateCell<T> for Atom<T> {
    fn get(&self) -> &T {
        &self.value
    }

    fn set(&mut self, value: T) {
        tracing::debug!(key = self.key, ?value, "state cell updated");
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_value() {
        let mut atom = Atom::new("counter", 1);
        atom.set(2);
        assert_eq!(*atom.get(), 2);
    }

    #[test]
    fn with_default_starts_from_default() {
        let atom: Atom<String> = Atom::with_default("name");
        assert!(atom.get().is_empty());
    }
}
