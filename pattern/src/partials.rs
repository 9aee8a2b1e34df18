use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A read-only dictionary of named expression fragments.
///
/// Each fragment is expected to contain exactly one capturing group, e.g.
/// `([a-z]+)` or `(txt|jpg|png)`.
pub trait Partials {
    fn fragment(&self, name: &str) -> Option<&str>;

    fn contains(&self, name: &str) -> bool {
        self.fragment(name).is_some()
    }
}

impl<T: Partials + ?Sized> Partials for &T {
    fn fragment(&self, name: &str) -> Option<&str> {
        (**self).fragment(name)
    }
}

impl<S: BuildHasher> Partials for HashMap<String, String, S> {
    fn fragment(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> Partials for HashMap<&str, &str, S> {
    fn fragment(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl Partials for BTreeMap<String, String> {
    fn fragment(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Partials for BTreeMap<&str, &str> {
    fn fragment(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}
