//! Go import set accumulated per template and merged across a run.

use crate::constants::IO_IMPORT;
use std::collections::BTreeSet;

/// A deduplicated, name-ordered set of Go package paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSet {
    packages: BTreeSet<String>,
}

impl ImportSet {
    /// An import set holding only `io`, which every generated function uses.
    pub fn new() -> Self {
        let mut packages = BTreeSet::new();
        packages.insert(IO_IMPORT.to_string());
        Self { packages }
    }

    /// Adds a package.
    pub fn insert<S: Into<String>>(&mut self, package: S) {
        self.packages.insert(package.into());
    }

    /// Adds every package of `other`.
    pub fn merge(&mut self, other: &ImportSet) {
        self.packages.extend(other.packages.iter().cloned());
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    /// Packages in name order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        ImportSet::new()
    }
}

impl<'a> FromIterator<&'a ImportSet> for ImportSet {
    fn from_iter<I: IntoIterator<Item = &'a ImportSet>>(iter: I) -> Self {
        let mut union = ImportSet::new();
        for set in iter {
            union.merge(set);
        }
        union
    }
}
