//! In-memory model of an INI file: a store of sections, each owning keys.
//!
//! # Ordering
//!
//! Both sections and keys are kept in `Vec`s in the order they were first
//! seen.  Lookups are linear scans; configuration files are small (tens of
//! sections, hundreds of keys at most) so this is faster in practice than
//! hashing, and it keeps rewrites of the file in the same order a human wrote
//! them.
//!
//! # Lookup-or-create
//!
//! Names are unique and compared case-sensitively.  Inserting a name that
//! already exists never produces a duplicate:
//!
//! - [`ConfigStore::section_or_insert`] returns the existing section.
//! - [`Section::insert`] overwrites the existing key's value.

/// One `name = value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    name: String,
    value: String,
}

impl Key {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw, unparsed value exactly as stored.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// One `[name]` block and the keys that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    keys: Vec<Key>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the key called `name`, or `None` if this section has no such key.
    ///
    /// `None` is the "not found" case; a key whose value is the empty string is
    /// still `Some`.
    pub fn key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| k.name == name)
    }

    /// Shorthand for `self.key(name).map(Key::value)`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.key(name).map(Key::value)
    }

    /// Inserts `name = value`, updating the value in place when the key
    /// already exists.  Returns the stored key.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) -> &mut Key {
        match self.keys.iter().position(|k| k.name == name) {
            Some(idx) => {
                let key = &mut self.keys[idx];
                key.set_value(value);
                key
            }
            None => {
                self.keys.push(Key::new(name, value));
                let last = self.keys.len() - 1;
                &mut self.keys[last]
            }
        }
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Root of the model: every section parsed from (or written to) one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigStore {
    sections: Vec<Section>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Returns the position of the section called `name`, appending an empty
    /// section first if none exists.
    ///
    /// The parser keeps this index as its "current section" marker: indices
    /// stay valid while keys are appended, unlike a borrowed reference.
    pub fn section_index_or_insert(&mut self, name: &str) -> usize {
        match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        }
    }

    /// Returns the section called `name`, creating it when absent.
    pub fn section_or_insert(&mut self, name: &str) -> &mut Section {
        let idx = self.section_index_or_insert(name);
        &mut self.sections[idx]
    }

    /// Section by position, as returned from [`Self::section_index_or_insert`].
    pub fn section_at_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Looks up the raw value of `[section] key`.  Never creates anything.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Sets `[section] key = value`, creating the section and key as needed.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.section_or_insert(section).insert(key, value);
    }

    /// Sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
