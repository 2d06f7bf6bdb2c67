//! `IniReader`: the public entry point combining path resolution, a storage
//! backend, and typed accessors.
//!
//! # Reading
//!
//! Every `read_*` / [`IniReader::get`] call takes a default.  If the section
//! or key is missing, the default comes back unchanged and nothing is created.
//! Reads never fail.
//!
//! # Writing
//!
//! Every `write_*` / [`IniReader::set`] call formats the value, persists the
//! file, and only then updates what later reads see.  A failed write returns
//! an [`IniError`] and leaves the reader exactly as it was.
//!
//! # Proxy access
//!
//! ```rust
//! use ini_core::backend::mock::MockBackend;
//! use ini_core::IniReader;
//!
//! let mut ini = IniReader::with_backend(MockBackend::new("demo.ini"));
//! let mut video = ini.section("Video");
//! video.key("fullscreen").set(true).unwrap();
//! video.key("gamma").set(2.2f32).unwrap();
//!
//! assert!(video.key("fullscreen").get::<bool>());
//! assert_eq!(video.key("missing").get::<i32>(), 0);
//! assert_eq!(video.key("missing").get_or(60), 60);
//! ```
//!
//! # Threads
//!
//! `IniReader` is not internally synchronised.  Wrap it in a `Mutex` to share
//! it between threads.

use std::path::{Path, PathBuf};

use crate::backend::{FileBackend, ProfileBackend};
use crate::codec::{validate_key_name, validate_section_name, validate_value};
use crate::domain::ConfigStore;
use crate::error::{IniError, ParseWarning};
use crate::path;
use crate::value::IniValue;

/// Reader/writer for one INI file.
#[derive(Debug)]
pub struct IniReader<B: ProfileBackend = FileBackend> {
    backend: B,
}

impl IniReader<FileBackend> {
    /// Resolves `filename` (see [`crate::path`]) and loads it.
    ///
    /// Never fails: a missing or unreadable file gives an empty configuration
    /// and the first write creates it.
    pub fn open(filename: &str) -> Self {
        Self::open_path(path::resolve(filename))
    }

    /// Loads the file at `path` without any resolution.
    pub fn open_path(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(FileBackend::open(path))
    }

    /// The parsed model.
    pub fn store(&self) -> &ConfigStore {
        self.backend.store()
    }

    /// Non-fatal problems found while loading.
    pub fn warnings(&self) -> &[ParseWarning] {
        self.backend.warnings()
    }
}

#[cfg(target_os = "windows")]
impl IniReader<crate::backend::PrivateProfileBackend> {
    /// Resolves `filename` and reads/writes it through the Windows
    /// private-profile API instead of the built-in parser.
    pub fn open_private_profile(filename: &str) -> Self {
        Self::with_backend(crate::backend::PrivateProfileBackend::new(path::resolve(
            filename,
        )))
    }
}

impl<B: ProfileBackend> IniReader<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Resolved path of the backing file.
    pub fn path(&self) -> &Path {
        self.backend.path()
    }

    /// Switches to `path`, used verbatim, and loads it.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.backend.set_path(path.into());
    }

    /// Switches to `filename` after resolving it like [`IniReader::open`].
    pub fn set_ini_path(&mut self, filename: &str) {
        self.set_path(path::resolve(filename));
    }

    /// Re-reads the backing file, dropping anything loaded before.
    pub fn reload(&mut self) {
        self.backend.reload();
    }

    /// Copy of all sections and keys.
    pub fn snapshot(&self) -> ConfigStore {
        self.backend.snapshot()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.backend.has_section(section)
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.backend.read(section, key).is_some()
    }

    // ── Generic accessors ─────────────────────────────────────────────────────

    /// Reads `[section] key` as `T`, or returns `default` when absent.
    pub fn get<T: IniValue>(&self, section: &str, key: &str, default: T) -> T {
        match self.backend.read(section, key) {
            Some(raw) => T::from_raw(&raw, default),
            None => default,
        }
    }

    /// Formats `value` and persists it as `[section] key`.
    ///
    /// # Errors
    ///
    /// - [`IniError::InvalidName`] / [`IniError::InvalidValue`] if the entry
    ///   cannot be represented in an INI file.
    /// - [`IniError::Io`] / [`IniError::Platform`] if persisting failed.
    /// - [`IniError::Unreadable`] if the file exists but could not be read,
    ///   so rewriting it would lose entries.
    /// - [`IniError::Unencodable`] if a Latin-1 file cannot hold the text.
    pub fn set<T: IniValue>(&mut self, section: &str, key: &str, value: T) -> Result<(), IniError> {
        self.write_raw(section, key, &value.to_raw())
    }

    fn write_raw(&mut self, section: &str, key: &str, raw: &str) -> Result<(), IniError> {
        validate_section_name(section)?;
        validate_key_name(key)?;
        validate_value(section, key, raw)?;
        self.backend.write(section, key, raw)
    }

    // ── Typed accessors ───────────────────────────────────────────────────────

    /// Returns an owned copy of the stored string.
    pub fn read_string(&self, section: &str, key: &str, default: &str) -> String {
        self.backend
            .read(section, key)
            .unwrap_or_else(|| default.to_string())
    }

    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn write_string(&mut self, section: &str, key: &str, value: &str) -> Result<(), IniError> {
        self.write_raw(section, key, value)
    }

    pub fn read_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.get(section, key, default)
    }

    /// Alias of [`IniReader::read_int`].
    pub fn read_integer(&self, section: &str, key: &str, default: i32) -> i32 {
        self.read_int(section, key, default)
    }

    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn write_int(&mut self, section: &str, key: &str, value: i32) -> Result<(), IniError> {
        self.set(section, key, value)
    }

    /// Alias of [`IniReader::write_int`].
    ///
    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn write_integer(&mut self, section: &str, key: &str, value: i32) -> Result<(), IniError> {
        self.write_int(section, key, value)
    }

    pub fn read_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.get(section, key, default)
    }

    /// Stores `value` with six fractional digits.
    ///
    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn write_float(&mut self, section: &str, key: &str, value: f32) -> Result<(), IniError> {
        self.set(section, key, value)
    }

    /// `true`/`false` in any case; anything else returns `default`.
    pub fn read_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.get(section, key, default)
    }

    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn write_bool(&mut self, section: &str, key: &str, value: bool) -> Result<(), IniError> {
        self.set(section, key, value)
    }

    // ── Proxies ───────────────────────────────────────────────────────────────

    /// Handle bound to one section, for `ini.section("S").key("k")` chains.
    pub fn section(&mut self, name: &str) -> SectionRef<'_, B> {
        SectionRef {
            reader: self,
            name: name.to_string(),
        }
    }
}

/// A section name bound to its reader.  Creating one has no side effect.
#[derive(Debug)]
pub struct SectionRef<'a, B: ProfileBackend> {
    reader: &'a mut IniReader<B>,
    name: String,
}

impl<B: ProfileBackend> SectionRef<'_, B> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&mut self, name: &str) -> KeyRef<'_, B> {
        KeyRef {
            reader: &mut *self.reader,
            section: &self.name,
            key: name.to_string(),
        }
    }
}

/// A `(section, key)` pair bound to its reader.
#[derive(Debug)]
pub struct KeyRef<'a, B: ProfileBackend> {
    reader: &'a mut IniReader<B>,
    section: &'a str,
    key: String,
}

impl<B: ProfileBackend> KeyRef<'_, B> {
    /// Reads as `T`, defaulting to the type's zero value (`0`, `0.0`,
    /// `false`, `""`).
    pub fn get<T: IniValue>(&self) -> T {
        self.get_or(T::fallback())
    }

    pub fn get_or<T: IniValue>(&self, default: T) -> T {
        self.reader.get(self.section, &self.key, default)
    }

    /// # Errors
    ///
    /// See [`IniReader::set`].
    pub fn set<T: IniValue>(&mut self, value: T) -> Result<(), IniError> {
        self.reader.set(self.section, &self.key, value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::error::NameKind;

    fn reader_with(text: &str) -> IniReader<MockBackend> {
        let store = crate::codec::parse_str(text).store;
        IniReader::with_backend(MockBackend::with_store("mock.ini", store))
    }

    #[test]
    fn test_reads_typed_values() {
        // Arrange
        let ini = reader_with("[S]\ni = 42\nf = 2.5\nb = TRUE\ns = \"hi there\"\n");

        // Act / Assert
        assert_eq!(ini.read_int("S", "i", 0), 42);
        assert_eq!(ini.read_integer("S", "i", 0), 42);
        assert_eq!(ini.read_float("S", "f", 0.0), 2.5);
        assert!(ini.read_bool("S", "b", false));
        assert_eq!(ini.read_string("S", "s", ""), "hi there");
    }

    #[test]
    fn test_absent_entries_return_default_without_side_effects() {
        // Arrange
        let ini = reader_with("[S]\nk = v\n");

        // Act
        let i = ini.read_int("S", "missing", -1);
        let s = ini.read_string("Nope", "k", "dflt");
        let f = ini.read_float("Nope", "k", 0.0);
        let b = ini.read_bool("Nope", "k", true);

        // Assert
        assert_eq!(i, -1);
        assert_eq!(s, "dflt");
        assert_eq!(f, 0.0);
        assert!(b);
        assert_eq!(ini.backend().store.len(), 1);
        assert!(!ini.has_section("Nope"));
        assert!(ini.backend().writes.is_empty());
    }

    #[test]
    fn test_garbage_number_reads_as_zero_not_default() {
        let ini = reader_with("[S]\nn = lots\n");

        assert_eq!(ini.read_int("S", "n", 5), 0);
        assert_eq!(ini.read_float("S", "n", 5.0), 0.0);
    }

    #[test]
    fn test_unrecognised_bool_uses_default() {
        let ini = reader_with("[S]\nflag = yes\n");

        assert!(ini.read_bool("S", "flag", true));
        assert!(!ini.read_bool("S", "flag", false));
    }

    #[test]
    fn test_writes_use_canonical_formatting() {
        // Arrange
        let mut ini = IniReader::with_backend(MockBackend::new("mock.ini"));

        // Act
        ini.write_int("S", "i", -7).expect("int");
        ini.write_float("S", "f", 1.5).expect("float");
        ini.write_bool("S", "b", false).expect("bool");
        ini.write_string("S", "s", "text").expect("string");
        ini.write_integer("S", "j", 3).expect("integer");

        // Assert
        let raw: Vec<&str> = ini
            .backend()
            .writes
            .iter()
            .map(|(_, _, v)| v.as_str())
            .collect();
        assert_eq!(raw, vec!["-7", "1.500000", "false", "text", "3"]);
    }

    #[test]
    fn test_failed_write_surfaces_error_and_keeps_state() {
        // Arrange
        let mut backend = MockBackend::new("mock.ini");
        backend.should_fail = true;
        let mut ini = IniReader::with_backend(backend);

        // Act
        let result = ini.write_int("S", "k", 1);

        // Assert
        assert!(matches!(result, Err(IniError::Io { .. })));
        assert_eq!(ini.read_int("S", "k", 99), 99);
    }

    #[test]
    fn test_invalid_names_are_rejected_before_reaching_backend() {
        let mut ini = IniReader::with_backend(MockBackend::new("mock.ini"));

        let section = ini.write_int("", "k", 1);
        let key = ini.write_int("S", "a=b", 1);
        let value = ini.write_string("S", "k", "line\nbreak");

        assert!(matches!(
            section,
            Err(IniError::InvalidName {
                kind: NameKind::Section,
                ..
            })
        ));
        assert!(matches!(
            key,
            Err(IniError::InvalidName {
                kind: NameKind::Key,
                ..
            })
        ));
        assert!(matches!(value, Err(IniError::InvalidValue { .. })));
        assert!(ini.backend().writes.is_empty());
    }

    #[test]
    fn test_string_reads_are_independent_owned_values() {
        let ini = reader_with("[S]\na = first\nb = second\n");

        let a = ini.read_string("S", "a", "");
        let b = ini.read_string("S", "b", "");

        assert_eq!(a, "first");
        assert_eq!(b, "second");
    }

    #[test]
    fn test_proxy_reads_with_type_zero_default() {
        let mut ini = reader_with("[S]\nn = 12\n");
        let mut section = ini.section("S");

        assert_eq!(section.name(), "S");
        assert_eq!(section.key("n").get::<i32>(), 12);
        assert_eq!(section.key("absent").get::<i32>(), 0);
        assert_eq!(section.key("absent").get::<f32>(), 0.0);
        assert!(!section.key("absent").get::<bool>());
        assert_eq!(section.key("absent").get::<String>(), "");
    }

    #[test]
    fn test_proxy_set_delegates_to_write() {
        // Arrange
        let mut ini = IniReader::with_backend(MockBackend::new("mock.ini"));

        // Act
        ini.section("Audio")
            .key("volume")
            .set(0.25f32)
            .expect("proxy write");

        // Assert
        assert_eq!(ini.read_float("Audio", "volume", 1.0), 0.25);
        assert_eq!(
            ini.backend().writes,
            vec![(
                "Audio".to_string(),
                "volume".to_string(),
                "0.250000".to_string()
            )]
        );
    }

    #[test]
    fn test_set_path_reloads_backend() {
        let mut ini = IniReader::with_backend(MockBackend::new("a.ini"));

        ini.set_path("/somewhere/b.ini");

        assert_eq!(ini.path(), Path::new("/somewhere/b.ini"));
        assert_eq!(ini.backend().reloads, 1);
    }

    #[test]
    fn test_has_key_distinguishes_empty_from_missing() {
        let ini = reader_with("[S]\nempty =\n");

        assert!(ini.has_key("S", "empty"));
        assert!(!ini.has_key("S", "missing"));
        assert_eq!(ini.read_string("S", "empty", "dflt"), "");
    }
}
