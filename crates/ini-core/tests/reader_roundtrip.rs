//! Integration tests for `IniReader` backed by real files.
//!
//! Each test works in its own scratch directory under the system temp dir and
//! goes through the public API only: open, write, reopen, read.

use std::fs;
use std::path::PathBuf;

use ini_core::{IniError, IniReader};
use uuid::Uuid;

/// Creates an empty scratch directory and returns it.
fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ini_core_it_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn test_write_to_new_file_creates_header_and_key() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("fresh.ini");
    assert!(!path.exists());
    let mut ini = IniReader::open_path(&path);

    // Act
    ini.write_string("Player", "name", "Ada").expect("write");

    // Assert
    let text = fs::read_to_string(&path).expect("file created");
    assert!(text.contains("[Player]"));
    assert!(text.contains("name = Ada"));
    let reopened = IniReader::open_path(&path);
    assert_eq!(reopened.read_string("Player", "name", ""), "Ada");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_every_type_round_trips_through_the_file() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("types.ini");
    let mut ini = IniReader::open_path(&path);

    // Act
    ini.write_int("T", "int", -123_456).expect("int");
    ini.write_float("T", "float", 3.141_592).expect("float");
    ini.write_bool("T", "yes", true).expect("bool true");
    ini.write_bool("T", "no", false).expect("bool false");
    ini.write_string("T", "text", "  spaced out  ").expect("string");
    ini.set("T", "big", 9_000_000_000i64).expect("i64");
    ini.set("T", "double", 0.000_125f64).expect("f64");

    // Assert: both the live reader and a fresh one see the same values
    let reopened = IniReader::open_path(&path);
    for reader in [&ini, &reopened] {
        assert_eq!(reader.read_int("T", "int", 0), -123_456);
        assert!((reader.read_float("T", "float", 0.0) - 3.141_592).abs() < 1e-6);
        assert!(reader.read_bool("T", "yes", false));
        assert!(!reader.read_bool("T", "no", true));
        assert_eq!(reader.read_string("T", "text", ""), "  spaced out  ");
        assert_eq!(reader.get("T", "big", 0i64), 9_000_000_000);
        assert!((reader.get("T", "double", 0.0f64) - 0.000_125).abs() < 1e-9);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_bool_round_trip_ignores_default() {
    let dir = scratch_dir();
    let mut ini = IniReader::open_path(dir.join("bools.ini"));

    ini.write_bool("B", "t", true).expect("write");
    ini.write_bool("B", "f", false).expect("write");

    for default in [true, false] {
        assert!(ini.read_bool("B", "t", default));
        assert!(!ini.read_bool("B", "f", default));
        assert_eq!(ini.read_bool("B", "unset", default), default);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_float_default_with_no_file_is_exact() {
    let dir = scratch_dir();
    let ini = IniReader::open_path(dir.join("missing.ini"));

    assert_eq!(ini.read_float("S", "k", 0.0), 0.0);
    assert_eq!(ini.read_float("S", "k", 1.25), 1.25);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_reading_does_not_create_file_or_entries() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("untouched.ini");
    let ini = IniReader::open_path(&path);

    // Act
    let _ = ini.read_int("S", "k", 1);
    let _ = ini.read_string("S", "k", "x");

    // Assert
    assert!(!path.exists());
    assert!(ini.store().is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_preserves_existing_entries_and_order() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("existing.ini");
    fs::write(
        &path,
        "; settings\n[Window]\nwidth = 800\nheight = 600\n\n[Audio]\nvolume = 0.8\n",
    )
    .expect("seed");
    let mut ini = IniReader::open_path(&path);

    // Act
    ini.write_int("Window", "width", 1024).expect("update");
    ini.write_bool("Network", "online", true).expect("new section");

    // Assert
    let reopened = IniReader::open_path(&path);
    assert_eq!(reopened.read_int("Window", "width", 0), 1024);
    assert_eq!(reopened.read_int("Window", "height", 0), 600);
    assert_eq!(reopened.read_float("Audio", "volume", 0.0), 0.8);
    assert!(reopened.read_bool("Network", "online", false));
    let order: Vec<&str> = reopened.store().sections().map(|s| s.name()).collect();
    assert_eq!(order, vec!["Window", "Audio", "Network"]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_writes_update_memory_for_subsequent_reads() {
    let dir = scratch_dir();
    let mut ini = IniReader::open_path(dir.join("live.ini"));

    ini.write_int("S", "counter", 1).expect("first");
    let next = ini.read_int("S", "counter", 0) + 1;
    ini.write_int("S", "counter", next).expect("second");

    assert_eq!(ini.read_int("S", "counter", 0), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_failed_write_keeps_memory_and_disk_consistent() {
    // Arrange: a directory occupies the hidden temp file's path
    let dir = scratch_dir();
    let path = dir.join("occupied.ini");
    fs::create_dir_all(dir.join(".occupied.ini.tmp")).expect("block temp path");
    let mut ini = IniReader::open_path(&path);

    // Act
    let result = ini.write_int("S", "k", 5);

    // Assert
    assert!(matches!(result, Err(IniError::Io { .. })));
    assert_eq!(ini.read_int("S", "k", -1), -1);
    assert!(!path.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_to_latin1_file_preserves_other_entries() {
    // Arrange: a legacy single-byte file with a non-ASCII value
    let dir = scratch_dir();
    let path = dir.join("legacy.ini");
    fs::write(&path, b"[User]\nname = M\xFCller\n").expect("seed");
    let mut ini = IniReader::open_path(&path);

    // Act
    ini.write_int("Window", "width", 800).expect("write");

    // Assert
    let bytes = fs::read(&path).expect("read back");
    assert!(bytes.windows(7).any(|w| w == b"M\xFCller"));
    assert!(!bytes.windows(3).any(|w| w == b"\xEF\xBF\xBD"));
    let reopened = IniReader::open_path(&path);
    assert_eq!(reopened.read_string("User", "name", ""), "Müller");
    assert_eq!(reopened.read_int("Window", "width", 0), 800);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_unreadable_file_is_not_overwritten() {
    // Arrange: reading a directory fails with something other than NotFound
    let dir = scratch_dir();
    let path = dir.join("busy.ini");
    fs::create_dir_all(&path).expect("block path");
    let mut ini = IniReader::open_path(&path);

    // Act
    let result = ini.write_int("S", "k", 5);

    // Assert
    assert!(matches!(result, Err(IniError::Unreadable { .. })));
    assert!(path.is_dir());
    assert_eq!(ini.read_int("S", "k", -1), -1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_set_path_switches_files() {
    // Arrange
    let dir = scratch_dir();
    fs::write(dir.join("a.ini"), "[S]\nk = a\n").expect("seed a");
    fs::write(dir.join("b.ini"), "[S]\nk = b\n").expect("seed b");
    let mut ini = IniReader::open_path(dir.join("a.ini"));
    assert_eq!(ini.read_string("S", "k", ""), "a");

    // Act
    ini.set_path(dir.join("b.ini"));

    // Assert
    assert_eq!(ini.read_string("S", "k", ""), "b");
    assert_eq!(ini.path(), dir.join("b.ini"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_set_ini_path_with_absolute_name_uses_it_verbatim() {
    let dir = scratch_dir();
    let target = dir.join("absolute");
    let mut ini = IniReader::open_path(dir.join("other.ini"));

    ini.set_ini_path(&target.to_string_lossy());

    assert_eq!(ini.path(), dir.join("absolute.ini"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_reload_sees_external_changes() {
    let dir = scratch_dir();
    let path = dir.join("shared.ini");
    let mut ini = IniReader::open_path(&path);
    ini.write_int("S", "k", 1).expect("write");

    fs::write(&path, "[S]\nk = 2\n").expect("external edit");
    assert_eq!(ini.read_int("S", "k", 0), 1);
    ini.reload();

    assert_eq!(ini.read_int("S", "k", 0), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_proxy_chain_writes_through_to_disk() {
    // Arrange
    let dir = scratch_dir();
    let path = dir.join("proxy.ini");
    let mut ini = IniReader::open_path(&path);

    // Act
    {
        let mut video = ini.section("Video");
        video.key("width").set(1920).expect("width");
        video.key("vsync").set(true).expect("vsync");
        video.key("title").set("My Game".to_string()).expect("title");
    }

    // Assert
    let mut reopened = IniReader::open_path(&path);
    let mut video = reopened.section("Video");
    assert_eq!(video.key("width").get::<i32>(), 1920);
    assert!(video.key("vsync").get::<bool>());
    assert_eq!(video.key("title").get::<String>(), "My Game");
    assert_eq!(video.key("height").get_or(1080), 1080);

    fs::remove_dir_all(&dir).ok();
}
