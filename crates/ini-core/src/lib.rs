//! # ini-core
//!
//! Read and write sectioned key/value configuration stored in classic `.ini`
//! files.
//!
//! ```rust,no_run
//! use ini_core::IniReader;
//!
//! // Resolves to `<directory of the running executable>/settings.ini`.
//! let mut ini = IniReader::open("settings");
//!
//! let width = ini.read_int("Window", "width", 1280);
//! let fullscreen = ini.read_bool("Window", "fullscreen", false);
//!
//! ini.write_int("Window", "width", width + 100)?;
//! ini.write_bool("Window", "fullscreen", !fullscreen)?;
//! # Ok::<(), ini_core::IniError>(())
//! ```
//!
//! # Architecture overview (for beginners)
//!
//! The crate is layered from the inside out:
//!
//! - **`domain`**: the in-memory model.  A [`ConfigStore`] owns ordered
//!   [`Section`]s, each owning ordered [`Key`]s.  Each key holds one raw
//!   string; there is no typed data in the model.
//!
//! - **`codec`**: turns text into a `ConfigStore` (the parser) and back (the
//!   renderer).  Bad lines become [`ParseWarning`]s instead of errors.
//!
//! - **`value`**: the [`IniValue`] trait that converts raw strings to and from
//!   `i32`, `f32`, `bool`, `String` and friends.
//!
//! - **`path`**: decides which file a name like `"settings"` refers to.
//!
//! - **`backend`**: where the data lives.  [`FileBackend`] uses the codec above;
//!   on Windows `PrivateProfileBackend` uses the OS profile API instead.
//!
//! - **`reader`**: [`IniReader`], the facade tying everything together.

pub mod backend;
pub mod codec;
pub mod domain;
pub mod error;
pub mod path;
pub mod reader;
pub mod value;

pub use backend::{FileBackend, ProfileBackend};
#[cfg(target_os = "windows")]
pub use backend::PrivateProfileBackend;
pub use codec::TextEncoding;
pub use domain::{ConfigStore, Key, Section};
pub use error::{IniError, NameKind, ParseWarning};
pub use reader::{IniReader, KeyRef, SectionRef};
pub use value::IniValue;
