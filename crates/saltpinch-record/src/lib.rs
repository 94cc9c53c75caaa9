//! SaltPinch Record Model
//!
//! Typed game-data records addressed by stable keys.
//!
//! # Core Concepts
//!
//! - [`ModKey`]: Identifier of one plugin (layer) in the load order
//! - [`FormKey`]: Stable record key, shared by every override of a record
//! - [`Category`]: Explicit record kind tag used for link resolution
//! - [`Record`]: Key, optional EditorID and a typed [`RecordBody`]
//!
//! # Example
//!
//! ```rust
//! use saltpinch_record::{Category, FormKey, Ingestible, IngestibleFlags, Record, RecordBody};
//!
//! let key: FormKey = "064B30:Skyrim.esm".parse().unwrap();
//! let stew = Record::new(
//!     key,
//!     Some("FoodBeefStew".to_string()),
//!     RecordBody::Ingestible(Ingestible::new(IngestibleFlags::FOOD_ITEM)),
//! );
//! assert_eq!(stew.category(), Category::Ingestible);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

mod form_key;
mod ingestible;
mod item;
mod mod_key;
mod recipe;
mod record;

pub mod skyrim;

pub use form_key::{FormKey, MAX_FORM_ID};
pub use ingestible::{Ingestible, IngestibleFlags};
pub use item::{GenericItem, Keyword};
pub use mod_key::{ModKey, ModType};
pub use recipe::{ConstructibleObject, ContainerEntry};
pub use record::{Category, Record, RecordBody};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors parsing or constructing keys
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// Plugin name is empty
    #[error("plugin name is empty")]
    EmptyModName,

    /// Plugin name contains path separators
    #[error("invalid plugin name: '{0}'")]
    InvalidModName(String),

    /// File name has no extension
    #[error("plugin file name has no extension: '{0}'")]
    MissingExtension(String),

    /// Extension is not esm/esp/esl
    #[error("unknown plugin extension: '{0}' (expected esm, esp or esl)")]
    UnknownExtension(String),

    /// Form key text is not `XXXXXX:Plugin.ext`
    #[error("malformed form key: '{0}' (expected XXXXXX:Plugin.ext)")]
    MalformedFormKey(String),

    /// Local id does not fit in 24 bits
    #[error("form id {0:#X} exceeds 24 bits")]
    IdOutOfRange(u32),
}
