//! SaltPinch Record Store
//!
//! Layered record storage with last-loaded-wins override resolution.
//!
//! # Core Concepts
//!
//! - [`Plugin`]: One layer of records, stored as a JSON document
//! - [`LoadOrder`]: Ordered, enable-flagged plugin listing
//! - [`RecordStore`]: Listings plus their loaded layers
//! - [`WinningView`]: One winning record per key, in priority order
//! - [`IdentifierIndex`]: EditorID lookup scoped to one layer
//!
//! # Architecture
//!
//! ```text
//! plugins.txt → LoadOrder ─┐
//!                          ├→ RecordStore → WinningView → (patch generation)
//! Data/*.esp  → Plugin ────┘        ↑
//!                                   └── append_overlay(patch)
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod identifier;
mod load_order;
mod plugin;
mod store;
mod winning;

pub use error::StoreError;
pub use identifier::IdentifierIndex;
pub use load_order::{LoadOrder, LoadOrderEntry};
pub use plugin::Plugin;
pub use store::{load_layer, ModListing, RecordStore};
pub use winning::{WinningRecord, WinningView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
