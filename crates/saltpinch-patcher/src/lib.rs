//! SaltPinch Patcher
//!
//! Redirects food recipes from the Salt Pile ingredient to the Salt Pinch
//! item of a dependency plugin, emitting the changes as a new patch layer.
//!
//! # Core Concepts
//!
//! - [`IdentifierResolver`]: Finds the replacement item by EditorID inside
//!   the dependency plugin
//! - [`PatchGenerator`]: Produces recipe overlays from the winning view
//! - [`SaltPilePatcher`]: Runs both against a data folder and load order
//! - [`PatcherSettings`]: Dependency, EditorID, sentinel and patch name
//!
//! # Example
//!
//! ```rust,no_run
//! use saltpinch_patcher::{PatcherSettings, RunRequest, SaltPilePatcher};
//!
//! let patcher = SaltPilePatcher::new(PatcherSettings::default());
//! let run = patcher.execute(&RunRequest {
//!     data_folder: "Data".into(),
//!     load_order_path: "plugins.txt".into(),
//!     output_path: "Data/SaltPilePatcher.esp".into(),
//!     source_path: None,
//! })?;
//! println!("patched {} recipes", run.stats.patched);
//! # Ok::<(), saltpinch_patcher::PatchError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod generator;
mod pipeline;
mod resolver;
mod settings;

pub use error::{PatchError, SettingsError};
pub use generator::{GeneratedPatch, PatchGenerator, PatchStats};
pub use pipeline::{CheckRequest, PatchRun, RunRequest, SaltPilePatcher};
pub use resolver::IdentifierResolver;
pub use settings::{PatcherSettings, SETTINGS_FILE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
