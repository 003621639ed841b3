//! Core library for `folder_tree`.
//!
//! Folders are stored as a flat, ordered collection where each record carries
//! a materialized path (`alpha.bravo.charlie`). [`HierarchyStore`] answers
//! "folders of an organization" and "descendants of a folder" queries and
//! relocates a folder together with its subtree.
//!
//! Around the store sit the I/O collaborators used by the binary: JSON
//! load/save ([`data`]), a seedable sample generator ([`sample`]), XML
//! configuration ([`config`]) and the CLI definition ([`cli`]).

pub mod cli;
pub mod config;
pub mod data;
pub mod errors;
pub mod folder;
pub mod output;
pub mod sample;
pub mod store;

pub use config::{Config, LogLevel, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use data::{load_folders, save_folders};
pub use errors::{HierarchyError, InvalidMove, Lookup};
pub use folder::{DEFAULT_ORG_ID, Folder, OrgId, default_org_id};
pub use store::HierarchyStore;
