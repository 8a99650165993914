#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Access Plugin
//!
//! This plugin serves permission grants and dataset classifications
//! straight from configuration, for development and testing.
//!
//! It implements both guard collaborators:
//!
//! - `PermissionStore`: per-subject grant lists; unknown subjects hold
//!   no grants, which is an answer rather than an error.
//! - `ResourceClassifier`: a fixed dataset catalog; datasets outside
//!   the catalog are reported as not found.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   static_access_plugin:
//!     config:
//!       grants:
//!         "reporting-service": ["READ_ALL"]
//!         "ingest-service": ["READ_ALL", "WRITE_PRIVATE"]
//!       datasets:
//!         - domain: "sales"
//!           dataset: "orders"
//!           sensitivity: PRIVATE
//!         - domain: "sales"
//!           dataset: "catalog"
//!           sensitivity: PUBLIC
//! ```

pub mod config;
pub mod domain;

pub use config::{DatasetEntry, StaticAccessPluginConfig};
pub use domain::Service;
