//! Dataset Guard Module
//!
//! Authorisation decisions for data-catalog endpoints. The guard picks
//! the presented credential, extracts verified claims, resolves the
//! granted permissions and matches them against the endpoint's required
//! actions and the addressed dataset's sensitivity classification.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
