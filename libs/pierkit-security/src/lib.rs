#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod accepted_scopes;
pub mod action;
pub mod permission;
pub mod sensitivity;

pub use accepted_scopes::AcceptedScopes;
pub use action::{Action, AdminAction, DataAction, ParseActionError};
pub use permission::{
    GroupPermission, ParseGroupPermissionError, ParsePermissionError, Permission, PermissionTier,
};
pub use sensitivity::{ParseSensitivityError, SensitivityLevel};
