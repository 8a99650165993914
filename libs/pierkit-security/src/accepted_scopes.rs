use std::collections::BTreeSet;

use crate::action::Action;
use crate::permission::Permission;
use crate::sensitivity::SensitivityLevel;

/// The permissions that satisfy one endpoint + dataset combination.
///
/// `required` entries must all be held; `optional` entries (when any
/// exist) need at least one hit. Both sets empty means the endpoint
/// asks for nothing beyond a valid credential.
///
/// # Examples
///
/// ```
/// use pierkit_security::{AcceptedScopes, Action, DataAction, SensitivityLevel};
///
/// let scopes = AcceptedScopes::for_actions(
///     &[Action::Data(DataAction::Read)],
///     Some(SensitivityLevel::Public),
/// );
/// let granted = ["READ_PRIVATE".parse().unwrap()].into_iter().collect();
/// assert!(scopes.satisfied_by(&granted));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptedScopes {
    required: BTreeSet<Permission>,
    optional: BTreeSet<Permission>,
}

impl AcceptedScopes {
    // ── Constructors ────────────────────────────────────────────────

    /// Create from explicit sets.
    #[must_use]
    pub fn new(required: BTreeSet<Permission>, optional: BTreeSet<Permission>) -> Self {
        Self { required, optional }
    }

    /// Compute the acceptable permissions for an endpoint requiring
    /// `actions` on a dataset classified at `sensitivity`.
    ///
    /// Admin actions are individually required. Each data action
    /// contributes `<ACTION>_ALL` plus `<ACTION>_<L>` for every level
    /// `L` at or above the dataset's classification; without a
    /// classification only the `ALL` tier is acceptable. No actions
    /// means no constraints.
    #[must_use]
    pub fn for_actions(actions: &[Action], sensitivity: Option<SensitivityLevel>) -> Self {
        let mut required = BTreeSet::new();
        let mut optional = BTreeSet::new();
        for action in actions.iter().copied() {
            match action {
                Action::Admin(admin) => {
                    required.insert(Permission::admin(admin));
                }
                Action::Data(data) => {
                    optional.insert(Permission::all(data));
                    if let Some(level) = sensitivity {
                        for accepted in level.accepting_levels() {
                            optional.insert(Permission::at_level(data, accepted));
                        }
                    }
                }
            }
        }
        Self { required, optional }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Permissions that must all be held.
    #[inline]
    #[must_use]
    pub fn required(&self) -> &BTreeSet<Permission> {
        &self.required
    }

    /// Permissions of which at least one must be held, when non-empty.
    #[inline]
    #[must_use]
    pub fn optional(&self) -> &BTreeSet<Permission> {
        &self.optional
    }

    /// Returns `true` when no permission is needed at all.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Whether `granted` satisfies this scope set: every required
    /// permission is held and, when optional permissions exist, at
    /// least one of them is held.
    #[must_use]
    pub fn satisfied_by(&self, granted: &BTreeSet<Permission>) -> bool {
        let required_met = self.required.is_subset(granted);
        let optional_met = self.optional.is_empty() || !self.optional.is_disjoint(granted);
        required_met && optional_met
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn perm(name: &str) -> Permission {
        name.parse().unwrap()
    }

    fn perms(names: &[&str]) -> BTreeSet<Permission> {
        names.iter().map(|name| perm(name)).collect()
    }

    fn actions(names: &[&str]) -> Vec<Action> {
        names.iter().map(|name| name.parse().unwrap()).collect()
    }

    // ====== for_actions tests ======

    #[test]
    fn no_actions_mean_no_constraints() {
        let scopes = AcceptedScopes::for_actions(&[], Some(SensitivityLevel::Private));
        assert!(scopes.is_open());
        assert!(scopes.satisfied_by(&BTreeSet::new()));
    }

    #[test]
    fn read_on_public_dataset_accepts_every_tier() {
        let scopes =
            AcceptedScopes::for_actions(&actions(&["READ"]), Some(SensitivityLevel::Public));
        assert!(scopes.required().is_empty());
        assert_eq!(
            *scopes.optional(),
            perms(&["READ_ALL", "READ_PUBLIC", "READ_PRIVATE", "READ_PROTECTED"])
        );
    }

    #[test]
    fn admin_actions_are_required_alongside_data_actions() {
        let scopes = AcceptedScopes::for_actions(
            &actions(&["USER_ADMIN", "READ"]),
            Some(SensitivityLevel::Public),
        );
        assert_eq!(*scopes.required(), perms(&["USER_ADMIN"]));
        assert_eq!(
            *scopes.optional(),
            perms(&["READ_ALL", "READ_PUBLIC", "READ_PRIVATE", "READ_PROTECTED"])
        );
    }

    #[test]
    fn private_dataset_drops_public_tiers() {
        let scopes = AcceptedScopes::for_actions(
            &actions(&["USER_ADMIN", "READ", "WRITE"]),
            Some(SensitivityLevel::Private),
        );
        assert_eq!(*scopes.required(), perms(&["USER_ADMIN"]));
        assert_eq!(
            *scopes.optional(),
            perms(&[
                "READ_ALL",
                "READ_PRIVATE",
                "READ_PROTECTED",
                "WRITE_ALL",
                "WRITE_PRIVATE",
                "WRITE_PROTECTED",
            ])
        );
    }

    #[test]
    fn unclassified_dataset_accepts_only_the_all_tier() {
        let scopes = AcceptedScopes::for_actions(&actions(&["READ"]), None);
        assert!(scopes.required().is_empty());
        assert_eq!(*scopes.optional(), perms(&["READ_ALL"]));
    }

    #[test]
    fn admin_only_endpoint_has_no_optional_scopes() {
        let scopes = AcceptedScopes::for_actions(&actions(&["USER_ADMIN"]), None);
        assert_eq!(*scopes.required(), perms(&["USER_ADMIN"]));
        assert!(scopes.optional().is_empty());
    }

    // ====== satisfied_by tests ======

    #[test]
    fn satisfied_when_required_and_one_optional_held() {
        let scopes = AcceptedScopes::new(
            perms(&["USER_ADMIN"]),
            perms(&["READ_ALL", "READ_PRIVATE"]),
        );
        assert!(scopes.satisfied_by(&perms(&["USER_ADMIN", "READ_PRIVATE"])));
        assert!(scopes.satisfied_by(&perms(&["USER_ADMIN", "READ_ALL", "WRITE_ALL"])));
    }

    #[test]
    fn not_satisfied_when_required_missing() {
        let scopes = AcceptedScopes::new(
            perms(&["USER_ADMIN"]),
            perms(&["READ_ALL", "READ_PRIVATE"]),
        );
        assert!(!scopes.satisfied_by(&perms(&["READ_PRIVATE"])));
        assert!(!scopes.satisfied_by(&BTreeSet::new()));
    }

    #[test]
    fn not_satisfied_when_no_optional_held() {
        let scopes = AcceptedScopes::new(
            perms(&["USER_ADMIN"]),
            perms(&["READ_ALL", "READ_PRIVATE"]),
        );
        assert!(!scopes.satisfied_by(&perms(&["USER_ADMIN"])));
        assert!(!scopes.satisfied_by(&perms(&["USER_ADMIN", "WRITE_ALL"])));
    }

    #[test]
    fn empty_required_needs_only_an_optional_hit() {
        let scopes = AcceptedScopes::new(BTreeSet::new(), perms(&["READ_PUBLIC", "READ_ALL"]));
        assert!(scopes.satisfied_by(&perms(&["READ_ALL"])));
        assert!(!scopes.satisfied_by(&perms(&["WRITE_ALL"])));
    }

    #[test]
    fn write_does_not_imply_read() {
        let scopes =
            AcceptedScopes::for_actions(&actions(&["READ"]), Some(SensitivityLevel::Public));
        assert!(!scopes.satisfied_by(&perms(&["WRITE_ALL", "WRITE_PUBLIC"])));
    }

    #[test]
    fn higher_tier_grant_covers_lower_classification() {
        let scopes =
            AcceptedScopes::for_actions(&actions(&["READ"]), Some(SensitivityLevel::Public));
        assert!(scopes.satisfied_by(&perms(&["READ_PRIVATE"])));
    }

    #[test]
    fn lower_tier_grant_does_not_cover_higher_classification() {
        let scopes =
            AcceptedScopes::for_actions(&actions(&["READ"]), Some(SensitivityLevel::Private));
        assert!(!scopes.satisfied_by(&perms(&["READ_PUBLIC"])));
        assert!(scopes.satisfied_by(&perms(&["READ_ALL"])));
    }
}
