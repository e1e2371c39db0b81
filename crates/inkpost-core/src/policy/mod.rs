//! Authorization policies.
//!
//! A policy maps an [`Ability`] on its subject type to a permission name and
//! asks the injected [`PermissionChecker`]. Targets are accepted but never
//! inspected: authorization is purely permission-based. An ability without a
//! mapping, a missing permission and a failed lookup all deny.

mod category;
mod permission;
mod user;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ports::PermissionChecker;

pub use category::CategoryPolicy;
pub use permission::PermissionPolicy;
pub use user::UserPolicy;

/// A protected admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    ViewAny,
    View,
    Create,
    Update,
    Delete,
    Restore,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::ViewAny,
        Ability::View,
        Ability::Create,
        Ability::Update,
        Ability::Delete,
        Ability::Restore,
    ];
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ability::ViewAny => "viewAny",
            Ability::View => "view",
            Ability::Create => "create",
            Ability::Update => "update",
            Ability::Delete => "delete",
            Ability::Restore => "restore",
        };
        f.write_str(name)
    }
}

/// Permission mapping for one subject type.
pub trait Policy: Send + Sync {
    type Subject;

    /// Subject name used in logs.
    const SUBJECT: &'static str;

    /// Permission required for `ability`, or `None` when the policy does not
    /// define the ability at all.
    fn permission_for(&self, ability: Ability) -> Option<&'static str>;
}

/// Evaluates policies against a permission checker.
#[derive(Clone)]
pub struct Gate {
    checker: Arc<dyn PermissionChecker>,
}

impl Gate {
    pub fn new(checker: Arc<dyn PermissionChecker>) -> Self {
        Self { checker }
    }

    /// Whether `actor` may perform `ability` on `target` (or on the subject
    /// type as a whole when `target` is `None`).
    pub async fn allows<P: Policy>(
        &self,
        policy: &P,
        actor: Uuid,
        ability: Ability,
        _target: Option<&P::Subject>,
    ) -> bool {
        let Some(permission) = policy.permission_for(ability) else {
            tracing::debug!(subject = P::SUBJECT, %ability, "Ability not defined by policy");
            return false;
        };

        match self.checker.has(actor, permission).await {
            Ok(granted) => {
                tracing::debug!(
                    subject = P::SUBJECT,
                    %ability,
                    %actor,
                    permission,
                    granted,
                    "Policy evaluated"
                );
                granted
            }
            Err(e) => {
                tracing::warn!(
                    subject = P::SUBJECT,
                    %ability,
                    permission,
                    "Permission lookup failed, denying: {}",
                    e
                );
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Category, Permission, User};
    use crate::error::RepoError;

    /// Grants exactly one permission name to one actor.
    pub(crate) struct SingleGrant {
        pub actor: Uuid,
        pub granted: HashSet<&'static str>,
    }

    #[async_trait]
    impl PermissionChecker for SingleGrant {
        async fn has(&self, actor_id: Uuid, permission: &str) -> Result<bool, RepoError> {
            Ok(actor_id == self.actor && self.granted.contains(permission))
        }
    }

    struct Failing;

    #[async_trait]
    impl PermissionChecker for Failing {
        async fn has(&self, _actor_id: Uuid, _permission: &str) -> Result<bool, RepoError> {
            Err(RepoError::Connection("down".into()))
        }
    }

    fn gate_granting(actor: Uuid, names: &[&'static str]) -> Gate {
        Gate::new(Arc::new(SingleGrant {
            actor,
            granted: names.iter().copied().collect(),
        }))
    }

    /// For every ability: allowed iff the expected permission is granted.
    async fn assert_policy<P: Policy>(policy: &P, expected: [(Ability, Option<&'static str>); 6]) {
        let actor = Uuid::new_v4();
        for (ability, permission) in expected {
            assert_eq!(policy.permission_for(ability), permission, "{ability}");

            let nobody = gate_granting(actor, &[]);
            assert!(!nobody.allows(policy, actor, ability, None).await);

            if let Some(name) = permission {
                let holder = gate_granting(actor, &[name]);
                assert!(holder.allows(policy, actor, ability, None).await, "{name}");
                assert!(!holder.allows(policy, Uuid::new_v4(), ability, None).await);
            }
        }
    }

    #[tokio::test]
    async fn test_category_policy_matrix() {
        assert_policy(
            &CategoryPolicy,
            [
                (Ability::ViewAny, Some("view categories")),
                (Ability::View, Some("view categories")),
                (Ability::Create, Some("create categories")),
                (Ability::Update, Some("edit categories")),
                (Ability::Delete, Some("delete categories")),
                (Ability::Restore, Some("restore categories")),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_permission_policy_matrix() {
        assert_policy(
            &PermissionPolicy,
            [
                (Ability::ViewAny, Some("create permissions")),
                (Ability::View, Some("create permissions")),
                (Ability::Create, Some("create permissions")),
                (Ability::Update, Some("edit permissions")),
                (Ability::Delete, Some("delete permissions")),
                (Ability::Restore, Some("restore permissions")),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_user_policy_matrix_has_no_view_any() {
        assert_policy(
            &UserPolicy,
            [
                (Ability::ViewAny, None),
                (Ability::View, Some("view users")),
                (Ability::Create, Some("create users")),
                (Ability::Update, Some("edit users")),
                (Ability::Delete, Some("delete users")),
                (Ability::Restore, Some("restore users")),
            ],
        )
        .await;
    }

    #[tokio::test]
    async fn test_user_view_any_denied_even_with_every_permission() {
        let actor = Uuid::new_v4();
        let gate = gate_granting(
            actor,
            &[
                "view users",
                "create users",
                "edit users",
                "delete users",
                "restore users",
            ],
        );
        assert!(!gate.allows(&UserPolicy, actor, Ability::ViewAny, None).await);
    }

    #[tokio::test]
    async fn test_target_is_ignored() {
        let actor = Uuid::new_v4();
        let gate = gate_granting(actor, &["edit categories", "edit users", "edit permissions"]);

        let category = Category::new("News".into(), "news".into());
        assert!(gate.allows(&CategoryPolicy, actor, Ability::Update, Some(&category)).await);

        let other = User::new("Other".into(), "o@example.com".into(), String::new());
        assert!(gate.allows(&UserPolicy, actor, Ability::Update, Some(&other)).await);

        let permission = Permission::new("anything".into());
        assert!(gate.allows(&PermissionPolicy, actor, Ability::Update, Some(&permission)).await);
    }

    #[tokio::test]
    async fn test_lookup_failure_denies() {
        let gate = Gate::new(Arc::new(Failing));
        for ability in Ability::ALL {
            assert!(!gate.allows(&CategoryPolicy, Uuid::new_v4(), ability, None).await);
        }
    }
}
