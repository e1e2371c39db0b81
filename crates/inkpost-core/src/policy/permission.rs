use super::{Ability, Policy};
use crate::domain::Permission;

/// Permission catalog access. Viewing requires "create permissions";
/// there is no separate view permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionPolicy;

impl Policy for PermissionPolicy {
    type Subject = Permission;

    const SUBJECT: &'static str = "permission";

    fn permission_for(&self, ability: Ability) -> Option<&'static str> {
        Some(match ability {
            Ability::ViewAny | Ability::View | Ability::Create => "create permissions",
            Ability::Update => "edit permissions",
            Ability::Delete => "delete permissions",
            Ability::Restore => "restore permissions",
        })
    }
}
