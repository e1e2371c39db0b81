use super::{Ability, Policy};
use crate::domain::User;

/// User account access.
///
/// Defines no `ViewAny`, so listing users is denied to everyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserPolicy;

impl Policy for UserPolicy {
    type Subject = User;

    const SUBJECT: &'static str = "user";

    fn permission_for(&self, ability: Ability) -> Option<&'static str> {
        match ability {
            Ability::ViewAny => None,
            Ability::View => Some("view users"),
            Ability::Create => Some("create users"),
            Ability::Update => Some("edit users"),
            Ability::Delete => Some("delete users"),
            Ability::Restore => Some("restore users"),
        }
    }
}
