use super::{Ability, Policy};
use crate::domain::Category;

/// Category access.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPolicy;

impl Policy for CategoryPolicy {
    type Subject = Category;

    const SUBJECT: &'static str = "category";

    fn permission_for(&self, ability: Ability) -> Option<&'static str> {
        Some(match ability {
            Ability::ViewAny | Ability::View => "view categories",
            Ability::Create => "create categories",
            Ability::Update => "edit categories",
            Ability::Delete => "delete categories",
            Ability::Restore => "restore categories",
        })
    }
}
