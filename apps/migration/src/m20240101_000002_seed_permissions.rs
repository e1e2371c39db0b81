//! Permission catalog checked by the category, user and permission policies.

use sea_orm_migration::prelude::*;

const RESOURCES: [&str; 3] = ["categories", "users", "permissions"];
const ABILITIES: [&str; 5] = ["view", "create", "edit", "delete", "restore"];

fn catalog() -> Vec<String> {
    RESOURCES
        .iter()
        .flat_map(|resource| ABILITIES.iter().map(move |ability| format!("{ability} {resource}")))
        .collect()
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let rows = catalog()
            .iter()
            .map(|name| format!("(gen_random_uuid(), '{name}', NOW(), NOW())"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO permissions (id, name, created_at, updated_at) VALUES {rows} \
             ON CONFLICT (name) DO NOTHING"
        );
        manager.get_connection().execute_unprepared(&sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let sql = format!(
            "DELETE FROM permissions WHERE name IN ({})",
            quoted_list(&catalog())
        );
        manager.get_connection().execute_unprepared(&sql).await?;
        Ok(())
    }
}
