//! Database migrations for the blog back-office.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_blog_tables;
mod m20240101_000002_seed_permissions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_blog_tables::Migration),
            Box::new(m20240101_000002_seed_permissions::Migration),
        ]
    }
}
