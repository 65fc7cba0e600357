pub use sea_orm_migration::prelude::*;

mod iden;
mod m20251103_141210_create_tables;
mod m20260112_093045_add_dependent_description;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251103_141210_create_tables::Migration),
            Box::new(m20260112_093045_add_dependent_description::Migration),
        ]
    }
}
