use sea_orm_migration::prelude::*;

mod m20220901_000001_create_categories;
mod m20220901_000002_create_products;
mod m20220902_140545_add_created_at;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220901_000001_create_categories::Migration),
            Box::new(m20220901_000002_create_products::Migration),
            Box::new(m20220902_140545_add_created_at::Migration),
        ]
    }
}
