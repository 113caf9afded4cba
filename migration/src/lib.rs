pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_transactions;
mod m20261012_000002_create_customer_ipt;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_transactions::Migration),
            Box::new(m20261012_000002_create_customer_ipt::Migration),
        ]
    }
}
