pub use sea_orm_migration::prelude::*;

mod m20220910_000001_create_venues_table;
mod m20220910_000002_create_artists_table;
mod m20220910_000003_create_shows_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220910_000001_create_venues_table::Migration),
            Box::new(m20220910_000002_create_artists_table::Migration),
            Box::new(m20220910_000003_create_shows_table::Migration),
        ]
    }
}
