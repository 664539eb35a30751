pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_planet_table;
mod m20250301_000003_create_character_table;
mod m20250301_000004_create_fav_planet_table;
mod m20250301_000005_create_fav_character_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_planet_table::Migration),
            Box::new(m20250301_000003_create_character_table::Migration),
            Box::new(m20250301_000004_create_fav_planet_table::Migration),
            Box::new(m20250301_000005_create_fav_character_table::Migration),
        ]
    }
}
