use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{character::CharacterRepository, planet::PlanetRepository},
    error::AppError,
};

const DEMO_PLANETS: &[&str] = &[
    "Tatooine", "Alderaan", "Yavin IV", "Hoth", "Dagobah", "Bespin", "Endor", "Naboo",
    "Coruscant", "Kamino",
];

const DEMO_CHARACTERS: &[&str] = &[
    "Luke Skywalker",
    "C-3PO",
    "R2-D2",
    "Darth Vader",
    "Leia Organa",
    "Obi-Wan Kenobi",
    "Han Solo",
    "Chewbacca",
    "Yoda",
    "Padmé Amidala",
];

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts demo planets and characters into empty tables.
///
/// Each table is only seeded when it holds no rows, so restarting with seeding enabled
/// never duplicates data. Users are never seeded.
///
/// # Returns
/// - `Ok(())` - Seeding finished or was not needed
/// - `Err(AppError::DbErr)` - Database error during count or insert
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    let planet_repo = PlanetRepository::new(db);
    if planet_repo.count().await? == 0 {
        for name in DEMO_PLANETS {
            planet_repo.create(name.to_string()).await?;
        }
        tracing::info!("Seeded {} demo planets", DEMO_PLANETS.len());
    }

    let character_repo = CharacterRepository::new(db);
    if character_repo.count().await? == 0 {
        for name in DEMO_CHARACTERS {
            character_repo.create(name.to_string()).await?;
        }
        tracing::info!("Seeded {} demo characters", DEMO_CHARACTERS.len());
    }

    Ok(())
}
