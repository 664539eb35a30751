use super::*;

/// Tests creating a planet.
///
/// Expected: Ok with generated id and provided name
#[tokio::test]
async fn creates_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo.create("Tatooine".to_string()).await?;

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
