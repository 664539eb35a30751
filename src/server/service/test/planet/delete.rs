use super::*;

/// Tests deleting a planet that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = PlanetService::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests deleting an existing planet.
///
/// Expected: Ok(true) and a later lookup finds nothing
#[tokio::test]
async fn deletes_existing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let service = PlanetService::new(db);

    assert!(service.delete(planet.id).await?);
    assert!(service.get_by_id(planet.id).await?.is_none());

    Ok(())
}
