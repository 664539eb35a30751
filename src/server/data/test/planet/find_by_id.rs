use super::*;

/// Tests finding an existing planet by id.
///
/// Expected: Ok(Some(Planet))
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Dagobah")
        .build()
        .await?;

    let planet = PlanetRepository::new(db).find_by_id(created.id).await?;

    assert!(planet.is_some());
    let planet = planet.unwrap();
    assert_eq!(planet.id, created.id);
    assert_eq!(planet.name, "Dagobah");

    Ok(())
}

/// Tests finding a planet that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = PlanetRepository::new(db).find_by_id(999).await?;

    assert!(planet.is_none());

    Ok(())
}
