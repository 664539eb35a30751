use super::*;

/// Tests listing planets in id order.
///
/// Expected: Ok with every planet, ordered by id
#[tokio::test]
async fn returns_all_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .build()
        .await?;
    let second = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .build()
        .await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id, first.id);
    assert_eq!(planets[0].name, "Alderaan");
    assert_eq!(planets[1].id, second.id);

    Ok(())
}

/// Tests listing planets on an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}
