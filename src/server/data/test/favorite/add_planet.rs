use super::*;

/// Tests adding a planet to a user's favorites.
///
/// Expected: Ok(link id) and the planet is listed for the user
#[tokio::test]
async fn adds_planet_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let link_id = repo.add_planet(user.id, planet.id).await?;

    assert!(link_id > 0);
    let planets = repo.get_planets_by_user(user.id).await?;
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].id, planet.id);

    Ok(())
}

/// Tests that adding the same planet twice stores two links.
///
/// Expected: Ok with the planet listed twice
#[tokio::test]
async fn allows_duplicate_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let first = repo.add_planet(user.id, planet.id).await?;
    let second = repo.add_planet(user.id, planet.id).await?;

    assert_ne!(first, second);
    assert_eq!(repo.get_planets_by_user(user.id).await?.len(), 2);

    Ok(())
}

/// Tests that a link to a missing user is rejected by the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let result = FavoriteRepository::new(db).add_planet(999, planet.id).await;

    assert!(result.is_err());

    Ok(())
}
