use super::*;

/// Tests getting favorites of a user with links of both kinds.
///
/// Expected: Ok(UserFavorites) listing every link
#[tokio::test]
async fn returns_planets_and_characters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_fav_planet(db, user.id, planet.id).await?;
    factory::create_fav_character(db, user.id, character.id).await?;
    factory::create_fav_character(db, user.id, character.id).await?;

    let favorites = FavoriteService::new(db).get_for_user(user.id).await?;

    assert_eq!(favorites.user_id, user.id);
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.characters.len(), 2);

    Ok(())
}

/// Tests getting favorites of a user that doesn't exist.
///
/// Expected: Err(ResourceErr(UserNotFound(7)))
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db).get_for_user(7).await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::UserNotFound(7)))
    ));

    Ok(())
}
