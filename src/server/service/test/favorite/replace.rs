use super::*;

/// Tests replacing favorites for an existing user.
///
/// Expected: Ok(ReplacedFavorites) counting only resolvable ids
#[tokio::test]
async fn replaces_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_fav_character(db, user.id, character.id).await?;

    let service = FavoriteService::new(db);
    let replaced = service
        .replace(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids: vec![planet.id, 1000],
            character_ids: Vec::new(),
        })
        .await?;

    assert_eq!(replaced.planets, 1);
    assert_eq!(replaced.characters, 0);

    let favorites = service.get_for_user(user.id).await?;
    assert_eq!(favorites.planets.len(), 1);
    assert!(favorites.characters.is_empty());

    Ok(())
}

/// Tests replacing favorites for a user that doesn't exist.
///
/// Expected: Err(ResourceErr(UserNotFound))
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db)
        .replace(ReplaceFavoritesParams {
            user_id: 31,
            planet_ids: vec![1],
            character_ids: vec![1],
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ResourceErr(ResourceError::UserNotFound(31)))
    ));

    Ok(())
}
