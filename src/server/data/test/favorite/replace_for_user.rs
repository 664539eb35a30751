use super::*;

/// Tests replacing favorites with a new set of ids.
///
/// Verifies that existing links of both kinds are removed and new links are created
/// in the requested order.
///
/// Expected: Ok(ReplacedFavorites { planets: 2, characters: 1 })
#[tokio::test]
async fn replaces_existing_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old_planet = factory::create_planet(db).await?;
    let old_character = factory::create_character(db).await?;
    let bespin = factory::create_planet(db).await?;
    let endor = factory::create_planet(db).await?;
    let vader = factory::create_character(db).await?;
    factory::create_fav_planet(db, user.id, old_planet.id).await?;
    factory::create_fav_character(db, user.id, old_character.id).await?;

    let repo = FavoriteRepository::new(db);
    let replaced = repo
        .replace_for_user(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids: vec![endor.id, bespin.id],
            character_ids: vec![vader.id],
        })
        .await?;

    assert_eq!(replaced.planets, 2);
    assert_eq!(replaced.characters, 1);

    let planet_ids: Vec<i32> = repo
        .get_planets_by_user(user.id)
        .await?
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(planet_ids, vec![endor.id, bespin.id]);

    let characters = repo.get_characters_by_user(user.id).await?;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, vader.id);

    Ok(())
}

/// Tests that ids without a matching row are skipped.
///
/// Expected: Ok with one link per resolvable id, including repeated ids
#[tokio::test]
async fn skips_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoriteRepository::new(db);
    let replaced = repo
        .replace_for_user(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids: vec![planet.id, 999, planet.id],
            character_ids: vec![404],
        })
        .await?;

    assert_eq!(replaced.planets, 2);
    assert_eq!(replaced.characters, 0);
    assert_eq!(repo.get_planets_by_user(user.id).await?.len(), 2);
    assert!(repo.get_characters_by_user(user.id).await?.is_empty());

    Ok(())
}

/// Tests that empty lists clear every favorite and that repeating it changes nothing.
///
/// Expected: Ok with no links left after each call
#[tokio::test]
async fn clears_links_idempotently() -> Result<(), DbErr> {
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

    let repo = FavoriteRepository::new(db);
    for _ in 0..2 {
        repo.replace_for_user(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids: Vec::new(),
            character_ids: Vec::new(),
        })
        .await?;

        assert!(repo.get_planets_by_user(user.id).await?.is_empty());
        assert!(repo.get_characters_by_user(user.id).await?.is_empty());
    }

    Ok(())
}

/// Tests that other users' links are untouched.
///
/// Expected: Ok with the other user's favorites intact
#[tokio::test]
async fn leaves_other_users_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    factory::create_fav_planet(db, other.id, planet.id).await?;

    FavoriteRepository::new(db)
        .replace_for_user(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids: Vec::new(),
            character_ids: Vec::new(),
        })
        .await?;

    let planets = FavoriteRepository::new(db)
        .get_planets_by_user(other.id)
        .await?;
    assert_eq!(planets.len(), 1);

    Ok(())
}

/// Tests replacing with more ids than SQLite binds in one statement.
///
/// Expected: Ok with one link per resolvable id and unknown ids skipped
#[tokio::test]
async fn handles_id_lists_beyond_bind_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let mut planet_ids: Vec<i32> = (100_000..140_000).collect();
    planet_ids.extend(std::iter::repeat(planet.id).take(1_500));

    let repo = FavoriteRepository::new(db);
    let replaced = repo
        .replace_for_user(ReplaceFavoritesParams {
            user_id: user.id,
            planet_ids,
            character_ids: Vec::new(),
        })
        .await?;

    assert_eq!(replaced.planets, 1_500);
    assert_eq!(repo.get_planets_by_user(user.id).await?.len(), 1_500);

    Ok(())
}
