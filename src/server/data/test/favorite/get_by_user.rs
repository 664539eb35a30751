use super::*;

/// Tests that favorites are listed in link order and scoped to the user.
///
/// Expected: Ok with only the user's links, oldest first
#[tokio::test]
async fn lists_links_of_user_in_link_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let hoth = factory::create_planet(db).await?;
    let naboo = factory::create_planet(db).await?;
    let yoda = factory::create_character(db).await?;

    // Linked out of id order on purpose
    factory::create_fav_planet(db, user.id, naboo.id).await?;
    factory::create_fav_planet(db, other.id, hoth.id).await?;
    factory::create_fav_planet(db, user.id, hoth.id).await?;
    factory::create_fav_character(db, other.id, yoda.id).await?;

    let repo = FavoriteRepository::new(db);
    let planets = repo.get_planets_by_user(user.id).await?;
    let characters = repo.get_characters_by_user(user.id).await?;

    let planet_ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(planet_ids, vec![naboo.id, hoth.id]);
    assert!(characters.is_empty());

    Ok(())
}

/// Tests listing favorites of a user with no links.
///
/// Expected: Ok(empty Vec) for both kinds
#[tokio::test]
async fn returns_empty_for_user_without_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.get_planets_by_user(user.id).await?.is_empty());
    assert!(repo.get_characters_by_user(user.id).await?.is_empty());

    Ok(())
}
