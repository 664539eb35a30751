use super::*;
use entity::prelude::{FavCharacter, FavPlanet, User};
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that deleting a user removes every favorite link it owns.
///
/// Expected: Ok with no fav_planet or fav_character rows left
#[tokio::test]
async fn deleting_user_removes_its_links() -> Result<(), DbErr> {
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

    User::delete_by_id(user.id).exec(db).await?;

    assert_eq!(FavPlanet::find().count(db).await?, 0);
    assert_eq!(FavCharacter::find().count(db).await?, 0);
    assert!(UserRepository::new(db).find_by_id(user.id).await?.is_none());

    Ok(())
}
