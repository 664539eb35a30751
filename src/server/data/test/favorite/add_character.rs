use super::*;

/// Tests adding a character to a user's favorites.
///
/// Expected: Ok(link id) and the character is listed for the user
#[tokio::test]
async fn adds_character_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::character::CharacterFactory::new(db)
        .name("Chewbacca")
        .build()
        .await?;

    let repo = FavoriteRepository::new(db);
    repo.add_character(user.id, character.id).await?;

    let characters = repo.get_characters_by_user(user.id).await?;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Chewbacca");

    Ok(())
}
