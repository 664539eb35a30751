use super::*;

/// Tests finding an existing character by id.
///
/// Expected: Ok(Some(Character))
#[tokio::test]
async fn finds_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Yoda")
        .build()
        .await?;

    let character = CharacterRepository::new(db).find_by_id(created.id).await?;

    assert!(character.is_some());
    let character = character.unwrap();
    assert_eq!(character.id, created.id);
    assert_eq!(character.name, "Yoda");

    Ok(())
}

/// Tests finding a character that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = CharacterRepository::new(db).find_by_id(999).await?;

    assert!(character.is_none());

    Ok(())
}
