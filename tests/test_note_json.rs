use anyhow::Result;
use noteclip::domain::Note;

#[test]
fn given_note_when_serializing_to_json_then_has_extension_shape() -> Result<()> {
    // Arrange
    let note = Note::new(
        1714564800123,
        "https://a.com",
        "hello",
        "2024-05-01T12:00:00.123Z".to_string(),
    );

    // Act
    let value = serde_json::to_value(&note)?;

    // Assert
    let object = value.as_object().expect("note serializes to an object");
    assert_eq!(object.len(), 3);
    assert_eq!(value["id"], 1714564800123_i64);
    assert_eq!(value["text"], "https://a.com\n\nhello");
    assert_eq!(value["date"], "2024-05-01T12:00:00.123Z");
    Ok(())
}

#[test]
fn given_extension_json_when_deserializing_then_splits_url_and_body() -> Result<()> {
    // Arrange
    let json = r#"{"id": 1, "text": "https://a.com\n\nfirst\n\nsecond", "date": "d"}"#;

    // Act
    let note: Note = serde_json::from_str(json)?;

    // Assert
    assert_eq!(note.source_url(), "https://a.com");
    assert_eq!(note.body(), "first\n\nsecond");
    Ok(())
}
