//! Integration tests for the `Tag` wire format.
//!
//! These tests drive `Tag` through the JSON parse node and writer the same way a generated
//! request would, and pin the produced bytes with inline snapshots.

use catalog_client::{
    Error, Parsable, SerializationRegistry, SerializationWriter, Tag,
    serialization::json::{
        self, AbsentValues, JsonParseNode, JsonSerializationWriter, JsonWriterOptions,
    },
};
use serde_json::json;

#[test]
fn serialize_tag_emits_display_name_before_name() {
    //* Given
    let tag = Tag::builder()
        .name(Some("widgets"))
        .display_name(Some("Widgets"))
        .build();

    //* When
    let output = to_json_string(&tag);

    //* Then
    insta::assert_snapshot!(output, @r#"{"displayName":"Widgets","name":"widgets"}"#);
}

#[test]
fn serialize_tag_emits_additional_data_after_known_fields() {
    //* Given
    let tag = Tag::builder()
        .additional_field("color", json!("red"))
        .additional_field("rank", json!(3))
        .name(Some("widgets"))
        .build();

    //* When
    let output = to_json_string(&tag);

    //* Then
    insta::assert_snapshot!(output, @r#"{"displayName":null,"name":"widgets","color":"red","rank":3}"#);
}

#[test]
fn serialize_tag_with_omit_option_leaves_absent_fields_out() {
    //* Given
    let tag = Tag::builder().name(Some("widgets")).build();
    let options = JsonWriterOptions::new().absent_values(AbsentValues::Omit);
    let mut writer = JsonSerializationWriter::with_options(options);

    //* When
    catalog_client::serialization::write_object_value(&mut writer, None, Some(&tag))
        .expect("serialization should succeed");
    let content = writer
        .get_serialized_content()
        .expect("document should be complete");

    //* Then
    let output = String::from_utf8(content).expect("output should be UTF-8");
    insta::assert_snapshot!(output, @r#"{"name":"widgets"}"#);
}

#[test]
fn serialize_empty_tag_with_omit_option_round_trips_as_empty_object() {
    //* Given
    let tag = Tag::new();
    let options = JsonWriterOptions::new().absent_values(AbsentValues::Omit);
    let mut writer = JsonSerializationWriter::with_options(options);

    //* When
    Parsable::serialize(&tag, Some(&mut writer)).expect("serialization should succeed");
    let content = writer
        .get_serialized_content()
        .expect("document should be complete");
    let parsed: Tag = json::from_slice(&content)
        .expect("deserialization should succeed")
        .expect("document is not null");

    //* Then
    assert_eq!(parsed, tag);
    let output = String::from_utf8(content).expect("output should be UTF-8");
    insta::assert_snapshot!(output, @"{}");
}

#[test]
fn serialize_drops_additional_data_shadowing_known_fields() {
    //* Given
    let tag = Tag::builder()
        .name(Some("widgets"))
        .additional_field("name", json!("gadgets"))
        .additional_field("color", json!("red"))
        .build();

    //* When
    let output = to_json_string(&tag);
    let parsed: Tag = json::from_slice(output.as_bytes())
        .expect("deserialization should succeed")
        .expect("document is not null");

    //* Then
    assert_eq!(parsed.name(), Some("widgets"));
    insta::assert_snapshot!(output, @r#"{"displayName":null,"name":"widgets","color":"red"}"#);
}

#[test]
fn deserialize_then_serialize_preserves_unknown_fields_verbatim() {
    //* Given
    let input = r#"{"displayName":"Widgets","name":"widgets","color":"red","rank":3,"featured":true,"ratio":0.25,"aliases":["w","wid"],"meta":{"source":"import"},"retired":null}"#;

    //* When
    let tag: Tag = json::from_slice(input.as_bytes())
        .expect("deserialization should succeed")
        .expect("document is not null");
    let output = to_json_string(&tag);

    //* Then
    assert_eq!(tag.additional_data().len(), 7);
    assert_eq!(output, input);
}

#[test]
fn deserialize_then_serialize_reorders_known_fields() {
    //* Given
    let input = br#"{"color":"red","name":"widgets","displayName":"Widgets"}"#;

    //* When
    let tag: Tag = json::from_slice(input)
        .expect("deserialization should succeed")
        .expect("document is not null");
    let output = to_json_string(&tag);

    //* Then
    insta::assert_snapshot!(output, @r#"{"displayName":"Widgets","name":"widgets","color":"red"}"#);
}

#[test]
fn deserialize_unknown_field_lands_in_additional_data() {
    //* Given
    let input = br#"{"color":"red"}"#;

    //* When
    let tag: Tag = json::from_slice(input)
        .expect("deserialization should succeed")
        .expect("document is not null");

    //* Then
    assert_eq!(tag.name(), None);
    assert_eq!(tag.display_name(), None);
    assert_eq!(tag.additional_data().get("color"), Some(&json!("red")));
    insta::assert_snapshot!(to_json_string(&tag), @r#"{"displayName":null,"name":null,"color":"red"}"#);
}

#[test]
fn deserialize_explicit_null_known_field_leaves_attribute_absent() {
    //* Given
    let input = br#"{"displayName":null,"name":"widgets"}"#;

    //* When
    let tag: Tag = json::from_slice(input)
        .expect("deserialization should succeed")
        .expect("document is not null");

    //* Then
    assert_eq!(tag.display_name(), None);
    assert_eq!(tag.name(), Some("widgets"));
    assert!(tag.additional_data().is_empty());
}

#[test]
fn deserialize_non_text_display_name_fails() {
    //* Given
    let input = br#"{"displayName":["Widgets"]}"#;

    //* When
    let result = json::from_slice::<Tag>(input);

    //* Then
    let err = result.expect_err("array is not text");
    assert_eq!(err.to_string(), "expected string value, found array");
}

#[test]
fn deserialize_null_document_returns_none() {
    //* When
    let tag = json::from_slice::<Tag>(b"null").expect("deserialization should succeed");

    //* Then
    assert!(tag.is_none());
}

#[test]
fn serialize_same_tag_twice_produces_identical_output() {
    //* Given
    let tag = Tag::builder()
        .display_name(Some("Widgets"))
        .additional_field("color", json!("red"))
        .build();

    //* When
    let first = json::to_vec(&tag).expect("serialization should succeed");
    let second = json::to_vec(&tag).expect("serialization should succeed");

    //* Then
    assert_eq!(first, second);
}

#[test]
fn serialize_without_writer_fails() {
    //* Given
    let tag = Tag::builder().name(Some("widgets")).build();

    //* When
    let result = Parsable::serialize(&tag, None);

    //* Then
    assert!(matches!(result, Err(Error::InvalidArgument("writer"))));
}

#[test]
fn create_from_discriminator_value_with_foreign_discriminator_returns_default_tag() {
    //* Given
    let node = JsonParseNode::new(json!({
        "@odata.type": "#catalog.category",
        "name": "widgets",
        "displayName": "Widgets",
    }));

    //* When
    let tag = Tag::create_from_discriminator_value(Some(&node)).expect("creation should succeed");

    //* Then
    assert_eq!(tag.name(), None);
    assert_eq!(tag.display_name(), None);
    assert!(tag.additional_data().is_empty());
}

#[test]
fn create_from_discriminator_value_without_node_fails() {
    //* When
    let result = Tag::create_from_discriminator_value(None);

    //* Then
    let err = result.expect_err("a parse node is required");
    assert_eq!(
        err.to_string(),
        "invalid argument: `parse_node` must be provided"
    );
}

#[test]
fn registry_round_trips_tag_collection() {
    //* Given
    let registry = SerializationRegistry::new();
    let tags = vec![
        Tag::builder()
            .name(Some("widgets"))
            .display_name(Some("Widgets"))
            .build(),
        Tag::builder()
            .name(Some("gadgets"))
            .additional_field("color", json!("blue"))
            .build(),
    ];
    let mut writer = registry
        .get_serialization_writer("application/json")
        .expect("JSON writer should be registered");

    //* When
    catalog_client::serialization::write_collection_of_object_values(
        &mut *writer,
        None,
        Some(tags.as_slice()),
    )
    .expect("serialization should succeed");
    let content = writer
        .get_serialized_content()
        .expect("document should be complete");
    let node = registry
        .get_root_parse_node("application/json", &content)
        .expect("JSON parse node should be registered");
    let parsed = catalog_client::serialization::get_collection_of_object_values::<Tag>(&*node)
        .expect("deserialization should succeed")
        .expect("document is not null");

    //* Then
    assert_eq!(parsed, tags);
    let output = String::from_utf8(content).expect("output should be UTF-8");
    insta::assert_snapshot!(output, @r#"[{"displayName":"Widgets","name":"widgets"},{"displayName":null,"name":"gadgets","color":"blue"}]"#);
}

/// Serializes a tag into a fresh writer using the default options.
fn to_json_string(tag: &Tag) -> String {
    let content = json::to_vec(tag).expect("serialization should succeed");
    String::from_utf8(content).expect("output should be UTF-8")
}
