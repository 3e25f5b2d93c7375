// tests/property_decoding.rs
//! Decoding property maps from realistic Notion payloads, under both
//! contexts, including every way an entry can be rejected.

use notion_props::{
    decode, decode_database_properties, decode_page_properties, Color, ContextKind,
    DatabaseProperty, FormulaResult, JsonShape, NumberFormat, PageProperty, PropertyError,
    PropertyType, RawTag, RollupFunction, RollupValue, Variant,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec(value).unwrap()
}

/// A minimal valid page-context entry for every tag.
fn page_fixture(tag: PropertyType) -> Value {
    match tag {
        PropertyType::Title => json!({"type": "title", "title": [{"plain_text": "Launch"}]}),
        PropertyType::RichText => json!({"type": "rich_text", "rich_text": []}),
        PropertyType::Number => json!({"type": "number", "number": 3}),
        PropertyType::Select => json!({"type": "select", "select": {"name": "High"}}),
        PropertyType::MultiSelect => {
            json!({"type": "multi_select", "multi_select": [{"name": "a"}]})
        }
        PropertyType::Date => json!({"type": "date", "date": {"start": "2024-05-01"}}),
        PropertyType::Formula => {
            json!({"type": "formula", "formula": {"type": "boolean", "boolean": true}})
        }
        PropertyType::Relation => json!({"type": "relation", "relation": [{"id": "p1"}]}),
        PropertyType::Rollup => {
            json!({"type": "rollup", "rollup": {"type": "number", "number": 7, "function": "sum"}})
        }
        PropertyType::People => json!({"type": "people", "people": [{"object": "user", "id": "u1"}]}),
        PropertyType::Files => json!({"type": "files", "files": []}),
        PropertyType::Checkbox => json!({"type": "checkbox", "checkbox": true}),
        PropertyType::Url => json!({"type": "url", "url": "https://example.com"}),
        PropertyType::Email => json!({"type": "email", "email": "a@example.com"}),
        PropertyType::PhoneNumber => json!({"type": "phone_number", "phone_number": "+1 555"}),
        PropertyType::CreatedTime => {
            json!({"type": "created_time", "created_time": "2024-01-01T00:00:00.000Z"})
        }
        PropertyType::CreatedBy => json!({"type": "created_by", "created_by": {"object": "user", "id": "u1"}}),
        PropertyType::LastEditedTime => {
            json!({"type": "last_edited_time", "last_edited_time": "2024-01-02T00:00:00.000Z"})
        }
        PropertyType::LastEditedBy => {
            json!({"type": "last_edited_by", "last_edited_by": {"object": "user", "id": "u2"}})
        }
    }
}

/// A minimal valid database-context entry for every tag.
fn schema_fixture(tag: PropertyType) -> Value {
    let payload = match tag {
        PropertyType::Select | PropertyType::MultiSelect => json!({"options": []}),
        PropertyType::Number => json!({"format": "number"}),
        PropertyType::Formula => json!({"expression": "prop(\"Estimate\") * 2"}),
        PropertyType::Relation => json!({"database_id": "668d797c-76fa-4934-9b05-ad288df2d136"}),
        PropertyType::Rollup => json!({
            "relation_property_name": "Tasks",
            "rollup_property_name": "Estimate",
            "function": "sum"
        }),
        _ => json!({}),
    };
    let mut entry = json!({"id": "x", "name": tag.as_str(), "type": tag.as_str()});
    entry[tag.as_str()] = payload;
    entry
}

fn expected_page_variant(tag: PropertyType) -> Variant {
    match tag {
        PropertyType::Title => Variant::TitleValue,
        PropertyType::RichText => Variant::RichTextList,
        PropertyType::Number => Variant::Number,
        PropertyType::Select => Variant::SelectValue,
        PropertyType::MultiSelect => Variant::MultiSelectValue,
        PropertyType::Date => Variant::DateValue,
        PropertyType::Formula => Variant::FormulaValue,
        PropertyType::Relation => Variant::Relation,
        PropertyType::Rollup => Variant::Rollup,
        PropertyType::People => Variant::PeopleValue,
        PropertyType::Files => Variant::FilesValue,
        PropertyType::Checkbox => Variant::CheckboxValue,
        PropertyType::Url => Variant::UrlValue,
        PropertyType::Email => Variant::EmailValue,
        PropertyType::PhoneNumber => Variant::PhoneNumberValue,
        PropertyType::CreatedTime => Variant::CreatedTime,
        PropertyType::CreatedBy => Variant::CreatedBy,
        PropertyType::LastEditedTime => Variant::LastEditedTime,
        PropertyType::LastEditedBy => Variant::LastEditedBy,
    }
}

fn expected_schema_variant(tag: PropertyType) -> Variant {
    match tag {
        PropertyType::Title => Variant::TitleSchema,
        PropertyType::RichText => Variant::RichTextEmpty,
        PropertyType::Select => Variant::SelectSchema,
        PropertyType::MultiSelect => Variant::MultiSelectSchema,
        PropertyType::Date => Variant::DateSchema,
        PropertyType::Formula => Variant::FormulaSchema,
        PropertyType::People => Variant::PeopleSchema,
        PropertyType::Files => Variant::FilesSchema,
        PropertyType::Checkbox => Variant::CheckboxSchema,
        PropertyType::Url => Variant::UrlSchema,
        PropertyType::Email => Variant::EmailSchema,
        PropertyType::PhoneNumber => Variant::PhoneNumberSchema,
        other => expected_page_variant(other),
    }
}

#[test]
fn test_every_tag_dispatches_in_page_context() {
    for tag in PropertyType::ALL {
        let input = json!({ "k": page_fixture(tag) });
        let props = decode_page_properties(&bytes(&input))
            .unwrap_or_else(|e| panic!("{tag} failed to decode: {e}"));
        let property = props.get("k").unwrap();
        assert_eq!(property.property_type(), tag);
        assert_eq!(property.variant(), expected_page_variant(tag), "tag {tag}");
    }
}

#[test]
fn test_every_tag_dispatches_in_database_context() {
    for tag in PropertyType::ALL {
        let input = json!({ "k": schema_fixture(tag) });
        let props = decode_database_properties(&bytes(&input))
            .unwrap_or_else(|e| panic!("{tag} failed to decode: {e}"));
        let property = props.get("k").unwrap();
        assert_eq!(property.property_type(), tag);
        assert_eq!(property.variant(), expected_schema_variant(tag), "tag {tag}");
        assert_eq!(property.name(), Some(tag.as_str()));
    }
}

#[test]
fn test_unknown_tag_rejected_in_both_contexts() {
    let input = br#"{"k": {"type": "not_a_real_type"}}"#;
    for context in [ContextKind::Database, ContextKind::Page] {
        let err = decode(input, context).unwrap_err();
        assert!(matches!(err, PropertyError::UnsupportedPropertyType { .. }));
        assert_eq!(err.key(), Some("k"));
        assert_eq!(err.tag_str(), Some("not_a_real_type"));
    }
}

#[test]
fn test_non_object_entry_rejected() {
    let err = decode_page_properties(br#"{"k": 42}"#).unwrap_err();
    match err {
        PropertyError::UnsupportedPropertyFormat { key, shape } => {
            assert_eq!(key, "k");
            assert_eq!(shape, JsonShape::Number);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_tag_rejected() {
    let err = decode_database_properties(br#"{"k": {"checkbox": {}}}"#).unwrap_err();
    assert!(matches!(
        err,
        PropertyError::UnsupportedPropertyType {
            tag: RawTag::Missing,
            ..
        }
    ));
}

#[test]
fn test_rich_text_empty_marker_and_list() {
    let empty = decode_page_properties(br#"{"k": {"type": "rich_text", "rich_text": {}}}"#).unwrap();
    assert_eq!(empty.get("k").unwrap().variant(), Variant::RichTextEmpty);

    let list = decode_page_properties(
        br#"{"k": {"type": "rich_text", "rich_text": [{"plain_text": "x"}]}}"#,
    )
    .unwrap();
    match list.get("k").unwrap() {
        PageProperty::RichText(p) => {
            assert_eq!(p.rich_text.len(), 1);
            assert_eq!(p.rich_text[0].plain_text, "x");
        }
        other => panic!("expected populated list, got {:?}", other.variant()),
    }
}

#[test]
fn test_rich_text_list_inside_schema() {
    let schema = decode_database_properties(
        br#"{"Notes": {"id": "n", "name": "Notes", "type": "rich_text", "rich_text": []}}"#,
    )
    .unwrap();
    assert_eq!(schema.get("Notes").unwrap().variant(), Variant::RichTextList);
}

#[test]
fn test_all_or_nothing() {
    let input = br#"{"good": {"type": "checkbox", "checkbox": true}, "bad": {"type": "nope"}}"#;
    let err = decode_page_properties(input).unwrap_err();
    assert_eq!(err.key(), Some("bad"));
}

#[test]
fn test_multi_key_container() {
    let props = decode_page_properties(
        br#"{
            "title": {"id": "title", "type": "title", "title": [{"type": "text", "text": {"content": "Q3"}, "plain_text": "Q3"}]},
            "number": {"id": "%3Dnum", "type": "number", "number": 12.5}
        }"#,
    )
    .unwrap();

    assert!(matches!(props.get("title"), Some(PageProperty::Title(t)) if t.plain_text() == "Q3"));
    assert!(matches!(props.get("number"), Some(PageProperty::Number(n)) if n.value() == Some(12.5)));

    let mut keys: Vec<&str> = props.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["number", "title"]);
}

#[test]
fn test_empty_object_decodes_to_empty_container() {
    assert!(decode_page_properties(b"{}").unwrap().is_empty());
    assert!(decode_database_properties(b"{}").unwrap().is_empty());
}

#[test]
fn test_realistic_page() {
    let input = json!({
        "Name": {
            "id": "title",
            "type": "title",
            "title": [{
                "type": "text",
                "text": {"content": "Write launch post", "link": null},
                "annotations": {"bold": true, "italic": false, "strikethrough": false,
                                "underline": false, "code": false, "color": "default"},
                "plain_text": "Write launch post",
                "href": null
            }]
        },
        "Status": {
            "id": "s%3Ab",
            "type": "select",
            "select": {"id": "1", "name": "In progress", "color": "blue"}
        },
        "Tags": {"id": "t", "type": "multi_select", "multi_select": []},
        "Due": {
            "id": "d",
            "type": "date",
            "date": {"start": "2024-06-01", "end": "2024-06-03", "time_zone": null}
        },
        "Score": {
            "id": "f",
            "type": "formula",
            "formula": {"type": "number", "number": 0.75}
        },
        "Total": {
            "id": "r",
            "type": "rollup",
            "rollup": {"type": "number", "number": 21, "function": "sum"}
        },
        "Assignee": {
            "id": "p",
            "type": "people",
            "people": [{"object": "user", "id": "u1", "name": "Ada",
                        "type": "person", "person": {"email": "ada@example.com"}}]
        },
        "Brief": {
            "id": "fl",
            "type": "files",
            "files": [{"name": "brief.pdf", "type": "external",
                       "external": {"url": "https://example.com/brief.pdf"}}]
        },
        "Link": {"id": "u", "type": "url", "url": null},
        "Created": {"id": "c", "type": "created_time", "created_time": "2024-05-20T09:30:00.000Z"}
    });

    let props = decode_page_properties(&bytes(&input)).unwrap();
    assert_eq!(props.len(), 10);
    assert_eq!(props.title_text().as_deref(), Some("Write launch post"));

    match props.get("Status") {
        Some(PageProperty::Select(s)) => {
            let option = s.select.as_ref().unwrap();
            assert_eq!(option.name, "In progress");
            assert_eq!(option.color, Color::Blue);
        }
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Due") {
        Some(PageProperty::Date(d)) => assert!(d.date.as_ref().unwrap().is_range()),
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Score") {
        Some(PageProperty::Formula(f)) => {
            assert_eq!(f.formula, FormulaResult::Number { number: Some(0.75) })
        }
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Total") {
        Some(PageProperty::Rollup(r)) => {
            assert_eq!(r.rollup.result(), Some(RollupValue::Number(Some(21.0))));
            assert_eq!(r.rollup.function, Some(RollupFunction::Sum));
        }
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Assignee") {
        Some(PageProperty::People(p)) => assert_eq!(p.people[0].email(), Some("ada@example.com")),
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Brief") {
        Some(PageProperty::Files(f)) => {
            assert_eq!(f.files[0].url(), Some("https://example.com/brief.pdf"))
        }
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Link") {
        Some(PageProperty::Url(u)) => assert!(u.url.is_none()),
        other => panic!("unexpected {other:?}"),
    }
    match props.get("Created") {
        Some(PageProperty::CreatedTime(c)) => assert!(c.created_time.instant().is_some()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_realistic_schema() {
    let input = json!({
        "Name": {"id": "title", "name": "Name", "type": "title", "title": {}},
        "Status": {
            "id": "s", "name": "Status", "type": "select",
            "select": {"options": [
                {"id": "1", "name": "Todo", "color": "gray"},
                {"id": "2", "name": "Done", "color": "green"}
            ]}
        },
        "Price": {"id": "p", "name": "Price", "type": "number", "number": {"format": "euro"}},
        "Project": {
            "id": "r", "name": "Project", "type": "relation",
            "relation": {"database_id": "668d797c-76fa-4934-9b05-ad288df2d136",
                         "synced_property_name": "Tasks",
                         "synced_property_id": "abc"}
        },
        "Created": {"id": "c", "name": "Created", "type": "created_time", "created_time": {}},
        "Author": {"id": "a", "name": "Author", "type": "created_by", "created_by": {}}
    });

    let schema = decode_database_properties(&bytes(&input)).unwrap();
    assert_eq!(schema.title().map(|(name, _)| name.as_str()), Some("Name"));

    let status = schema.get("Status").unwrap();
    let names: Vec<&str> = status.options().unwrap().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Todo", "Done"]);

    match schema.get("Price") {
        Some(DatabaseProperty::Number(n)) => assert_eq!(n.format(), Some(NumberFormat::Euro)),
        other => panic!("unexpected {other:?}"),
    }
    match schema.get("Project") {
        Some(DatabaseProperty::Relation(r)) => {
            let config = r.config().unwrap();
            assert_eq!(config.synced_property_name.as_deref(), Some("Tasks"));
        }
        other => panic!("unexpected {other:?}"),
    }
    match schema.get("Created") {
        Some(DatabaseProperty::CreatedTime(c)) => assert!(c.created_time.instant().is_none()),
        other => panic!("unexpected {other:?}"),
    }
    match schema.get("Author") {
        Some(DatabaseProperty::CreatedBy(c)) => assert!(c.created_by.id.is_empty()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_unknown_fields_are_ignored() {
    let props = decode_page_properties(
        br#"{"Done": {"id": "d", "type": "checkbox", "checkbox": true, "future_field": [1, 2]}}"#,
    )
    .unwrap();
    assert!(matches!(props.get("Done"), Some(PageProperty::Checkbox(c)) if c.checkbox));
}

#[test]
fn test_embedding_in_a_response_struct() {
    #[derive(serde::Deserialize)]
    struct PageResponse {
        id: String,
        properties: notion_props::PageProperties,
    }

    let page: PageResponse = serde_json::from_value(json!({
        "object": "page",
        "id": "59833787-2cf9-4fdf-8782-e53db20768a5",
        "properties": {
            "Done": {"id": "d", "type": "checkbox", "checkbox": false}
        }
    }))
    .unwrap();
    assert_eq!(page.id, "59833787-2cf9-4fdf-8782-e53db20768a5");
    assert_eq!(page.properties.len(), 1);

    let broken = serde_json::from_value::<PageResponse>(json!({
        "id": "x",
        "properties": {"Done": {"type": "status"}}
    }));
    assert!(broken.is_err());
}

#[test]
fn test_formula_without_result_type_decodes() {
    let props = decode_page_properties(
        br#"{"F": {"type": "formula", "formula": {"string": "x"}},
             "G": {"type": "formula", "formula": {}}}"#,
    )
    .unwrap();
    match props.get("F") {
        Some(PageProperty::Formula(f)) => assert_eq!(
            f.formula,
            FormulaResult::String {
                string: Some("x".to_string())
            }
        ),
        other => panic!("unexpected {other:?}"),
    }
    match props.get("G") {
        Some(PageProperty::Formula(f)) => assert_eq!(f.formula, FormulaResult::default()),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_unknown_enum_values_are_tolerated() {
    let schema = decode_database_properties(&bytes(&json!({
        "P": {"type": "number", "number": {"format": "peruvian_sol"}},
        "S": {"type": "select", "select": {"options": [
            {"id": "1", "name": "Soon", "color": "light_gray"}
        ]}}
    })))
    .unwrap();
    match schema.get("P") {
        Some(DatabaseProperty::Number(n)) => assert_eq!(n.format(), Some(NumberFormat::Other)),
        other => panic!("unexpected {other:?}"),
    }
    let options = schema.get("S").and_then(|p| p.options()).unwrap();
    assert_eq!(options[0].color, Color::Other);
    assert_eq!(options[0].name, "Soon");
}

#[test]
fn test_null_payloads_decode_to_defaults() {
    let props = decode_page_properties(&bytes(&json!({
        "Created": {"type": "created_time", "created_time": null},
        "Done": {"type": "checkbox", "checkbox": null},
        "Name": {"type": "title", "title": null},
        "Tags": {"type": "multi_select", "multi_select": null},
        "Notes": {"type": "rich_text", "rich_text": null}
    })))
    .unwrap();
    assert_eq!(props.len(), 5);
    assert!(matches!(props.get("Done"), Some(PageProperty::Checkbox(c)) if !c.checkbox));
    assert!(matches!(props.get("Name"), Some(PageProperty::Title(t)) if t.title.is_empty()));
    assert!(matches!(
        props.get("Created"),
        Some(PageProperty::CreatedTime(t)) if t.created_time.instant().is_none()
    ));
    assert!(matches!(props.get("Notes"), Some(PageProperty::RichText(r)) if r.rich_text.is_empty()));

    let schema = decode_database_properties(&bytes(&json!({
        "Notes": {"type": "rich_text", "rich_text": null},
        "Due": {"type": "date", "date": null}
    })))
    .unwrap();
    assert!(matches!(schema.get("Notes"), Some(DatabaseProperty::EmptyRichText(_))));
    assert!(matches!(schema.get("Due"), Some(DatabaseProperty::Date(_))));
}
