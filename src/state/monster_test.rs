use super::*;

// =============================================================
// FieldKey
// =============================================================

#[test]
fn field_key_wire_names_match_input_ids() {
    assert_eq!(FieldKey::Name.as_str(), "name");
    assert_eq!(FieldKey::Citizenship.as_str(), "citizenship");
    assert_eq!(FieldKey::BirthDate.as_str(), "birthDate");
}

#[test]
fn field_key_parse_round_trips_known_keys_only() {
    for key in FieldKey::ALL {
        assert_eq!(FieldKey::parse(key.as_str()), Some(key));
    }
    assert_eq!(FieldKey::parse(""), None);
    assert_eq!(FieldKey::parse("birth_date"), None);
}

#[test]
fn field_key_labels() {
    assert_eq!(FieldKey::BirthDate.label(), "Birth Date");
}

// =============================================================
// MonsterForm
// =============================================================

#[test]
fn monster_form_set_then_get() {
    let mut form = MonsterForm::default();
    form.set(FieldKey::Citizenship, "Narnia".to_owned());
    assert_eq!(form.get(FieldKey::Citizenship), "Narnia");
    assert_eq!(form.get(FieldKey::Name), "");
}

#[test]
fn monster_form_serializes_camel_case() {
    let form = MonsterForm {
        name: "Rex".to_owned(),
        citizenship: "Narnia".to_owned(),
        birth_date: "2001-01-01".to_owned(),
    };
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["birthDate"], "2001-01-01");
    assert!(json.get("birth_date").is_none());
}

// =============================================================
// FormErrors
// =============================================================

#[test]
fn form_errors_empty_has_no_values() {
    assert!(!FormErrors::new().has_values());
}

#[test]
fn form_errors_all_empty_messages_has_no_values() {
    let errors: FormErrors = [("name", ""), ("citizenship", "")].into_iter().collect();
    assert!(!errors.has_values());
    assert_eq!(errors.message("name"), None);
}

#[test]
fn form_errors_any_message_has_values() {
    let errors: FormErrors = [("name", ""), ("owner", "Unknown owner")].into_iter().collect();
    assert!(errors.has_values());
    assert_eq!(errors.first_message(), Some("Unknown owner"));
}

#[test]
fn form_errors_clear_removes_entry() {
    let mut errors = FormErrors::new();
    errors.set("name", "Required");
    errors.clear("name");
    assert!(errors.is_empty());
}

#[test]
fn form_errors_deserializes_from_plain_map() {
    let errors: FormErrors = serde_json::from_str(r#"{"name":"Required"}"#).unwrap();
    assert_eq!(errors.message("name"), Some("Required"));
}

// =============================================================
// ItemId / Monster
// =============================================================

#[test]
fn item_id_displays_bare() {
    assert_eq!(ItemId::Number(42).to_string(), "42");
    assert_eq!(ItemId::Text("m-7".to_owned()).to_string(), "m-7");
}

#[test]
fn item_id_from_param_prefers_number() {
    assert_eq!(ItemId::from_param("42"), ItemId::Number(42));
    assert_eq!(ItemId::from_param("abc"), ItemId::Text("abc".to_owned()));
}

#[test]
fn monster_deserializes_numeric_or_string_id() {
    let numeric: Monster = serde_json::from_str(r#"{"id":42,"name":"Rex"}"#).unwrap();
    assert_eq!(numeric.id, ItemId::Number(42));
    assert_eq!(numeric.birth_date, "");

    let text: Monster = serde_json::from_str(r#"{"id":"a1b2"}"#).unwrap();
    assert_eq!(text.id, ItemId::Text("a1b2".to_owned()));
}

// =============================================================
// MonsterState
// =============================================================

#[test]
fn monster_state_reset_clears_form_and_errors_but_keeps_item() {
    let mut state = MonsterState::default();
    state.add_form.set(FieldKey::Name, "Rex".to_owned());
    state.add_form_errors.set("name", "Taken");
    state.current_item = Some(Monster {
        id: ItemId::Number(1),
        name: "Old".to_owned(),
        citizenship: String::new(),
        birth_date: String::new(),
    });

    state.reset_add_form();

    assert_eq!(state.add_form, MonsterForm::default());
    assert!(state.add_form_errors.is_empty());
    assert!(state.current_item.is_some());
}
