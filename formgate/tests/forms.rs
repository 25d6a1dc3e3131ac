//! Tests for declarative field tables.

use std::time::Duration;

use formgate::prelude::*;

#[test]
fn test_event_details_names_and_order() {
    let table = event_details();
    let names: Vec<&str> = table.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        ["signup_deadline", "exchange_date", "price", "location"]
    );
}

#[test]
fn test_event_details_registers_and_gates() {
    let submit = SubmitState::new();
    let gate = FormGate::new(submit.clone());
    register_all(&gate, &event_details()).unwrap();

    for (name, value) in [
        ("signup_deadline", "01/15/2020"),
        ("exchange_date", "12/25/2020"),
        ("price", "$10.00"),
        ("location", "NYC"),
    ] {
        gate.field(name).unwrap().set_value(value);
    }
    for name in gate.tracked() {
        gate.validate(&name).unwrap();
    }
    assert!(submit.is_enabled());
    assert!(gate.all_valid());
}

#[test]
fn test_location_requires_presence_only() {
    let entry = &event_details()[3];
    let field = entry.build().unwrap();
    field.set_value("   ");
    assert!(field.run_checks().is_err());
    field.set_value("NYC");
    assert!(field.run_checks().is_ok());
}

#[test]
fn test_blur_wait_carried_from_table() {
    let field = event_details()[0].build().unwrap();
    assert_eq!(field.blur_wait(), Some(Duration::from_millis(300)));

    let field = event_details()[2].build().unwrap();
    assert_eq!(field.blur_wait(), None);
}

#[test]
fn test_table_deserializes_from_json() {
    let json = r#"
        [
            {
                "name": "contact_email",
                "checks": [
                    { "kind": "presence", "failure_message": "✖" },
                    { "kind": "email", "failure_message": "✖" }
                ]
            }
        ]
    "#;
    let table: Vec<FieldSpec> = serde_json::from_str(json).unwrap();
    assert_eq!(table[0].valid_message, "\u{2714}");

    let field = table[0].build().unwrap();
    field.set_value("alice@example.com");
    assert!(field.run_checks().is_ok());
    field.set_value("not-an-email");
    assert!(field.run_checks().is_err());
}

#[test]
fn test_bad_pattern_in_table_is_reported() {
    let entry = FieldSpec::new("broken").check(CheckSpec::Format {
        pattern: "(".to_string(),
        failure_message: "\u{2716}".to_string(),
    });
    assert!(matches!(entry.build(), Err(GateError::Pattern(_))));
}
