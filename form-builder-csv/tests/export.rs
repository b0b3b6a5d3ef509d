use example_forms::{event_rsvp, rsvp_answers};
use form_builder::{FieldId, FormStore};
use form_builder_csv::{CsvOptions, to_csv, to_csv_with_options};

fn rsvp_store() -> FormStore {
    let mut store = FormStore::new();
    store.set_fields(event_rsvp());
    store.submit(rsvp_answers("Ada", 2, "Vegan")).unwrap();
    store
        .submit(rsvp_answers("Grace", 1, "None").with("notes", "Bringing \"cake\", maybe"))
        .unwrap();
    store
}

#[test]
fn test_rsvp_export() {
    let store = rsvp_store();
    let csv = to_csv(store.fields(), store.responses());
    let lines: Vec<&str> = csv.split("\r\n").collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "SubmittedAt,Guest name (guest),Email (contact),Party size (party),\
         Dietary preference (diet),I will attend (attending),Anything else? (notes)"
    );
    assert!(lines[1].ends_with(",Ada,ada@example.com,2,Vegan,true,"));
    assert!(lines[2].ends_with(",Grace,grace@example.com,1,None,true,\"Bringing \"\"cake\"\", maybe\""));
    assert_eq!(lines[3], "");
}

#[test]
fn test_deleted_field_is_not_exported() {
    let mut store = rsvp_store();
    assert!(store.remove_field(&FieldId::new("diet")));

    let csv = to_csv(store.fields(), store.responses());
    assert!(!csv.contains("Dietary preference"));
    assert!(!csv.contains("Vegan"));
    // the answer itself is still recorded
    assert!(store.responses()[0].answers().contains(&FieldId::new("diet")));
}

#[test]
fn test_custom_separator() {
    let store = rsvp_store();
    let csv = to_csv_with_options(
        store.fields(),
        store.responses(),
        &CsvOptions::new().with_separator(';'),
    );

    assert!(csv.starts_with("SubmittedAt;Guest name (guest);"));
    // commas no longer force quoting
    assert!(csv.contains(";\"Bringing \"\"cake\"\", maybe\"\r\n"));
}
