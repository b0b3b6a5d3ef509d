use form_builder::{Answers, FieldType, FormField};

/// An event RSVP with dietary preferences.
pub fn event_rsvp() -> Vec<FormField> {
    vec![
        FormField::new("guest", FieldType::Text, "Guest name").with_required(true),
        FormField::new("contact", FieldType::Email, "Email").with_required(true),
        FormField::new("party", FieldType::Number, "Party size").with_required(true),
        FormField::new("diet", FieldType::Select, "Dietary preference")
            .with_options(["None", "Vegetarian", "Vegan", "Gluten-free"]),
        FormField::new("attending", FieldType::Checkbox, "I will attend").with_required(true),
        FormField::new("notes", FieldType::Textarea, "Anything else?"),
    ]
}

/// A valid set of answers for [`event_rsvp`].
pub fn rsvp_answers(guest: &str, party: i32, diet: &str) -> Answers {
    Answers::new()
        .with("guest", guest)
        .with("contact", format!("{}@example.com", guest.to_lowercase()))
        .with("party", party)
        .with("diet", diet)
        .with("attending", true)
        .with("notes", "")
}
