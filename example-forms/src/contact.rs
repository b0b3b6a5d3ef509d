use form_builder::{FieldType, FormField};

/// A website project inquiry form.
pub fn contact_form() -> Vec<FormField> {
    vec![
        FormField::new("name", FieldType::Text, "Full name")
            .with_placeholder("Ada Lovelace")
            .with_required(true),
        FormField::new("email", FieldType::Email, "Email")
            .with_placeholder("ada@example.com")
            .with_required(true),
        FormField::new("budget", FieldType::Select, "Budget")
            .with_options(["< 5k", "5k - 20k", "> 20k"])
            .with_required(true),
        FormField::new("start", FieldType::Date, "Preferred start date"),
        FormField::new("message", FieldType::Textarea, "Project details")
            .with_placeholder("Tell us about your project"),
        FormField::new("newsletter", FieldType::Checkbox, "Subscribe to our newsletter"),
    ]
}
