use form_builder::{FieldType, FormField};

/// A registration form for a coding bootcamp.
///
/// The cohort code carries a validation rule; the phone field carries a
/// rule that does not compile and is therefore only checked as text.
pub fn bootcamp_registration() -> Vec<FormField> {
    vec![
        FormField::new("applicant", FieldType::Text, "Applicant").with_required(true),
        FormField::new("cohort", FieldType::Text, "Cohort code")
            .with_placeholder("WEB-2024")
            .with_validation_rule("^[A-Z]{2,4}-[0-9]{4}$")
            .with_required(true),
        FormField::new("phone", FieldType::Text, "Phone").with_validation_rule("(+"),
        FormField::new("track", FieldType::Select, "Track")
            .with_options(["Web", "Data", "Mobile"])
            .with_required(true),
        FormField::new("experience", FieldType::Number, "Years of experience"),
        FormField::new("birthday", FieldType::Date, "Date of birth").with_required(true),
        FormField::new("motivation", FieldType::Textarea, "Why do you want to join?"),
        FormField::new("terms", FieldType::Checkbox, "I accept the terms").with_required(true),
    ]
}
