use std::path::PathBuf;

use anyhow::Context;
use form_builder::{
    AggregateOptions, AnalyticsReport, Answers, FieldId, FormField, FormGenerator, FormStore,
    generate_form, parse_generated_fields,
};
use form_builder_csv::{CsvOptions, to_csv_with_options};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads a generated field list from a JSON file instead of a model.
struct JsonFileGenerator {
    path: PathBuf,
}

impl FormGenerator for JsonFileGenerator {
    type Error = anyhow::Error;

    fn generate(&self, prompt: &str) -> Result<Vec<FormField>, Self::Error> {
        tracing::info!(path = %self.path.display(), prompt, "loading generated form");
        let json = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(parse_generated_fields(&json)?)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut store = FormStore::new();

    match std::env::args_os().nth(1) {
        Some(path) => {
            let generator = JsonFileGenerator { path: path.into() };
            generate_form(&mut store, &generator, "A form loaded from disk")?;
            submit_defaults(&mut store);
        }
        None => {
            store.set_fields(example_forms::contact_form());
            submit_contact_requests(&mut store);
        }
    }

    println!("=== Fields ===");
    for field in store.fields() {
        println!(
            "{:<12} {:<10} {}{}",
            field.id().as_str(),
            field.kind().display_name(),
            field.label(),
            if field.is_required() { " *" } else { "" }
        );
    }

    let report = AnalyticsReport::build(
        store.fields(),
        store.responses(),
        &[],
        &AggregateOptions::default(),
    );
    println!("\n=== Analytics ({} responses) ===", report.total_responses);
    let axis: Vec<&str> = report.axis_field_ids.iter().map(FieldId::as_str).collect();
    println!("grouped by: {}", axis.join(", "));
    for bucket in &report.buckets {
        println!("{:>4}  {}", bucket.count, bucket.bucket_label);
    }

    let options = CsvOptions::new();
    let file_name = report
        .last_submitted_at
        .map(|at| options.file_name(at))
        .unwrap_or_else(|| format!("{}.csv", options.filename_prefix));
    println!("\n=== {file_name} ===");
    print!("{}", to_csv_with_options(store.fields(), store.responses(), &options));

    Ok(())
}

fn submit_contact_requests(store: &mut FormStore) {
    let attempts = [
        Answers::new()
            .with("name", "Ada Lovelace")
            .with("email", "ada@example.com")
            .with("budget", "5k - 20k")
            .with("start", "2025-01-15")
            .with("message", "An engine for Bernoulli numbers")
            .with("newsletter", true),
        Answers::new()
            .with("name", "Charles")
            .with("email", "charles@")
            .with("budget", "unlimited"),
        Answers::new()
            .with("name", "Grace Hopper")
            .with("email", "grace@example.com")
            .with("budget", "> 20k")
            .with("newsletter", false),
        Answers::new()
            .with("name", "Alan Turing")
            .with("email", "alan@example.com")
            .with("budget", "5k - 20k"),
    ];

    for answers in attempts {
        submit(store, answers);
    }
}

fn submit_defaults(store: &mut FormStore) {
    let answers = store.default_answers();
    submit(store, answers);
}

fn submit(store: &mut FormStore, answers: Answers) {
    match store.submit(answers) {
        Ok(response) => println!("Accepted response {}", response.id()),
        Err(errors) => {
            println!("Rejected: {errors}");
            let mut messages: Vec<(&FieldId, &str)> = errors.iter().collect();
            messages.sort();
            for (field, message) in messages {
                println!("  {field}: {message}");
            }
        }
    }
}
