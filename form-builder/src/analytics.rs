//! What the analytics surface shows: the chosen axis and its buckets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateOptions, Bucket, aggregate_with_options, eligible_axis_fields};
use crate::{FieldId, FormField, FormResponse};

/// How the buckets are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Line,
}

/// The chart configuration held by the analytics surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// User-picked axis fields; may contain ids of deleted fields.
    pub axis_field_ids: Vec<FieldId>,
    pub kind: ChartKind,
}

impl ChartConfig {
    /// The axis actually used against the given fields.
    pub fn resolved_axis(&self, fields: &[FormField]) -> Vec<FieldId> {
        resolve_axis_selection(fields, &self.axis_field_ids)
    }
}

/// Turn a user selection into the axis used for aggregation.
///
/// Selected ids that are not eligible fields (deleted, or of a type that is
/// not a sensible axis) are dropped. If nothing is left, the first eligible
/// field is used; with no eligible field the axis is empty.
pub fn resolve_axis_selection(fields: &[FormField], selected: &[FieldId]) -> Vec<FieldId> {
    let eligible = eligible_axis_fields(fields);

    let cleaned: Vec<FieldId> = selected
        .iter()
        .filter(|id| eligible.iter().any(|field| field.id() == *id))
        .cloned()
        .collect();
    if !cleaned.is_empty() {
        return cleaned;
    }

    eligible
        .first()
        .map(|field| vec![field.id().clone()])
        .unwrap_or_default()
}

/// The numbers behind the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub axis_field_ids: Vec<FieldId>,
    pub buckets: Vec<Bucket>,
    pub total_responses: usize,
    pub last_submitted_at: Option<DateTime<Utc>>,
}

impl AnalyticsReport {
    /// Build the report for the current fields and responses.
    pub fn build(
        fields: &[FormField],
        responses: &[FormResponse],
        selected: &[FieldId],
        options: &AggregateOptions,
    ) -> Self {
        let axis_field_ids = resolve_axis_selection(fields, selected);
        let buckets = aggregate_with_options(responses, &axis_field_ids, options);

        Self {
            axis_field_ids,
            buckets,
            total_responses: responses.len(),
            last_submitted_at: responses.iter().map(FormResponse::submitted_at).max(),
        }
    }

    /// Check if there is nothing to chart yet.
    pub fn is_empty(&self) -> bool {
        self.total_responses == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::{Answers, FieldType, NewResponse};

    fn fields() -> Vec<FormField> {
        vec![
            FormField::new("agree", FieldType::Checkbox, "Agree"),
            FormField::new("city", FieldType::Text, "City"),
            FormField::new("age", FieldType::Number, "Age"),
        ]
    }

    #[test]
    fn empty_selection_defaults_to_first_eligible() {
        assert_eq!(resolve_axis_selection(&fields(), &[]), vec![FieldId::new("city")]);
    }

    #[test]
    fn stale_and_ineligible_ids_are_dropped() {
        let selected = [
            FieldId::new("deleted"),
            FieldId::new("age"),
            FieldId::new("agree"),
        ];
        assert_eq!(
            resolve_axis_selection(&fields(), &selected),
            vec![FieldId::new("age")]
        );
    }

    #[test]
    fn only_stale_ids_fall_back_to_first_eligible() {
        assert_eq!(
            resolve_axis_selection(&fields(), &[FieldId::new("deleted")]),
            vec![FieldId::new("city")]
        );
    }

    #[test]
    fn no_eligible_fields_gives_empty_axis() {
        let fields = vec![FormField::new("notes", FieldType::Textarea, "Notes")];
        assert!(resolve_axis_selection(&fields, &[]).is_empty());
    }

    #[test]
    fn report_counts_and_latest_submission() {
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        let responses = vec![
            NewResponse::new("r1", "f", Answers::new().with("city", "Oslo")).stamp(late),
            NewResponse::new("r2", "f", Answers::new().with("city", "Oslo")).stamp(early),
        ];

        let report =
            AnalyticsReport::build(&fields(), &responses, &[], &AggregateOptions::default());
        assert_eq!(report.axis_field_ids, vec![FieldId::new("city")]);
        assert_eq!(report.buckets, vec![Bucket::new("Oslo", 2)]);
        assert_eq!(report.total_responses, 2);
        assert_eq!(report.last_submitted_at, Some(late));
    }

    #[test]
    fn empty_report() {
        let report = AnalyticsReport::build(&fields(), &[], &[], &AggregateOptions::default());
        assert!(report.is_empty());
        assert!(report.buckets.is_empty());
        assert_eq!(report.last_submitted_at, None);
    }

    #[test]
    fn chart_config_resolves_against_fields() {
        let config = ChartConfig {
            axis_field_ids: vec![FieldId::new("gone")],
            kind: ChartKind::Pie,
        };
        assert_eq!(config.resolved_axis(&fields()), vec![FieldId::new("city")]);
        assert_eq!(ChartConfig::default().kind, ChartKind::Bar);
    }
}
