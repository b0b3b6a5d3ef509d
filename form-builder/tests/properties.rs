use form_builder::{
    Answers, FieldId, FieldType, FormField, FormStore, aggregate, eligible_axis_fields,
    resolve_axis_selection,
};
use proptest::prelude::*;

fn field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Text),
        Just(FieldType::Textarea),
        Just(FieldType::Number),
        Just(FieldType::Email),
        Just(FieldType::Select),
        Just(FieldType::Checkbox),
        Just(FieldType::Date),
    ]
}

fn ids(store: &FormStore) -> Vec<FieldId> {
    store.fields().iter().map(|f| f.id().clone()).collect()
}

proptest! {
    #[test]
    fn prop_add_field_appends_in_call_order(
        kinds in proptest::collection::vec(field_type(), 0..20)
    ) {
        let mut store = FormStore::new();
        let added: Vec<FieldId> = kinds.iter().map(|k| store.add_field(*k)).collect();

        prop_assert_eq!(ids(&store), added.clone());
        let stored: Vec<FieldType> = store.fields().iter().map(FormField::kind).collect();
        prop_assert_eq!(stored, kinds);
        prop_assert_eq!(store.active_field_id(), added.last());
    }

    #[test]
    fn prop_move_field_is_remove_then_insert(
        len in 1..12usize,
        from_seed in 0..100usize,
        to_seed in 0..100usize,
    ) {
        let mut store = FormStore::new();
        for _ in 0..len {
            store.add_field(FieldType::Text);
        }
        let (from, to) = (from_seed % len, to_seed % len);

        let mut expected = ids(&store);
        let moved = expected.remove(from);
        expected.insert(to, moved);

        prop_assert!(store.move_field(from, to).is_ok());
        prop_assert_eq!(ids(&store), expected);
    }

    #[test]
    fn prop_move_field_out_of_range_is_rejected(
        len in 0..8usize,
        past_end in 0..4usize,
        other in 0..8usize,
    ) {
        let mut store = FormStore::new();
        for _ in 0..len {
            store.add_field(FieldType::Number);
        }
        let before = ids(&store);

        prop_assert!(store.move_field(len + past_end, other).is_err());
        prop_assert!(store.move_field(other, len + past_end).is_err());
        prop_assert_eq!(ids(&store), before);
    }

    #[test]
    fn prop_eligible_filter_is_idempotent(
        kinds in proptest::collection::vec(field_type(), 0..20)
    ) {
        let fields: Vec<FormField> = kinds
            .iter()
            .enumerate()
            .map(|(i, k)| FormField::new(format!("f{i}"), *k, k.default_label()))
            .collect();

        let once: Vec<FormField> = eligible_axis_fields(&fields).into_iter().cloned().collect();
        let twice: Vec<FormField> = eligible_axis_fields(&once).into_iter().cloned().collect();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|f| f.kind().is_axis_eligible()));
    }

    #[test]
    fn prop_resolved_axis_only_names_eligible_fields(
        kinds in proptest::collection::vec(field_type(), 0..10),
        picks in proptest::collection::vec(0..12usize, 0..4),
    ) {
        let fields: Vec<FormField> = kinds
            .iter()
            .enumerate()
            .map(|(i, k)| FormField::new(format!("f{i}"), *k, "Field"))
            .collect();
        let selected: Vec<FieldId> = picks.iter().map(|i| FieldId::new(format!("f{i}"))).collect();

        let axis = resolve_axis_selection(&fields, &selected);
        let eligible: Vec<&FieldId> = eligible_axis_fields(&fields).into_iter().map(FormField::id).collect();
        prop_assert!(axis.iter().all(|id| eligible.contains(&id)));
        prop_assert_eq!(axis.is_empty(), eligible.is_empty());
    }

    #[test]
    fn prop_bucket_counts_sum_to_response_count(
        values in proptest::collection::vec(proptest::option::of("[a-c]{0,2}"), 0..30)
    ) {
        let responses: Vec<Answers> = values
            .iter()
            .map(|v| match v {
                Some(v) => Answers::new().with("q", v.as_str()),
                None => Answers::new(),
            })
            .collect();

        let buckets = aggregate(&responses, &[FieldId::new("q")], " | ");
        let total: usize = buckets.iter().map(|b| b.count).sum();
        prop_assert_eq!(total, responses.len());

        let mut labels: Vec<&str> = buckets.iter().map(|b| b.bucket_label.as_str()).collect();
        let distinct = labels.len();
        labels.sort();
        labels.dedup();
        prop_assert_eq!(labels.len(), distinct);
    }
}
