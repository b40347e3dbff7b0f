use stride_core::models::{AssistanceLevel, EntryMethod};
use stride_measures::draft::EntryDraft;
use stride_measures::{get_measure, validate};
use uuid::Uuid;

fn appointment() -> Uuid {
    Uuid::new_v4()
}

#[test]
fn earliest_missing_item_is_reported_one_indexed() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(4.0); 14];
    draft.item_scores[4] = None;
    draft.item_scores[9] = None;

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "item_5");
    assert_eq!(errors[0].message, "Item 5 has no score");
}

#[test]
fn missing_item_and_bad_item_both_reported() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(2.0); 14];
    draft.item_scores[0] = None;
    draft.item_scores[7] = Some(9.0);

    let errors = validate(measure, &draft).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"item_1"));
    assert!(fields.contains(&"item_8"));
}

#[test]
fn item_sum_items_must_be_whole_numbers() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(3.0); 14];
    draft.item_scores[2] = Some(2.5);

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("whole number"));
}

#[test]
fn percent_items_accept_fractional_values() {
    let measure = get_measure("abc").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(82.5); 16];

    assert!(validate(measure, &draft).is_ok());
}

#[test]
fn total_boundaries_are_accepted() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.entry_method = EntryMethod::Total;

    draft.total_score = Some(0.0);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "0/56");

    draft.total_score = Some(56.0);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "56/56");
}

#[test]
fn out_of_range_total_echoes_the_valid_range() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.entry_method = EntryMethod::Total;
    draft.total_score = Some(57.0);

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("[0, 56]"));
}

#[test]
fn percent_total_capped_at_100() {
    let measure = get_measure("abc").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.entry_method = EntryMethod::Total;
    draft.total_score = Some(100.5);

    let errors = validate(measure, &draft).unwrap_err();
    assert!(errors[0].message.contains("[0, 100]"));
}

#[test]
fn missing_total_is_required() {
    let measure = get_measure("fga").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.entry_method = EntryMethod::Total;

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors[0].field, "total_score");
}

#[test]
fn time_trial_reports_every_failure_at_once() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let draft = EntryDraft::new(measure, appointment());

    // No comfortable trial and no assistance level: both reported.
    let errors = validate(measure, &draft).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"comfortable_trial_1"));
    assert!(fields.contains(&"assistance_level"));
}

#[test]
fn trial_times_must_be_positive() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.comfortable_trials = [Some(0.0), None];
    draft.assistance_level = Some(AssistanceLevel::Independent);

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors[0].field, "comfortable_trial_1");
}

#[test]
fn fast_second_trial_requires_fast_first() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.comfortable_trials = [Some(6.0), None];
    draft.fast_trials = [None, Some(4.2)];
    draft.assistance_level = Some(AssistanceLevel::Independent);

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fast_trial_1");
}

#[test]
fn early_stop_requires_elapsed_within_nominal() {
    let measure = get_measure("six_minute_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.distance_m = Some(250.0);
    draft.assistance_level = Some(AssistanceLevel::Supervision);
    draft.stopped_early = true;

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors[0].field, "elapsed_minutes");

    draft.elapsed_minutes = Some(7.0);
    let errors = validate(measure, &draft).unwrap_err();
    assert!(errors[0].message.contains("at most 6 minutes"));

    draft.elapsed_minutes = Some(4.5);
    assert!(validate(measure, &draft).is_ok());
}

#[test]
fn negative_distance_rejected_zero_accepted() {
    let measure = get_measure("six_minute_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.assistance_level = Some(AssistanceLevel::Dependent);

    draft.distance_m = Some(-1.0);
    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors[0].field, "distance_m");

    draft.distance_m = Some(0.0);
    assert!(validate(measure, &draft).is_ok());
}

#[test]
fn duration_must_be_positive() {
    let measure = get_measure("timed_up_and_go").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());

    let errors = validate(measure, &draft).unwrap_err();
    assert_eq!(errors[0].field, "duration_seconds");

    draft.duration_seconds = Some(0.0);
    let errors = validate(measure, &draft).unwrap_err();
    assert!(errors[0].message.contains("greater than 0"));
}
