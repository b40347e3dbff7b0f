use stride_core::models::AssistanceLevel;
use stride_measures::draft::EntryDraft;
use stride_measures::{calculate, get_measure, validate};
use uuid::Uuid;

fn appointment() -> Uuid {
    Uuid::new_v4()
}

#[test]
fn bbs_individual_items_sum_out_of_56() {
    let measure = get_measure("bbs").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(3.0); 14];

    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "42/56");
}

#[test]
fn abc_items_average_to_percent() {
    let measure = get_measure("abc").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.item_scores = vec![Some(80.0); 16];

    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "80.0%");
}

#[test]
fn ten_meter_walk_comfortable_only() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.comfortable_trials = [Some(6.0), Some(6.0)];
    draft.assistance_level = Some(AssistanceLevel::Independent);

    let entry = draft.build_entry(measure).unwrap();
    // Fast condition never administered → omitted, not rendered as zero.
    assert_eq!(entry.calculated_result, "6.0s → 1.00 m/s");
}

#[test]
fn ten_meter_walk_both_conditions() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.comfortable_trials = [Some(6.0), None];
    draft.fast_trials = [Some(4.0), Some(4.0)];
    draft.assistance_level = Some(AssistanceLevel::Supervision);

    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(
        entry.calculated_result,
        "Comfortable: 6.0s → 1.00 m/s | Fast: 4.0s → 1.50 m/s"
    );
}

#[test]
fn ftsts_duration_bands() {
    let measure = get_measure("five_times_sit_to_stand").unwrap();

    let mut draft = EntryDraft::new(measure, appointment());
    draft.duration_seconds = Some(10.0);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "10.0s – Normal function");

    draft.duration_seconds = Some(15.0);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "15.0s – Below normal function");
}

#[test]
fn ftsts_band_boundaries_are_inclusive() {
    let measure = get_measure("five_times_sit_to_stand").unwrap();

    let mut draft = EntryDraft::new(measure, appointment());
    draft.duration_seconds = Some(11.0);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "11.0s – Normal function");

    draft.duration_seconds = Some(13.6);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "13.6s – Mostly normal function");
}

#[test]
fn six_minute_walk_full_and_early_stop() {
    let measure = get_measure("six_minute_walk").unwrap();

    let mut draft = EntryDraft::new(measure, appointment());
    draft.distance_m = Some(300.0);
    draft.assistance_level = Some(AssistanceLevel::ContactGuard);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "300 m in 6.0 min");

    draft.stopped_early = true;
    draft.elapsed_minutes = Some(4.5);
    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "300 m in 4.5 min");
}

#[test]
fn fractional_distance_keeps_one_decimal() {
    let measure = get_measure("six_minute_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.distance_m = Some(302.5);
    draft.assistance_level = Some(AssistanceLevel::Independent);

    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "302.5 m in 6.0 min");
}

#[test]
fn fga_total_entry_scores_out_of_30() {
    let measure = get_measure("fga").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.entry_method = stride_core::models::EntryMethod::Total;
    draft.total_score = Some(25.0);

    let entry = draft.build_entry(measure).unwrap();
    assert_eq!(entry.calculated_result, "25/30");
    assert_eq!(entry.total_score, Some(25.0));
    assert!(entry.individual_items.is_none());
}

#[test]
fn scoring_is_idempotent() {
    let measure = get_measure("ten_meter_walk").unwrap();
    let mut draft = EntryDraft::new(measure, appointment());
    draft.comfortable_trials = [Some(7.3), Some(6.9)];
    draft.assistance_level = Some(AssistanceLevel::MinimalAssistance);

    let input = validate(measure, &draft).unwrap();
    assert_eq!(calculate(&input), calculate(&input));
}
