//! Spaced-repetition progress tracking tests against in-memory SQLite.

mod common;

use chrono::{Duration, Utc};
use palabra_engine::{ProgressTracker, SqliteProgressStore};
use vocab_core::{ReviewOutcome, MAX_LEVEL};

fn tracker() -> ProgressTracker {
    let store = SqliteProgressStore::open_in_memory().expect("open store");
    ProgressTracker::new(Box::new(store))
}

/// Allow for the wall-clock time a test step takes.
fn close_to(actual: chrono::DateTime<Utc>, expected: chrono::DateTime<Utc>) -> bool {
    (actual - expected).num_seconds().abs() < 5
}

#[test]
fn first_review_already_moves_the_level() {
    let tracker = tracker();

    let progress = tracker
        .record_review("f1", ReviewOutcome::Correct)
        .expect("record");

    assert_eq!(progress.level, 1);
    assert!(progress.last_reviewed_at.is_some());
    assert!(close_to(progress.next_review_at, Utc::now() + Duration::hours(1)));
}

#[test]
fn five_corrects_reach_and_hold_the_top_level() {
    let tracker = tracker();

    let mut progress = None;
    for _ in 0..5 {
        progress = Some(
            tracker
                .record_review("f1", ReviewOutcome::Correct)
                .expect("record"),
        );
    }

    let progress = progress.unwrap();
    assert_eq!(progress.level, MAX_LEVEL);
    assert!(close_to(progress.next_review_at, Utc::now() + Duration::days(7)));

    // A sixth correct stays clamped at the top.
    let sixth = tracker
        .record_review("f1", ReviewOutcome::Correct)
        .expect("record");
    assert_eq!(sixth.level, MAX_LEVEL);
}

#[test]
fn incorrect_at_level_zero_stays_due_immediately() {
    let tracker = tracker();

    let progress = tracker
        .record_review("f1", ReviewOutcome::Incorrect)
        .expect("record");

    assert_eq!(progress.level, 0);
    assert!(close_to(progress.next_review_at, Utc::now()));
}

#[test]
fn mixed_outcomes_walk_the_levels() {
    let tracker = tracker();
    let outcomes = [
        (ReviewOutcome::Correct, 1),
        (ReviewOutcome::Correct, 2),
        (ReviewOutcome::Incorrect, 1),
        (ReviewOutcome::Correct, 2),
    ];

    let mut last = None;
    for (outcome, expected_level) in outcomes {
        let progress = tracker.record_review("f1", outcome).expect("record");
        assert_eq!(progress.level, expected_level);
        last = Some(progress);
    }

    // Final state is level 2: due again in six hours.
    let last = last.unwrap();
    assert!(close_to(last.next_review_at, Utc::now() + Duration::hours(6)));
}

#[test]
fn cards_are_tracked_independently() {
    let tracker = tracker();

    tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
    tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
    tracker.record_review("f2", ReviewOutcome::Correct).expect("record");

    assert_eq!(tracker.progress("f1").expect("get").unwrap().level, 2);
    assert_eq!(tracker.progress("f2").expect("get").unwrap().level, 1);
}

#[test]
fn reset_single_card_behaves_like_a_fresh_first_review() {
    let tracker = tracker();

    for _ in 0..4 {
        tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
    }
    tracker.record_review("f2", ReviewOutcome::Correct).expect("record");

    let removed = tracker.reset_progress(Some(&["f1"])).expect("reset");
    assert_eq!(removed, 1);
    assert!(tracker.progress("f1").expect("get").is_none());

    // Not resuming a stale level: 0 -> 1, exactly like a new card.
    let progress = tracker
        .record_review("f1", ReviewOutcome::Correct)
        .expect("record");
    assert_eq!(progress.level, 1);

    // Other cards untouched
    assert!(tracker.progress("f2").expect("get").is_some());
}

#[test]
fn reset_without_ids_wipes_everything() {
    let tracker = tracker();

    tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
    tracker.record_review("f2", ReviewOutcome::Correct).expect("record");

    let removed = tracker.reset_progress(None).expect("reset");
    assert_eq!(removed, 2);
    assert!(tracker.all_progress().expect("all").is_empty());
}

#[test]
fn due_cards_reflect_the_schedule() {
    let tracker = tracker();

    // Incorrect leaves the card at level 0, due immediately.
    tracker.record_review("due-now", ReviewOutcome::Incorrect).expect("record");
    // Correct schedules an hour out.
    tracker.record_review("later", ReviewOutcome::Correct).expect("record");

    let due = tracker.due_cards().expect("due");
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].flashcard_id, "due-now");
}

#[test]
fn progress_survives_across_tracker_instances_on_shared_storage() {
    let dir = std::env::temp_dir().join(format!(
        "palabra-progress-test-{}",
        uuid::Uuid::new_v4().simple()
    ));
    std::fs::create_dir_all(&dir).expect("create dir");
    let db_path = dir.join("progress.db");

    {
        let store = SqliteProgressStore::open(&db_path).expect("open");
        let tracker = ProgressTracker::new(Box::new(store));
        tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
        tracker.record_review("f1", ReviewOutcome::Correct).expect("record");
    }

    let store = SqliteProgressStore::open(&db_path).expect("reopen");
    let tracker = ProgressTracker::new(Box::new(store));
    assert_eq!(tracker.progress("f1").expect("get").unwrap().level, 2);

    std::fs::remove_dir_all(&dir).ok();
}
