use time::macros::datetime;
use time::Duration;

use crate::domain::round::{phase_at, within_answer_window, RoundPhase};
use crate::domain::rules::{QUESTION_TIME, REVEAL_TIME};

const STARTED: time::OffsetDateTime = datetime!(2026-08-07 12:00:00 UTC);

#[test]
fn fresh_question_has_the_full_window() {
    let phase = phase_at(STARTED, STARTED);
    assert_eq!(
        phase,
        RoundPhase::Question {
            time_left: QUESTION_TIME
        }
    );
}

#[test]
fn question_time_left_counts_down() {
    let phase = phase_at(STARTED, STARTED + Duration::milliseconds(7_500));
    assert_eq!(
        phase,
        RoundPhase::Question {
            time_left: Duration::milliseconds(7_500)
        }
    );
}

#[test]
fn question_window_is_half_open_at_the_deadline() {
    // At exactly QUESTION_TIME the reveal starts.
    let phase = phase_at(STARTED, STARTED + QUESTION_TIME);
    assert_eq!(
        phase,
        RoundPhase::Reveal {
            time_left: REVEAL_TIME
        }
    );
}

#[test]
fn reveal_runs_until_both_windows_elapse() {
    let phase = phase_at(STARTED, STARTED + Duration::milliseconds(19_999));
    assert_eq!(
        phase,
        RoundPhase::Reveal {
            time_left: Duration::milliseconds(1)
        }
    );
}

#[test]
fn both_windows_elapsed_means_expired() {
    assert_eq!(
        phase_at(STARTED, STARTED + QUESTION_TIME + REVEAL_TIME),
        RoundPhase::Expired
    );
    assert_eq!(
        phase_at(STARTED, STARTED + Duration::minutes(10)),
        RoundPhase::Expired
    );
}

#[test]
fn time_left_decreases_between_two_polls_in_the_same_window() {
    let t1 = STARTED + Duration::seconds(3);
    let t2 = STARTED + Duration::seconds(9);

    let left_at = |now| match phase_at(STARTED, now) {
        RoundPhase::Question { time_left } => time_left,
        other => panic!("expected question phase, got {other:?}"),
    };

    assert!(left_at(t1) > left_at(t2));
}

#[test]
fn answer_window_includes_the_deadline_instant() {
    assert!(within_answer_window(Duration::ZERO));
    assert!(within_answer_window(QUESTION_TIME));
    assert!(!within_answer_window(QUESTION_TIME + Duration::milliseconds(1)));
}
