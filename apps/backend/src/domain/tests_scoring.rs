use time::Duration;

use crate::domain::rules::{MAX_POINTS, MIN_POINTS, QUESTION_TIME};
use crate::domain::scoring::answer_points;

#[test]
fn instant_answer_scores_the_maximum() {
    assert_eq!(answer_points(Duration::ZERO, true), MAX_POINTS);
}

#[test]
fn deadline_answer_scores_the_minimum() {
    assert_eq!(answer_points(QUESTION_TIME, true), MIN_POINTS);
}

#[test]
fn decay_is_linear_in_elapsed_time() {
    // 3s of 15s gone leaves 4/5 of the 900-point spread: 100 + 720.
    assert_eq!(answer_points(Duration::seconds(3), true), 820);
    // Halfway through the window sits exactly mid-spread.
    assert_eq!(answer_points(Duration::milliseconds(7_500), true), 550);
}

#[test]
fn fractional_points_truncate_toward_zero() {
    // 101ms costs 6.06 points of spread: 1000 - 6.06 = 993.94, floored.
    assert_eq!(answer_points(Duration::milliseconds(101), true), 993);
}

#[test]
fn wrong_answers_score_zero_no_matter_how_fast() {
    assert_eq!(answer_points(Duration::ZERO, false), 0);
    assert_eq!(answer_points(Duration::seconds(3), false), 0);
    assert_eq!(answer_points(QUESTION_TIME, false), 0);
}
