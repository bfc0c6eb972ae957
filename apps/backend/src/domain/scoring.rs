use time::Duration;

use crate::domain::rules::{MAX_POINTS, MIN_POINTS, QUESTION_TIME};

/// Points awarded for an answer submitted `elapsed` into the question window.
///
/// Correct answers decay linearly from [`MAX_POINTS`] at the instant the
/// question opens to [`MIN_POINTS`] at the deadline, truncated toward zero.
/// Incorrect answers always score 0 regardless of timing.
pub fn answer_points(elapsed: Duration, is_correct: bool) -> i32 {
    if !is_correct {
        return 0;
    }
    let fraction = 1.0 - elapsed.as_seconds_f64() / QUESTION_TIME.as_seconds_f64();
    (MIN_POINTS as f64 + (MAX_POINTS - MIN_POINTS) as f64 * fraction) as i32
}
