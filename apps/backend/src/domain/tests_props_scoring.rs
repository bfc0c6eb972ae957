use proptest::prelude::*;
use time::Duration;

use crate::domain::rules::{MAX_POINTS, MIN_POINTS};
use crate::domain::scoring::answer_points;

proptest! {
    #[test]
    fn correct_points_stay_inside_the_band(ms in 0i64..=15_000) {
        let points = answer_points(Duration::milliseconds(ms), true);
        prop_assert!((MIN_POINTS..=MAX_POINTS).contains(&points));
    }

    #[test]
    fn points_never_increase_with_latency(a in 0i64..=15_000, b in 0i64..=15_000) {
        let (fast, slow) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            answer_points(Duration::milliseconds(fast), true)
                >= answer_points(Duration::milliseconds(slow), true)
        );
    }

    #[test]
    fn wrong_answers_always_score_zero(ms in 0i64..=15_000) {
        prop_assert_eq!(answer_points(Duration::milliseconds(ms), false), 0);
    }
}
