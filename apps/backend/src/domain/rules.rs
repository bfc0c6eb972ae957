//! Fixed gameplay constants for a trivia room.

use time::Duration;

/// Minimum players required to start a game.
pub const MIN_PLAYERS: u64 = 2;

/// Default number of questions for a new room.
pub const DEFAULT_NUM_QUESTIONS: i32 = 10;
/// Bounds applied to a caller-supplied question count.
pub const MIN_NUM_QUESTIONS: i32 = 1;
pub const MAX_NUM_QUESTIONS: i32 = 50;

/// Window during which answers to the current question are accepted.
pub const QUESTION_TIME: Duration = Duration::seconds(15);
/// Window during which the correct answer and per-player results are shown.
pub const REVEAL_TIME: Duration = Duration::seconds(5);

/// Points for a correct answer at the instant the question opens.
pub const MAX_POINTS: i32 = 1000;
/// Points for a correct answer exactly at the deadline.
pub const MIN_POINTS: i32 = 100;
