use serde::Serialize;
use time::Duration;

use crate::entities::players;
use crate::entities::questions::{self, AnswerKey};

/// One leaderboard row, ranked by the service before serialization.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerEntry {
    pub name: String,
    pub score: i32,
    pub id: i64,
}

impl From<&players::Model> for PlayerEntry {
    fn from(player: &players::Model) -> Self {
        Self {
            name: player.name.clone(),
            score: player.score,
            id: player.id,
        }
    }
}

/// The four labeled options of the current question.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsBody {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl From<&questions::Model> for OptionsBody {
    fn from(question: &questions::Model) -> Self {
        Self {
            a: question.option_a.clone(),
            b: question.option_b.clone(),
            c: question.option_c.clone(),
            d: question.option_d.clone(),
        }
    }
}

/// Everything a client needs to render the current question.
#[derive(Debug, Clone, Serialize)]
pub struct RoundView {
    pub question_num: u32,
    pub total_questions: u32,
    pub question: String,
    pub category: String,
    pub options: OptionsBody,
    /// Seconds left in the current phase, rounded to a tenth.
    pub time_left: f64,
    /// The viewer's own submitted answer, if any.
    pub my_answer: Option<AnswerKey>,
    pub answered_count: u64,
    pub total_players: u64,
    pub players: Vec<PlayerEntry>,
}

/// One player's result, shown during the reveal.
#[derive(Debug, Clone, Serialize)]
pub struct RevealEntry {
    pub player: String,
    pub answer: AnswerKey,
    pub is_correct: bool,
    pub points: i32,
}

/// Poll response, tagged by phase.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoomStateBody {
    Waiting {
        players: Vec<PlayerEntry>,
    },
    Question {
        #[serde(flatten)]
        round: RoundView,
    },
    Reveal {
        #[serde(flatten)]
        round: RoundView,
        correct: AnswerKey,
        answers: Vec<RevealEntry>,
    },
    Finished {
        players: Vec<PlayerEntry>,
    },
}

impl RoomStateBody {
    pub fn waiting(players: Vec<PlayerEntry>) -> Self {
        Self::Waiting { players }
    }

    pub fn finished(players: Vec<PlayerEntry>) -> Self {
        Self::Finished { players }
    }
}

/// Seconds with one decimal, the resolution clients render countdowns at.
pub fn time_left_tenths(time_left: Duration) -> f64 {
    (time_left.as_seconds_f64() * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: i32, id: i64) -> PlayerEntry {
        PlayerEntry {
            name: name.to_owned(),
            score,
            id,
        }
    }

    fn round_view() -> RoundView {
        RoundView {
            question_num: 1,
            total_questions: 3,
            question: "Largest planet?".to_owned(),
            category: "space".to_owned(),
            options: OptionsBody {
                a: "Mars".to_owned(),
                b: "Jupiter".to_owned(),
                c: "Venus".to_owned(),
                d: "Saturn".to_owned(),
            },
            time_left: 12.3,
            my_answer: None,
            answered_count: 0,
            total_players: 2,
            players: vec![entry("ada", 0, 1), entry("bob", 0, 2)],
        }
    }

    #[test]
    fn waiting_body_carries_phase_and_players_only() {
        let body = RoomStateBody::waiting(vec![entry("ada", 0, 1)]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["phase"], "waiting");
        assert_eq!(json["players"][0]["name"], "ada");
        assert!(json.get("question").is_none());
    }

    #[test]
    fn question_body_flattens_the_round_view() {
        let body = RoomStateBody::Question {
            round: round_view(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["phase"], "question");
        assert_eq!(json["question_num"], 1);
        assert_eq!(json["options"]["b"], "Jupiter");
        assert_eq!(json["my_answer"], serde_json::Value::Null);
        assert!(json.get("correct").is_none());
    }

    #[test]
    fn reveal_body_adds_correct_letter_and_per_player_results() {
        let body = RoomStateBody::Reveal {
            round: round_view(),
            correct: AnswerKey::B,
            answers: vec![RevealEntry {
                player: "ada".to_owned(),
                answer: AnswerKey::B,
                is_correct: true,
                points: 820,
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["phase"], "reveal");
        assert_eq!(json["correct"], "b");
        assert_eq!(json["answers"][0]["points"], 820);
        assert_eq!(json["answers"][0]["is_correct"], true);
    }

    #[test]
    fn time_left_rounds_to_tenths() {
        assert_eq!(time_left_tenths(Duration::milliseconds(12_345)), 12.3);
        assert_eq!(time_left_tenths(Duration::milliseconds(4_280)), 4.3);
        assert_eq!(time_left_tenths(Duration::seconds(15)), 15.0);
        assert_eq!(time_left_tenths(Duration::ZERO), 0.0);
    }
}
