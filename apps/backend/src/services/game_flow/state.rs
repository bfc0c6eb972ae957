use sea_orm::DatabaseTransaction;
use time::OffsetDateTime;
use tracing::{debug, info};

use super::GameFlowService;
use crate::domain;
use crate::domain::round::RoundPhase;
use crate::domain::rules::QUESTION_TIME;
use crate::entities::players;
use crate::entities::rooms::{self, RoomStatus};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::protocol::room_state::{
    time_left_tenths, OptionsBody, PlayerEntry, RevealEntry, RoomStateBody, RoundView,
};
use crate::repos::{
    player_answers, players as players_repo, room_questions as room_questions_repo,
    rooms as rooms_repo,
};

impl GameFlowService {
    /// Derive the poll view of a room at `now`.
    ///
    /// Advancement is lazy and read-triggered: when both windows of the
    /// current question have elapsed, this call moves the room forward by
    /// exactly one question (or finishes it) before building the view. The
    /// step is a compare-and-swap on the question index, so concurrent polls
    /// crossing the same deadline advance the room once. Under sparse
    /// polling a room catches up one question per poll rather than jumping
    /// to where the clock says it should be; clients are expected to poll
    /// within each phase window.
    pub async fn room_state(
        &self,
        txn: &DatabaseTransaction,
        room_code: &str,
        session_key: &str,
        now: OffsetDateTime,
    ) -> Result<RoomStateBody, AppError> {
        let mut room = rooms_repo::require_by_code(txn, room_code).await?;
        let players = players_repo::list_ranked(txn, room.id).await?;

        match room.status {
            RoomStatus::Waiting => return Ok(RoomStateBody::waiting(ranked(&players))),
            RoomStatus::Finished => return Ok(RoomStateBody::finished(ranked(&players))),
            RoomStatus::Playing => {}
        }

        let sequence = room_questions_repo::list_with_questions(txn, room.id).await?;
        let total = sequence.len();

        let mut idx = room.current_question_index.max(0) as usize;
        if idx >= total {
            rooms_repo::finish(txn, room.id, now).await?;
            return Ok(RoomStateBody::finished(ranked(&players)));
        }

        let started_at = question_clock(&room)?;
        let mut phase = domain::phase_at(started_at, now);

        if phase == RoundPhase::Expired {
            let next = idx + 1;
            if next >= total {
                rooms_repo::finish(txn, room.id, now).await?;
                info!(room_id = room.id, code = %room.code, "Room finished");
                return Ok(RoomStateBody::finished(ranked(&players)));
            }

            match rooms_repo::advance_question(txn, room.id, idx as i32, now).await? {
                Some(updated) => {
                    debug!(
                        room_id = room.id,
                        from = idx,
                        to = next,
                        "Advanced to next question"
                    );
                    room = updated;
                    idx = next;
                    phase = RoundPhase::Question {
                        time_left: QUESTION_TIME,
                    };
                }
                None => {
                    // Lost the advancement race; pick up whatever the winner
                    // wrote instead of advancing a second time.
                    room = rooms_repo::require_by_id(txn, room.id).await?;
                    if room.status != RoomStatus::Playing {
                        return Ok(RoomStateBody::finished(ranked(&players)));
                    }
                    idx = room.current_question_index.max(0) as usize;
                    if idx >= total {
                        rooms_repo::finish(txn, room.id, now).await?;
                        return Ok(RoomStateBody::finished(ranked(&players)));
                    }
                    phase = domain::phase_at(question_clock(&room)?, now);
                }
            }
        }

        // The Expired arm is the race loser whose re-read still shows an
        // expired clock: grant the fresh window, the next poll advances.
        let (in_reveal, time_left) = match phase {
            RoundPhase::Question { time_left } => (false, time_left),
            RoundPhase::Reveal { time_left } => (true, time_left),
            RoundPhase::Expired => (false, QUESTION_TIME),
        };

        let (room_question, question) = &sequence[idx];

        let viewer = players_repo::find_by_session(txn, room.id, session_key).await?;
        let my_answer = match &viewer {
            Some(player) => player_answers::find_for(txn, player.id, room_question.id)
                .await?
                .map(|a| a.answer),
            None => None,
        };
        let answered_count = player_answers::count_for_question(txn, room_question.id).await?;

        let round = RoundView {
            question_num: (idx + 1) as u32,
            total_questions: total as u32,
            question: question.text.clone(),
            category: question.category.clone(),
            options: OptionsBody::from(question),
            time_left: time_left_tenths(time_left),
            my_answer,
            answered_count,
            total_players: players.len() as u64,
            players: ranked(&players),
        };

        if in_reveal {
            let answers = player_answers::list_with_players(txn, room_question.id)
                .await?
                .into_iter()
                .map(|(answer, player)| RevealEntry {
                    player: player.name,
                    answer: answer.answer,
                    is_correct: answer.is_correct,
                    points: answer.points,
                })
                .collect();
            Ok(RoomStateBody::Reveal {
                round,
                correct: question.correct,
                answers,
            })
        } else {
            Ok(RoomStateBody::Question { round })
        }
    }
}

fn ranked(players: &[players::Model]) -> Vec<PlayerEntry> {
    players.iter().map(PlayerEntry::from).collect()
}

fn question_clock(room: &rooms::Model) -> Result<OffsetDateTime, DomainError> {
    room.question_started_at.ok_or_else(|| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("room {} is playing without a question clock", room.id),
        )
    })
}
