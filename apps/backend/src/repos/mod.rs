//! Repository functions over the SeaORM entities.
//!
//! Reads are generic over `ConnectionTrait`; mutations take the request's
//! `DatabaseTransaction`. Everything returns `DomainError`.

pub mod player_answers;
pub mod players;
pub mod questions;
pub mod room_questions;
pub mod rooms;
