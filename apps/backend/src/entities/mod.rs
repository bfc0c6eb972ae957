pub mod player_answers;
pub mod players;
pub mod questions;
pub mod room_questions;
pub mod rooms;
