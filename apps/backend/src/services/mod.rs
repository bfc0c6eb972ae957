//! Transactional orchestration over repos and the domain layer.

pub mod game_flow;
pub mod rooms;
