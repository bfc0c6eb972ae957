//! Wire types returned by the JSON API.

pub mod room_state;

pub use room_state::{OptionsBody, PlayerEntry, RevealEntry, RoomStateBody, RoundView};
