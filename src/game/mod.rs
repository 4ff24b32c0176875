pub mod cards;
pub mod combat;
pub mod mana;
pub mod player;
pub mod state;

pub use mana::ManaTally;
pub use player::Player;
pub use state::{ActiveSeat, CardGenerator, Game, SetupError};
