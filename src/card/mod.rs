pub mod types;

pub use types::{BaseCard, Card, CardId, CreatureCard, LandCard, LandType, ManaColor};
