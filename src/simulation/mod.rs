pub mod decisions;
pub mod engine;
pub mod generator;

pub use engine::{run_duel, DuelResult};
pub use generator::RandomCardGenerator;
