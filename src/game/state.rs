use crate::card::Card;
use crate::game::player::Player;
use thiserror::Error;

/// Which of the two seats is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSeat {
    First,
    Second,
}

impl ActiveSeat {
    pub fn other(self) -> ActiveSeat {
        match self {
            ActiveSeat::First => ActiveSeat::Second,
            ActiveSeat::Second => ActiveSeat::First,
        }
    }
}

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("expected {expected} starting lands, got {got}")]
    LandCount { expected: usize, got: usize },
    #[error("expected {expected} starting creatures, got {got}")]
    CreatureCount { expected: usize, got: usize },
    #[error("expected a starting hand of {expected} cards, got {got}")]
    HandSize { expected: usize, got: usize },
}

/// Produces a freshly-identified starting card set, called once per player
pub trait CardGenerator {
    fn starting_cards(&mut self) -> Vec<Card>;
}

/// A two-player duel: two fixed players and the active-seat pointer
#[derive(Debug, Clone)]
pub struct Game {
    first: Player,
    second: Player,
    active: ActiveSeat,
}

impl Game {
    pub const LAND_COUNT: usize = 7;
    pub const CREATURE_COUNT: usize = 5;
    pub const STARTING_HAND_SIZE: usize = Self::LAND_COUNT + Self::CREATURE_COUNT;

    /// The first player starts as the active seat
    pub fn new(first: Player, second: Player) -> Self {
        Game {
            first,
            second,
            active: ActiveSeat::First,
        }
    }

    /// Deal both players their starting hands from the generator
    pub fn init_game<G: CardGenerator>(&mut self, generator: &mut G) -> Result<(), SetupError> {
        for player in [&mut self.first, &mut self.second] {
            let cards = generator.starting_cards();
            validate_starting_set(&cards)?;
            player.init_cards(cards);
        }
        Ok(())
    }

    pub fn change_player(&mut self) {
        self.active = self.active.other();
    }

    /// Untap the active player's table, then clear summoning sickness on its
    /// creatures. Creatures summoned later this turn become sick again and
    /// stay so until this player's own next preparation.
    pub fn prepare_current_player_for_turn(&mut self) {
        let player = self.current_player_mut();
        player.untap_all_cards();
        player.prepare_all_creatures();
    }

    pub fn active_seat(&self) -> ActiveSeat {
        self.active
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        self.player_mut(self.active)
    }

    pub fn second_player(&self) -> &Player {
        self.player(self.active.other())
    }

    pub fn second_player_mut(&mut self) -> &mut Player {
        self.player_mut(self.active.other())
    }

    fn player(&self, seat: ActiveSeat) -> &Player {
        match seat {
            ActiveSeat::First => &self.first,
            ActiveSeat::Second => &self.second,
        }
    }

    fn player_mut(&mut self, seat: ActiveSeat) -> &mut Player {
        match seat {
            ActiveSeat::First => &mut self.first,
            ActiveSeat::Second => &mut self.second,
        }
    }
}

fn validate_starting_set(cards: &[Card]) -> Result<(), SetupError> {
    let lands = cards.iter().filter(|card| card.as_land().is_some()).count();
    let creatures = cards.iter().filter(|card| card.as_creature().is_some()).count();
    if lands != Game::LAND_COUNT {
        return Err(SetupError::LandCount {
            expected: Game::LAND_COUNT,
            got: lands,
        });
    }
    if creatures != Game::CREATURE_COUNT {
        return Err(SetupError::CreatureCount {
            expected: Game::CREATURE_COUNT,
            got: creatures,
        });
    }
    if cards.len() != Game::STARTING_HAND_SIZE {
        return Err(SetupError::HandSize {
            expected: Game::STARTING_HAND_SIZE,
            got: cards.len(),
        });
    }
    Ok(())
}
