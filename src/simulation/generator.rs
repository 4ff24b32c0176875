use crate::card::{Card, CardId, CreatureCard, LandCard, LandType, ManaColor};
use crate::game::state::{CardGenerator, Game};
use crate::rng::GameRng;

use ManaColor::{Black, Blue, Green, Red, White};

/// Fixed creature templates the generator draws from
struct CreatureTemplate {
    name: &'static str,
    cost: &'static [ManaColor],
    power: u32,
    toughness: u32,
}

const CREATURE_POOL: &[CreatureTemplate] = &[
    CreatureTemplate { name: "Grizzly Bears", cost: &[Green, Green], power: 2, toughness: 2 },
    CreatureTemplate { name: "Storm Crow", cost: &[Blue], power: 1, toughness: 2 },
    CreatureTemplate { name: "Savannah Lions", cost: &[White], power: 2, toughness: 1 },
    CreatureTemplate { name: "Goblin Raider", cost: &[Red, Red], power: 2, toughness: 2 },
    CreatureTemplate { name: "Bog Imp", cost: &[Black, Black], power: 1, toughness: 1 },
    CreatureTemplate { name: "Wall of Wood", cost: &[Green], power: 0, toughness: 3 },
    CreatureTemplate { name: "Merfolk Scout", cost: &[Blue, Blue], power: 1, toughness: 1 },
    CreatureTemplate { name: "Serra Angel", cost: &[White, White, Blue], power: 4, toughness: 4 },
    CreatureTemplate { name: "Sengir Vampire", cost: &[Black, Black, Red], power: 4, toughness: 4 },
    CreatureTemplate { name: "Shivan Dragon", cost: &[Red, Red, Red], power: 5, toughness: 5 },
];

/// Deals fresh starting hands: a fixed number of random-type lands plus
/// creatures drawn from the template pool, every card with its own new id.
pub struct RandomCardGenerator {
    rng: GameRng,
    next_id: u32,
}

impl RandomCardGenerator {
    pub fn new(rng: GameRng) -> Self {
        RandomCardGenerator { rng, next_id: 0 }
    }

    fn next_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl CardGenerator for RandomCardGenerator {
    fn starting_cards(&mut self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(Game::STARTING_HAND_SIZE);
        for _ in 0..Game::LAND_COUNT {
            let land_type = LandType::ALL[self.rng.index(LandType::ALL.len())];
            let id = self.next_id();
            cards.push(Card::Land(LandCard::new(id, land_type)));
        }
        for _ in 0..Game::CREATURE_COUNT {
            let template = &CREATURE_POOL[self.rng.index(CREATURE_POOL.len())];
            let id = self.next_id();
            cards.push(Card::Creature(CreatureCard::new(
                id,
                template.name,
                template.cost.to_vec(),
                template.power,
                template.toughness,
            )));
        }
        self.rng.shuffle(&mut cards);
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_composition_matches_the_game_constants() {
        let mut generator = RandomCardGenerator::new(GameRng::new(Some(7)));
        let cards = generator.starting_cards();
        assert_eq!(cards.len(), Game::STARTING_HAND_SIZE);
        let lands = cards.iter().filter(|card| card.as_land().is_some()).count();
        let creatures = cards.iter().filter(|card| card.as_creature().is_some()).count();
        assert_eq!(lands, Game::LAND_COUNT);
        assert_eq!(creatures, Game::CREATURE_COUNT);
    }

    #[test]
    fn test_every_card_starts_in_hand_untapped() {
        let mut generator = RandomCardGenerator::new(GameRng::new(Some(11)));
        for card in generator.starting_cards() {
            assert!(!card.is_on_table());
            assert!(!card.is_tapped());
        }
    }

    #[test]
    fn test_ids_are_distinct_across_calls() {
        let mut generator = RandomCardGenerator::new(GameRng::new(Some(3)));
        let first = generator.starting_cards();
        let second = generator.starting_cards();
        let ids: HashSet<_> = first.iter().chain(second.iter()).map(|card| card.id()).collect();
        assert_eq!(ids.len(), 2 * Game::STARTING_HAND_SIZE);
    }

    #[test]
    fn test_same_seed_deals_the_same_hand() {
        let mut gen1 = RandomCardGenerator::new(GameRng::new(Some(99)));
        let mut gen2 = RandomCardGenerator::new(GameRng::new(Some(99)));
        let hand1 = gen1.starting_cards();
        let hand2 = gen2.starting_cards();
        for (a, b) in hand1.iter().zip(&hand2) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.as_land().is_some(), b.as_land().is_some());
        }
    }
}
