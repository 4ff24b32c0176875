use crate::card::{Card, CardId, CreatureCard, LandCard};
use crate::game::cards;
use crate::game::mana::ManaTally;

/// A player: a name, a life total, and one owned collection of cards.
///
/// Hand and table are not separate containers; each card carries its own
/// placement flag and every view below is computed on demand.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    life: i32,
    cards: Vec<Card>,
}

impl Player {
    pub const STARTING_LIFE: i32 = 20;

    pub fn new(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            life: Self::STARTING_LIFE,
            cards: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install the starting card set. The player takes ownership; cards are
    /// never created again during play.
    pub fn init_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn cards_in_hand(&self) -> Vec<&Card> {
        cards::in_hand(&self.cards)
    }

    pub fn cards_on_table(&self) -> Vec<&Card> {
        cards::on_table(&self.cards)
    }

    pub fn lands_on_table(&self) -> Vec<&LandCard> {
        cards::lands(&self.cards_on_table())
    }

    pub fn creatures_on_table(&self) -> Vec<&CreatureCard> {
        cards::creatures(&self.cards_on_table())
    }

    pub fn lands_in_hand(&self) -> Vec<&LandCard> {
        cards::lands(&self.cards_in_hand())
    }

    pub fn creatures_in_hand(&self) -> Vec<&CreatureCard> {
        cards::creatures(&self.cards_in_hand())
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    pub fn creature(&self, id: CardId) -> Option<&CreatureCard> {
        self.card(id).and_then(Card::as_creature)
    }

    /// Untap every card on the table
    pub fn untap_all_cards(&mut self) {
        for card in self.cards.iter_mut().filter(|card| card.is_on_table()) {
            card.untap();
        }
    }

    /// Clear summoning sickness on every creature on the table
    pub fn prepare_all_creatures(&mut self) {
        for card in self.cards.iter_mut().filter(|card| card.is_on_table()) {
            if let Some(creature) = card.as_creature_mut() {
                creature.clear_summoning_sickness();
            }
        }
    }

    /// Play a land from hand. Fails without mutating anything if the id is
    /// not a land currently in this player's hand.
    pub fn put_land_on_table(&mut self, id: CardId) -> bool {
        if !self.lands_in_hand().iter().any(|land| land.base.id == id) {
            return false;
        }
        match self.card_mut(id) {
            Some(card) => {
                card.put_on_table();
                true
            }
            None => false,
        }
    }

    /// Summon a creature from hand, paying its cost.
    ///
    /// All-or-nothing: on any failure (already on table, not in hand, not
    /// enough untapped mana) nothing is tapped and nothing moves. On success
    /// the mana is tapped, the creature enters the table and becomes
    /// summoning sick.
    pub fn put_creature_on_table(&mut self, id: CardId) -> bool {
        if self
            .creatures_on_table()
            .iter()
            .any(|creature| creature.base.id == id)
        {
            return false;
        }
        if !self
            .creatures_in_hand()
            .iter()
            .any(|creature| creature.base.id == id)
        {
            return false;
        }
        if !self.has_mana_for_creature(id) {
            return false;
        }

        self.tap_mana_for_creature(id);
        if let Some(card) = self.card_mut(id) {
            card.put_on_table();
            if let Some(creature) = card.as_creature_mut() {
                creature.set_summoning_sickness();
            }
        }
        true
    }

    /// Whether the untapped table lands cover the creature's cost, color by
    /// color. False for an id that is not one of this player's creatures.
    pub fn has_mana_for_creature(&self, id: CardId) -> bool {
        match self.creature(id) {
            Some(creature) => self.untapped_mana().can_pay(creature),
            None => false,
        }
    }

    /// Per-color count of untapped lands on the table
    pub fn untapped_mana(&self) -> ManaTally {
        let mut tally = ManaTally::new();
        for land in self.lands_on_table() {
            if !land.base.tapped {
                tally.add(land.mana_color());
            }
        }
        tally
    }

    /// Tap every untapped table land whose color appears in the creature's
    /// cost — all of them, not a minimal subset, even when fewer of that
    /// color would cover the cost.
    pub fn tap_mana_for_creature(&mut self, id: CardId) {
        let cost = match self.creature(id) {
            Some(creature) => creature.cost.clone(),
            None => return,
        };
        for card in self.cards.iter_mut().filter(|card| card.is_on_table()) {
            let color = match card.as_land() {
                Some(land) => land.mana_color(),
                None => continue,
            };
            if !card.is_tapped() && cost.contains(&color) {
                card.tap();
            }
        }
    }

    /// Remove a destroyed creature from the collection (swap-remove; the
    /// remaining order is unspecified). Non-creature ids are refused.
    pub fn destroy_creature(&mut self, id: CardId) -> Option<Card> {
        if self.creature(id).is_none() {
            return None;
        }
        cards::remove_by_id(&mut self.cards, id)
    }

    /// Life has no floor; going negative is allowed
    pub fn subtract_lives(&mut self, amount: u32) {
        self.life -= amount as i32;
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0
    }
}
