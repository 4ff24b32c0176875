//! Reusable helpers over card collections.
//!
//! Every function works on a plain slice and compares cards by id only.

use crate::card::{Card, CardId, CreatureCard, LandCard};

/// Cards still in hand
pub fn in_hand(cards: &[Card]) -> Vec<&Card> {
    cards.iter().filter(|card| !card.is_on_table()).collect()
}

/// Cards placed on the table
pub fn on_table(cards: &[Card]) -> Vec<&Card> {
    cards.iter().filter(|card| card.is_on_table()).collect()
}

/// Land view of an already-filtered card list
pub fn lands<'a>(cards: &[&'a Card]) -> Vec<&'a LandCard> {
    cards.iter().filter_map(|card| card.as_land()).collect()
}

/// Creature view of an already-filtered card list
pub fn creatures<'a>(cards: &[&'a Card]) -> Vec<&'a CreatureCard> {
    cards.iter().filter_map(|card| card.as_creature()).collect()
}

pub fn find_index(cards: &[Card], id: CardId) -> Option<usize> {
    cards.iter().position(|card| card.id() == id)
}

/// Remove a card by id: swap it to the end, then truncate.
/// Order of the remaining cards is unspecified.
pub fn remove_by_id(cards: &mut Vec<Card>, id: CardId) -> Option<Card> {
    find_index(cards, id).map(|index| cards.swap_remove(index))
}

/// True when the same id occurs twice in an attack list
pub fn has_duplicate_ids(ids: &[CardId]) -> bool {
    for i in 0..ids.len() {
        for j in i + 1..ids.len() {
            if ids[i] == ids[j] {
                return true;
            }
        }
    }
    false
}

/// True when the same id occurs twice among assigned slots.
/// Empty (no-blocker) slots may repeat freely.
pub fn has_duplicate_assignments(slots: &[Option<CardId>]) -> bool {
    for i in 0..slots.len() {
        for j in i + 1..slots.len() {
            if let (Some(a), Some(b)) = (slots[i], slots[j]) {
                if a == b {
                    return true;
                }
            }
        }
    }
    false
}
