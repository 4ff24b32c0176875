use crate::card::{CreatureCard, ManaColor};

/// Per-color count of available mana, one explicit slot per color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManaTally {
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
}

impl ManaTally {
    pub fn new() -> Self {
        ManaTally {
            white: 0,
            blue: 0,
            black: 0,
            red: 0,
            green: 0,
        }
    }

    /// Count one more source of the given color
    pub fn add(&mut self, color: ManaColor) {
        match color {
            ManaColor::White => self.white += 1,
            ManaColor::Blue => self.blue += 1,
            ManaColor::Black => self.black += 1,
            ManaColor::Red => self.red += 1,
            ManaColor::Green => self.green += 1,
        }
    }

    pub fn count(&self, color: ManaColor) -> u32 {
        match color {
            ManaColor::White => self.white,
            ManaColor::Blue => self.blue,
            ManaColor::Black => self.black,
            ManaColor::Red => self.red,
            ManaColor::Green => self.green,
        }
    }

    /// Check whether the tally covers a creature's colored cost.
    /// Extra uncommitted mana is ignored; there is no generic cost.
    pub fn can_pay(&self, creature: &CreatureCard) -> bool {
        ManaColor::ALL
            .iter()
            .all(|&color| creature.cost_of(color) <= self.count(color))
    }
}

impl Default for ManaTally {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;

    #[test]
    fn test_new_tally_is_empty() {
        let tally = ManaTally::new();
        for color in ManaColor::ALL {
            assert_eq!(tally.count(color), 0);
        }
    }

    #[test]
    fn test_add_and_count() {
        let mut tally = ManaTally::new();
        tally.add(ManaColor::Green);
        tally.add(ManaColor::Green);
        tally.add(ManaColor::Red);
        assert_eq!(tally.count(ManaColor::Green), 2);
        assert_eq!(tally.count(ManaColor::Red), 1);
        assert_eq!(tally.count(ManaColor::Blue), 0);
    }

    #[test]
    fn test_can_pay_exact_cost() {
        let creature = CreatureCard::new(
            CardId::new(1),
            "Test",
            vec![ManaColor::Green, ManaColor::Green],
            2,
            2,
        );
        let mut tally = ManaTally::new();
        tally.add(ManaColor::Green);
        assert!(!tally.can_pay(&creature));
        tally.add(ManaColor::Green);
        assert!(tally.can_pay(&creature));
    }

    #[test]
    fn test_can_pay_ignores_extra_mana() {
        let creature = CreatureCard::new(CardId::new(1), "Test", vec![ManaColor::Blue], 1, 1);
        let mut tally = ManaTally::new();
        tally.add(ManaColor::Blue);
        tally.add(ManaColor::Red);
        tally.add(ManaColor::White);
        assert!(tally.can_pay(&creature));
    }

    #[test]
    fn test_free_creature_is_always_payable() {
        let creature = CreatureCard::new(CardId::new(1), "Test", vec![], 1, 1);
        assert!(ManaTally::new().can_pay(&creature));
    }
}
