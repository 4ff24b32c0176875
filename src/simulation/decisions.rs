use crate::card::CardId;
use crate::game::player::Player;

/// Scripted duel decisions, shared by the CLI driver and the tests
pub struct DecisionEngine;

impl DecisionEngine {
    /// Every creature currently able to attack: on the table, untapped,
    /// free of summoning sickness
    pub fn choose_attackers(player: &Player) -> Vec<CardId> {
        player
            .creatures_on_table()
            .iter()
            .filter(|creature| !creature.base.tapped && !creature.has_summoning_sickness())
            .map(|creature| creature.base.id)
            .collect()
    }

    /// Hand creatures in the order we try to summon them, biggest first
    pub fn summoning_order(player: &Player) -> Vec<CardId> {
        let mut creatures = player.creatures_in_hand();
        creatures.sort_by(|a, b| b.total_cost().cmp(&a.total_cost()));
        creatures.iter().map(|creature| creature.base.id).collect()
    }

    /// Greedy blocker assignment, one slot per attacker.
    ///
    /// A candidate must survive the block (attacker power below its
    /// toughness, or zero). Among survivors, prefer one that also destroys
    /// the attacker; otherwise take the first survivor; otherwise let the
    /// attacker through. Chump blocks are never assigned.
    pub fn choose_blockers(
        attacking: &Player,
        defending: &Player,
        attackers: &[CardId],
    ) -> Vec<Option<CardId>> {
        let candidates = defending.creatures_on_table();
        let mut used: Vec<CardId> = Vec::new();
        let mut blockers = Vec::with_capacity(attackers.len());

        for &attacker_id in attackers {
            let attacker = match attacking.creature(attacker_id) {
                Some(creature) => creature,
                None => {
                    blockers.push(None);
                    continue;
                }
            };

            let survivors: Vec<_> = candidates
                .iter()
                .filter(|blocker| !blocker.base.tapped && !used.contains(&blocker.base.id))
                .filter(|blocker| attacker.power < blocker.toughness || attacker.power == 0)
                .collect();

            let choice = survivors
                .iter()
                .find(|blocker| blocker.power >= attacker.toughness && blocker.power != 0)
                .or_else(|| survivors.first())
                .map(|blocker| blocker.base.id);

            if let Some(id) = choice {
                used.push(id);
            }
            blockers.push(choice);
        }
        blockers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardId, CreatureCard, ManaColor};

    fn creature(id: u32, name: &str, power: u32, toughness: u32) -> Card {
        Card::Creature(CreatureCard::new(
            CardId::new(id),
            name,
            Vec::<ManaColor>::new(),
            power,
            toughness,
        ))
    }

    fn player_with_table(name: &str, cards: Vec<Card>) -> Player {
        let mut player = Player::new(name);
        let ids: Vec<CardId> = cards.iter().map(|card| card.id()).collect();
        player.init_cards(cards);
        for id in ids {
            player.put_creature_on_table(id);
        }
        player.untap_all_cards();
        player.prepare_all_creatures();
        player
    }

    #[test]
    fn test_choose_attackers_skips_sick_and_tapped() {
        let mut player = player_with_table(
            "A",
            vec![creature(0, "Ready", 2, 2), creature(1, "Spent", 2, 2)],
        );
        player.card_mut(CardId::new(1)).expect("exists").tap();
        assert_eq!(DecisionEngine::choose_attackers(&player), vec![CardId::new(0)]);
    }

    #[test]
    fn test_summoning_order_is_biggest_first() {
        let mut player = Player::new("A");
        player.init_cards(vec![
            creature(0, "Small", 1, 1),
            creature(1, "Big", 4, 4),
            creature(2, "Mid", 2, 3),
        ]);
        assert_eq!(
            DecisionEngine::summoning_order(&player),
            vec![CardId::new(1), CardId::new(2), CardId::new(0)]
        );
    }

    #[test]
    fn test_blockers_prefer_a_safe_kill() {
        let attacking = player_with_table("A", vec![creature(0, "Raider", 2, 2)]);
        let defending = player_with_table(
            "D",
            vec![creature(10, "Wall", 0, 3), creature(11, "Guard", 2, 3)],
        );
        let blockers =
            DecisionEngine::choose_blockers(&attacking, &defending, &[CardId::new(0)]);
        assert_eq!(blockers, vec![Some(CardId::new(11))], "The kill beats the plain survivor");
    }

    #[test]
    fn test_blockers_never_chump() {
        let attacking = player_with_table("A", vec![creature(0, "Dragon", 5, 5)]);
        let defending = player_with_table("D", vec![creature(10, "Imp", 1, 1)]);
        let blockers =
            DecisionEngine::choose_blockers(&attacking, &defending, &[CardId::new(0)]);
        assert_eq!(blockers, vec![None], "A doomed block is worse than the damage");
    }

    #[test]
    fn test_each_blocker_is_assigned_once() {
        let attacking = player_with_table(
            "A",
            vec![creature(0, "One", 1, 2), creature(1, "Two", 1, 2)],
        );
        let defending = player_with_table("D", vec![creature(10, "Wall", 0, 3)]);
        let blockers = DecisionEngine::choose_blockers(
            &attacking,
            &defending,
            &[CardId::new(0), CardId::new(1)],
        );
        assert_eq!(blockers, vec![Some(CardId::new(10)), None]);
    }
}
