//! Attack and block declaration checks plus combat damage resolution.
//!
//! Blockers are passed as one optional slot per attacker; `None` means the
//! attacker goes unblocked and may repeat without counting as a duplicate.

use crate::card::CardId;
use crate::game::cards;
use crate::game::state::Game;

impl Game {
    /// Whether the active player may attack with exactly these creatures:
    /// no duplicate ids, and every id is an untapped, sickness-free creature
    /// on the active player's table. The empty attack is valid.
    pub fn is_attack_valid(&self, attackers: &[CardId]) -> bool {
        if cards::has_duplicate_ids(attackers) {
            return false;
        }
        let table = self.current_player().creatures_on_table();
        attackers.iter().all(|&id| {
            table
                .iter()
                .any(|creature| {
                    creature.base.id == id
                        && !creature.base.tapped
                        && !creature.has_summoning_sickness()
                })
        })
    }

    /// Tap every attacker. Declaring the attack is the only effect; damage
    /// comes later in [`Game::perform_block_and_damage`].
    ///
    /// The list must have passed [`Game::is_attack_valid`]; ids that do not
    /// resolve on the active player's table are skipped.
    pub fn perform_attack(&mut self, attackers: &[CardId]) {
        for &id in attackers {
            if let Some(card) = self.current_player_mut().card_mut(id) {
                card.tap();
            }
        }
    }

    /// Whether the defending player may block this attack with these slots:
    /// one slot per attacker, the attack itself valid, no present blocker
    /// repeated, every present blocker an untapped creature on the
    /// defender's table. An empty slot is always legal; summoning-sick
    /// creatures may block.
    pub fn is_block_valid(&self, attackers: &[CardId], blockers: &[Option<CardId>]) -> bool {
        if attackers.len() != blockers.len() {
            return false;
        }
        if !self.is_attack_valid(attackers) {
            return false;
        }
        if cards::has_duplicate_assignments(blockers) {
            return false;
        }
        let table = self.second_player().creatures_on_table();
        blockers.iter().flatten().all(|&id| {
            table
                .iter()
                .any(|creature| creature.base.id == id && !creature.base.tapped)
        })
    }

    /// Resolve combat damage index by index.
    ///
    /// Per pairing, in strict priority order:
    /// 1. unblocked: the defender loses life equal to the attacker's power
    ///    (a zero-power attacker deals zero damage);
    /// 2. attacker power >= blocker toughness, power nonzero: the blocker is
    ///    destroyed and the pairing is done — the blocker's own lethal check
    ///    never runs, so a would-be mutual kill destroys only the blocker;
    /// 3. blocker power >= attacker toughness, power nonzero: the attacker
    ///    is destroyed;
    /// 4. otherwise both survive.
    ///
    /// Both lists must have passed [`Game::is_block_valid`]; pairings whose
    /// ids no longer resolve are skipped. Destroyed creatures leave their
    /// owner's collection immediately and must not be referenced again.
    pub fn perform_block_and_damage(&mut self, attackers: &[CardId], blockers: &[Option<CardId>]) {
        for (&attacker_id, &blocker) in attackers.iter().zip(blockers) {
            let (attacker_power, attacker_toughness) =
                match self.current_player().creature(attacker_id) {
                    Some(creature) => (creature.power, creature.toughness),
                    None => continue,
                };

            let blocker_id = match blocker {
                Some(id) => id,
                None => {
                    self.second_player_mut().subtract_lives(attacker_power);
                    continue;
                }
            };

            let (blocker_power, blocker_toughness) =
                match self.second_player().creature(blocker_id) {
                    Some(creature) => (creature.power, creature.toughness),
                    None => continue,
                };

            if attacker_power >= blocker_toughness && attacker_power != 0 {
                self.second_player_mut().destroy_creature(blocker_id);
            } else if blocker_power >= attacker_toughness && blocker_power != 0 {
                self.current_player_mut().destroy_creature(attacker_id);
            }
        }
    }
}
