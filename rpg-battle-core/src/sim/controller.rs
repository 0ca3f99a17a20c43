//! Turn state machine orchestrating action selection, move execution and
//! end-of-battle detection.
//!
//! The controller is host-driven: the owning loop calls [`BattleController::start`]
//! once, then forwards [`InputEvent`]s via [`BattleController::handle_input`].
//! Both turns of a round run to completion inside a single `Confirm` on a
//! usable move; the only suspension points are the blocking
//! [`Presentation`] calls.

use crate::battle_log::BattleLog;
use crate::presentation::{InputEvent, Presentation, Side};
use crate::sim::combatant::Combatant;
use crate::sim::damage::resolve;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Phases of the turn state machine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BattlePhase {
    Start,
    PlayerAction,
    PlayerMove,
    Busy,
    BattleOver(BattleOutcome),
}

/// Terminal outcome of a battle session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BattleOutcome {
    PlayerWon,
    PlayerLost,
    Fled,
}

const ACTION_FIGHT: usize = 0;
const ACTION_RUN: usize = 1;
const ACTION_COUNT: usize = 2;

/// One battle session: two combatants, the current phase and menu cursors.
pub struct BattleController<P: Presentation> {
    player: Combatant,
    enemy: Combatant,
    presentation: P,
    phase: BattlePhase,
    current_action: usize,
    current_move: usize,
    turn: u32,
    rng: SmallRng,
    log: BattleLog,
}

impl<P: Presentation> BattleController<P> {
    pub fn new(player: Combatant, enemy: Combatant, presentation: P, seed: u64) -> Self {
        Self {
            player,
            enemy,
            presentation,
            phase: BattlePhase::Start,
            current_action: 0,
            current_move: 0,
            turn: 0,
            rng: SmallRng::seed_from_u64(seed),
            log: BattleLog::new(),
        }
    }

    /// One-shot setup: intro message, initial HP displays, then action
    /// selection. Calling it again after the first time is a no-op.
    pub fn start(&mut self) {
        if self.phase != BattlePhase::Start {
            return;
        }
        self.log.log_start(&self.player.name, &self.enemy.name);
        self.presentation
            .show_message(&format!("A wild {} appeared!", self.enemy.name));
        self.presentation.update_health_display(
            Side::Player,
            self.player.current_hp,
            self.player.stats.max_hp,
        );
        self.presentation.update_health_display(
            Side::Enemy,
            self.enemy.current_hp,
            self.enemy.stats.max_hp,
        );
        self.enter_player_action();
    }

    /// Feed one input event. Events arriving outside an awaiting-input phase
    /// are ignored.
    pub fn handle_input(&mut self, event: InputEvent) {
        match self.phase {
            BattlePhase::PlayerAction => self.handle_action_selection(event),
            BattlePhase::PlayerMove => self.handle_move_selection(event),
            BattlePhase::Start | BattlePhase::Busy | BattlePhase::BattleOver(_) => {}
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::BattleOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Cursor over {Fight, Run} while in `PlayerAction`.
    pub fn current_action(&self) -> usize {
        self.current_action
    }

    /// Cursor over the move grid while in `PlayerMove`.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    fn enter_player_action(&mut self) {
        self.phase = BattlePhase::PlayerAction;
        self.current_action = 0;
        self.presentation.show_message("Choose an action");
    }

    fn handle_action_selection(&mut self, event: InputEvent) {
        match event {
            InputEvent::Down => {
                if self.current_action + 1 < ACTION_COUNT {
                    self.current_action += 1;
                }
            }
            InputEvent::Up => {
                if self.current_action > 0 {
                    self.current_action -= 1;
                }
            }
            InputEvent::Confirm => {
                if self.current_action == ACTION_FIGHT {
                    self.phase = BattlePhase::PlayerMove;
                } else if self.current_action == ACTION_RUN {
                    self.presentation.show_message("Got away safely!");
                    self.finish(BattleOutcome::Fled);
                }
            }
            InputEvent::Left | InputEvent::Right | InputEvent::Back => {}
        }
    }

    fn handle_move_selection(&mut self, event: InputEvent) {
        // 2-column grid: Left/Right step one slot, Up/Down step one row.
        let count = self.player.moves.len();
        match event {
            InputEvent::Right => {
                if self.current_move + 1 < count {
                    self.current_move += 1;
                }
            }
            InputEvent::Left => {
                if self.current_move > 0 {
                    self.current_move -= 1;
                }
            }
            InputEvent::Down => {
                if self.current_move + 2 < count {
                    self.current_move += 2;
                }
            }
            InputEvent::Up => {
                if self.current_move >= 2 {
                    self.current_move -= 2;
                }
            }
            InputEvent::Back => self.enter_player_action(),
            InputEvent::Confirm => {
                if self.player.moves[self.current_move].has_pp() {
                    self.run_turn_cycle();
                } else {
                    self.presentation
                        .show_message("There's no PP left for this move!");
                }
            }
        }
    }

    /// Player turn, then enemy turn, uninterruptible by input.
    fn run_turn_cycle(&mut self) {
        self.phase = BattlePhase::Busy;
        self.turn += 1;
        self.log.log_turn(self.turn);
        if self.execute_move(Side::Player, self.current_move) {
            return;
        }
        if self.perform_enemy_turn() {
            return;
        }
        self.enter_player_action();
    }

    fn perform_enemy_turn(&mut self) -> bool {
        let usable = self.enemy.usable_move_indices();
        let Some(&idx) = usable.choose(&mut self.rng) else {
            self.log.log_pass(&self.enemy.name);
            let message = format!("{} has no moves left!", self.enemy.name);
            self.presentation.show_message(&message);
            return false;
        };
        self.execute_move(Side::Enemy, idx)
    }

    /// Deduct PP, resolve the move against the opposing side and drive the
    /// presentation sequence. Returns true when the battle ended.
    fn execute_move(&mut self, attacker_side: Side, move_idx: usize) -> bool {
        let defender_side = attacker_side.opponent();
        let (attacker_name, move_def) = {
            let attacker = match attacker_side {
                Side::Player => &mut self.player,
                Side::Enemy => &mut self.enemy,
            };
            if attacker.moves[move_idx].try_use().is_err() {
                // Guarded at selection; an empty slot here means the caller
                // skipped the PP check, so treat it as a no-op turn.
                return false;
            }
            (
                attacker.name.clone(),
                attacker.moves[move_idx].definition().clone(),
            )
        };
        let defender_name = match defender_side {
            Side::Player => self.player.name.clone(),
            Side::Enemy => self.enemy.name.clone(),
        };

        self.log.log_move(&attacker_name, &move_def.name, &defender_name);
        self.presentation
            .show_message(&format!("{} used {}!", attacker_name, move_def.name));
        self.presentation.play_attack_effect(attacker_side);

        let outcome = match attacker_side {
            Side::Player => resolve(&move_def, &self.player, &mut self.enemy, &mut self.rng),
            Side::Enemy => resolve(&move_def, &self.enemy, &mut self.player, &mut self.rng),
        };

        if outcome.missed {
            self.log.log_miss(&attacker_name);
            self.presentation
                .show_message(&format!("{}'s attack missed!", attacker_name));
            return false;
        }

        self.presentation.play_hit_effect(defender_side);
        let (hp, max_hp) = match defender_side {
            Side::Player => (self.player.current_hp, self.player.stats.max_hp),
            Side::Enemy => (self.enemy.current_hp, self.enemy.stats.max_hp),
        };
        self.log.log_damage(&defender_name, hp, max_hp);
        self.presentation
            .update_health_display(defender_side, hp, max_hp);
        if outcome.critical {
            self.log.log_crit(&defender_name);
            self.presentation.show_message("A critical hit!");
        }

        if outcome.target_fainted {
            self.log.log_faint(&defender_name);
            self.presentation.play_faint_effect(defender_side);
            match defender_side {
                Side::Enemy => {
                    self.presentation
                        .show_message(&format!("{} was defeated!", defender_name));
                    self.finish(BattleOutcome::PlayerWon);
                }
                Side::Player => {
                    self.presentation
                        .show_message(&format!("{} fell. The battle is lost...", defender_name));
                    self.finish(BattleOutcome::PlayerLost);
                }
            }
            return true;
        }
        false
    }

    fn finish(&mut self, outcome: BattleOutcome) {
        self.log.log_outcome(match outcome {
            BattleOutcome::PlayerWon => "PlayerWon",
            BattleOutcome::PlayerLost => "PlayerLost",
            BattleOutcome::Fled => "Fled",
        });
        self.phase = BattlePhase::BattleOver(outcome);
    }
}
