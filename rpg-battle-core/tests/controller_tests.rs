use rpg_battle_core::prelude::*;

/// Presentation double that records every call for assertions.
#[derive(Default)]
struct RecordingPresentation {
    messages: Vec<String>,
    effects: Vec<String>,
}

impl Presentation for RecordingPresentation {
    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
    fn play_attack_effect(&mut self, side: Side) {
        self.effects.push(format!("attack:{side:?}"));
    }
    fn play_hit_effect(&mut self, side: Side) {
        self.effects.push(format!("hit:{side:?}"));
    }
    fn play_faint_effect(&mut self, side: Side) {
        self.effects.push(format!("faint:{side:?}"));
    }
    fn update_health_display(&mut self, side: Side, current_hp: u16, max_hp: u16) {
        self.effects
            .push(format!("hp:{side:?}:{current_hp}/{max_hp}"));
    }
}

fn make_move(name: &str, power: u16, accuracy: u8, max_pp: u8) -> MoveInstance {
    MoveInstance::new(MoveDefinition {
        name: name.to_string(),
        description: String::new(),
        power,
        accuracy,
        max_pp,
    })
}

fn make_combatant(name: &str, level: u8, max_hp: u16, attack: u16, moves: Vec<MoveInstance>) -> Combatant {
    Combatant::new(
        name,
        level,
        Stats {
            max_hp,
            attack,
            defense: 10,
        },
        moves,
    )
    .expect("valid combatant")
}

fn started(
    player: Combatant,
    enemy: Combatant,
) -> BattleController<RecordingPresentation> {
    let mut controller =
        BattleController::new(player, enemy, RecordingPresentation::default(), 99);
    controller.start();
    controller
}

fn total_pp(combatant: &Combatant) -> u32 {
    combatant
        .moves
        .iter()
        .map(|m| m.remaining_pp() as u32)
        .sum()
}

fn select_fight_and_confirm(controller: &mut BattleController<RecordingPresentation>) {
    assert_eq!(controller.phase(), BattlePhase::PlayerAction);
    controller.handle_input(InputEvent::Confirm); // Fight
    assert_eq!(controller.phase(), BattlePhase::PlayerMove);
    controller.handle_input(InputEvent::Confirm); // current move
}

#[test]
fn alternating_turns_return_to_action_selection() {
    let player = make_combatant("Hero", 5, 50, 10, vec![make_move("Tap", 20, 100, 10)]);
    let enemy = make_combatant("Slime", 5, 50, 10, vec![make_move("Bump", 20, 100, 10)]);
    let mut controller = started(player, enemy);

    controller.handle_input(InputEvent::Down); // nudge the cursor off default
    controller.handle_input(InputEvent::Up);
    select_fight_and_confirm(&mut controller);

    assert_eq!(controller.phase(), BattlePhase::PlayerAction);
    assert_eq!(controller.current_action(), 0, "cursor resets after a round");
    assert_eq!(controller.turn(), 1);
    assert!(controller.player().current_hp < controller.player().stats.max_hp);
    assert!(controller.enemy().current_hp < controller.enemy().stats.max_hp);
    assert_eq!(controller.player().moves[0].remaining_pp(), 9);
    assert_eq!(total_pp(controller.enemy()), 9);
}

#[test]
fn lethal_hit_wins_the_battle() {
    let player = make_combatant("Hero", 50, 100, 200, vec![make_move("Smite", 120, 100, 5)]);
    let enemy = make_combatant("Slime", 5, 30, 10, vec![make_move("Bump", 0, 100, 10)]);
    let mut controller = started(player, enemy);

    select_fight_and_confirm(&mut controller);

    assert_eq!(controller.outcome(), Some(BattleOutcome::PlayerWon));
    assert_eq!(controller.enemy().current_hp, 0);
    assert!(controller.enemy().is_fainted());
    let presentation = controller.presentation();
    assert!(presentation
        .effects
        .iter()
        .any(|e| e == "faint:Enemy"));
    assert!(presentation
        .messages
        .iter()
        .any(|m| m.contains("was defeated")));
    // Terminal: no further transitions.
    controller.handle_input(InputEvent::Confirm);
    assert_eq!(controller.outcome(), Some(BattleOutcome::PlayerWon));
}

#[test]
fn player_faint_loses_the_battle() {
    let player = make_combatant("Hero", 5, 30, 10, vec![make_move("Tap", 0, 100, 10)]);
    let enemy = make_combatant("Ogre", 50, 100, 200, vec![make_move("Crush", 120, 100, 5)]);
    let mut controller = started(player, enemy);

    select_fight_and_confirm(&mut controller);

    assert_eq!(controller.outcome(), Some(BattleOutcome::PlayerLost));
    assert_eq!(controller.player().current_hp, 0);
    assert!(controller
        .presentation()
        .effects
        .iter()
        .any(|e| e == "faint:Player"));
}

#[test]
fn zero_pp_move_is_rejected_until_a_usable_one_is_chosen() {
    let player = make_combatant(
        "Hero",
        5,
        50,
        10,
        vec![make_move("Once", 0, 100, 1), make_move("Spare", 0, 100, 10)],
    );
    let enemy = make_combatant("Slime", 5, 50, 10, vec![make_move("Bump", 0, 100, 10)]);
    let mut controller = started(player, enemy);

    // Round 1 drains the single PP of move 0.
    select_fight_and_confirm(&mut controller);
    assert_eq!(controller.turn(), 1);
    assert_eq!(controller.player().moves[0].remaining_pp(), 0);

    // Round 2: confirming the drained slot is rejected in place.
    controller.handle_input(InputEvent::Confirm); // Fight
    assert_eq!(controller.current_move(), 0);
    controller.handle_input(InputEvent::Confirm);
    assert_eq!(controller.phase(), BattlePhase::PlayerMove);
    assert_eq!(controller.turn(), 1, "no turn was spent");
    assert!(controller
        .presentation()
        .messages
        .iter()
        .any(|m| m.contains("no PP left")));

    // Picking the usable slot proceeds normally.
    controller.handle_input(InputEvent::Right);
    controller.handle_input(InputEvent::Confirm);
    assert_eq!(controller.turn(), 2);
    assert_eq!(controller.phase(), BattlePhase::PlayerAction);
    assert_eq!(controller.player().moves[1].remaining_pp(), 9);
}

#[test]
fn enemy_with_no_pp_passes_its_turn() {
    let player = make_combatant("Hero", 5, 50, 10, vec![make_move("Tap", 0, 100, 10)]);
    let enemy = make_combatant("Slime", 5, 50, 10, vec![make_move("Bump", 0, 100, 1)]);
    let mut controller = started(player, enemy);

    select_fight_and_confirm(&mut controller);
    assert_eq!(total_pp(controller.enemy()), 0);

    let hp_before = controller.player().current_hp;
    select_fight_and_confirm(&mut controller);
    assert_eq!(controller.phase(), BattlePhase::PlayerAction);
    assert_eq!(controller.player().current_hp, hp_before);
    assert!(controller
        .presentation()
        .messages
        .iter()
        .any(|m| m.contains("has no moves left")));
    assert!(controller
        .log()
        .lines()
        .iter()
        .any(|l| l.starts_with("|-pass|")));
}

#[test]
fn a_miss_leaves_the_defender_untouched() {
    let player = make_combatant("Hero", 50, 100, 200, vec![make_move("Flail", 120, 0, 10)]);
    let enemy = make_combatant("Slime", 5, 40, 10, vec![make_move("Bump", 0, 100, 10)]);
    let mut controller = started(player, enemy);

    select_fight_and_confirm(&mut controller);

    assert_eq!(controller.enemy().current_hp, controller.enemy().stats.max_hp);
    assert_eq!(controller.phase(), BattlePhase::PlayerAction);
    assert!(controller
        .presentation()
        .messages
        .iter()
        .any(|m| m.contains("attack missed")));
    assert!(controller.log().lines().iter().any(|l| l.starts_with("|-miss|")));
}

#[test]
fn transcript_covers_the_whole_round() {
    let player = make_combatant("Hero", 5, 50, 10, vec![make_move("Tap", 20, 100, 10)]);
    let enemy = make_combatant("Slime", 5, 50, 10, vec![make_move("Bump", 20, 100, 10)]);
    let mut controller = started(player, enemy);

    select_fight_and_confirm(&mut controller);

    let lines = controller.log().lines();
    assert!(lines.iter().any(|l| l == "|turn|1"));
    assert_eq!(lines.iter().filter(|l| l.starts_with("|move|")).count(), 2);
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("|-damage|")).count(),
        2
    );
}
