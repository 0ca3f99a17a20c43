use anyhow::Result;
use rpg_battle_core::prelude::*;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const TYPE_DELAY: Duration = Duration::from_millis(18);
const HP_BAR_WIDTH: usize = 20;

/// Console presentation: types messages out character by character and
/// redraws HP bars in place of animations.
pub struct ConsolePresentation {
    instant: bool,
}

impl ConsolePresentation {
    pub fn new(instant: bool) -> Self {
        Self { instant }
    }

    fn type_out(&self, text: &str) {
        if self.instant {
            println!("{text}");
            return;
        }
        let mut stdout = io::stdout();
        for ch in text.chars() {
            print!("{ch}");
            let _ = stdout.flush();
            thread::sleep(TYPE_DELAY);
        }
        println!();
    }

    fn pause(&self) {
        if !self.instant {
            thread::sleep(Duration::from_millis(350));
        }
    }
}

impl Presentation for ConsolePresentation {
    fn show_message(&mut self, text: &str) {
        self.type_out(text);
    }

    fn play_attack_effect(&mut self, side: Side) {
        println!("  {} lunges forward!", side_label(side));
        self.pause();
    }

    fn play_hit_effect(&mut self, side: Side) {
        println!("  {} takes the hit!", side_label(side));
        self.pause();
    }

    fn play_faint_effect(&mut self, side: Side) {
        println!("  {} collapses...", side_label(side));
        self.pause();
    }

    fn update_health_display(&mut self, side: Side, current_hp: u16, max_hp: u16) {
        println!("  {:<8} {}", side_label(side), hp_bar(current_hp, max_hp));
    }
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::Player => "You",
        Side::Enemy => "Foe",
    }
}

pub fn hp_bar(current_hp: u16, max_hp: u16) -> String {
    let filled = if max_hp == 0 {
        0
    } else {
        // Round up so a combatant at 1 HP still shows a tick.
        ((current_hp as usize * HP_BAR_WIDTH) + max_hp as usize - 1) / max_hp as usize
    };
    let filled = filled.min(HP_BAR_WIDTH);
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(HP_BAR_WIDTH - filled),
        current_hp,
        max_hp
    )
}

pub fn read_line() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

/// Map one console line to an input event. Unknown input yields None.
pub fn parse_input(line: &str) -> Option<InputEvent> {
    match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => Some(InputEvent::Up),
        "s" | "down" => Some(InputEvent::Down),
        "a" | "left" => Some(InputEvent::Left),
        "d" | "right" => Some(InputEvent::Right),
        "" | "f" | "enter" => Some(InputEvent::Confirm),
        "b" | "back" => Some(InputEvent::Back),
        _ => None,
    }
}

pub fn render_action_menu(current_action: usize) {
    println!();
    for (idx, label) in ["Fight", "Run"].iter().enumerate() {
        let marker = if idx == current_action { ">" } else { " " };
        println!("  {marker} {label}");
    }
    println!("  (w/s to move, enter to confirm)");
}

pub fn render_move_menu(moves: &[MoveInstance], current_move: usize) {
    println!();
    for (idx, instance) in moves.iter().enumerate() {
        let def = instance.definition();
        let marker = if idx == current_move { ">" } else { " " };
        println!(
            "  {marker} {:<14} PP {:>2}/{:<2}  PWR {:>3}  ACC {:>3}",
            def.name,
            instance.remaining_pp(),
            def.max_pp,
            def.power,
            def.accuracy
        );
    }
    if let Some(instance) = moves.get(current_move) {
        println!("    {}", instance.definition().description);
    }
    println!("  (a/d/w/s to move, enter to confirm, b to go back)");
}
