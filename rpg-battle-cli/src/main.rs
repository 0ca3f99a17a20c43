mod ui;

use anyhow::{anyhow, Context, Result};
use rand::Rng;
use rpg_battle_core::data::moves::{get_move, normalize_move_name, MOVE_LIBRARY};
use rpg_battle_core::prelude::*;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_PLAYER: &str = "rogue";
const DEFAULT_ENEMY: &str = "cave troll";

/// Optional battle.json in the working directory, overridden by flags.
#[derive(Debug, Default, Deserialize)]
struct BattleConfig {
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    enemy: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    content: Option<String>,
}

struct BattleOptions {
    content: Option<String>,
    player: String,
    enemy: String,
    seed: u64,
    log_json: Option<String>,
    fast: bool,
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1).peekable();
    match args.peek().map(|s| s.as_str()) {
        Some("check-move") => {
            args.next();
            let name = args
                .next()
                .ok_or_else(|| anyhow!("Usage: rpg-battle-cli check-move <move>"))?;
            check_move(&name)
        }
        Some("list-moves") => list_moves(),
        Some("list-characters") => list_characters(),
        _ => {
            let options = parse_battle_options(args)?;
            run_battle(&options)
        }
    }
}

fn parse_battle_options(mut args: impl Iterator<Item = String>) -> Result<BattleOptions> {
    let config = load_config()?;
    let mut options = BattleOptions {
        content: config.content,
        player: config.player.unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
        enemy: config.enemy.unwrap_or_else(|| DEFAULT_ENEMY.to_string()),
        seed: config.seed.unwrap_or_else(|| rand::thread_rng().gen()),
        log_json: None,
        fast: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--content" => {
                options.content = Some(
                    args.next()
                        .ok_or_else(|| anyhow!("--content needs a file path"))?,
                )
            }
            "--player" => {
                options.player = args
                    .next()
                    .ok_or_else(|| anyhow!("--player needs a character name"))?
            }
            "--enemy" => {
                options.enemy = args
                    .next()
                    .ok_or_else(|| anyhow!("--enemy needs a character name"))?
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| anyhow!("--seed needs a value"))?;
                options.seed = value
                    .parse()
                    .with_context(|| format!("invalid seed '{value}'"))?;
            }
            "--log-json" => {
                options.log_json = Some(
                    args.next()
                        .ok_or_else(|| anyhow!("--log-json needs a file path"))?,
                )
            }
            "--fast" => options.fast = true,
            other => return Err(anyhow!("Unknown arg '{}'", other)),
        }
    }
    Ok(options)
}

fn load_config() -> Result<BattleConfig> {
    let path = Path::new("battle.json");
    if !path.exists() {
        return Ok(BattleConfig::default());
    }
    let text = fs::read_to_string(path).context("failed to read battle.json")?;
    serde_json::from_str(&text).map_err(|e| anyhow!("failed to parse battle.json: {}", e))
}

fn run_battle(options: &BattleOptions) -> Result<()> {
    let content = match &options.content {
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
            ContentPack::from_json(&text)?
        }
        None => ContentPack::builtin().clone(),
    };

    let mut round = 0u64;
    loop {
        let player = Combatant::from_template(content.character(&options.player)?, &content)?;
        let enemy = Combatant::from_template(content.character(&options.enemy)?, &content)?;
        let presentation = ui::ConsolePresentation::new(options.fast);
        let mut controller =
            BattleController::new(player, enemy, presentation, options.seed.wrapping_add(round));
        controller.start();

        while !controller.is_over() {
            match controller.phase() {
                BattlePhase::PlayerAction => ui::render_action_menu(controller.current_action()),
                BattlePhase::PlayerMove => {
                    ui::render_move_menu(&controller.player().moves, controller.current_move())
                }
                _ => {}
            }
            let line = ui::read_line()?;
            if let Some(event) = ui::parse_input(&line) {
                controller.handle_input(event);
            }
        }

        if let Some(path) = &options.log_json {
            let text = serde_json::to_string_pretty(&controller.log().to_json())?;
            fs::write(path, text + "\n").with_context(|| format!("failed to write {path}"))?;
        }

        round += 1;
        println!("\nPress Enter to battle again, or q to quit.");
        let line = ui::read_line()?;
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }
    }
}

fn check_move(name: &str) -> Result<()> {
    let normalized = normalize_move_name(name);
    let data =
        get_move(normalized.as_str()).ok_or_else(|| anyhow!("Move '{}' not found", name))?;
    println!(
        "Found move: {} (power: {}, accuracy: {}, pp: {})",
        data.name, data.power, data.accuracy, data.pp
    );
    println!("  {}", data.description);
    Ok(())
}

fn list_characters() -> Result<()> {
    let content = ContentPack::builtin();
    let mut names: Vec<_> = content.character_names().collect();
    names.sort_unstable();
    for name in names {
        let template = content.character(name)?;
        println!(
            "{:<12} Lv {:<3} HP {:<4} ATK {:<4} DEF {:<4} moves: {}",
            template.name,
            template.level,
            template.max_hp,
            template.attack,
            template.defense,
            template.moves.join(", ")
        );
    }
    Ok(())
}

fn list_moves() -> Result<()> {
    let mut entries: Vec<_> = MOVE_LIBRARY.entries().collect();
    entries.sort_by_key(|(id, _)| *id);
    for (id, data) in entries {
        println!(
            "{:<14} ({:<12}) PWR {:>3}  ACC {:>3}  PP {:>2}",
            data.name, id, data.power, data.accuracy, data.pp
        );
    }
    Ok(())
}
