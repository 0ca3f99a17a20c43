use serde_json::json;

/// Append-only battle transcript in a pipe-delimited line format.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    log: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_start(&mut self, player: &str, enemy: &str) {
        self.log.push(format!("|start|{player}|{enemy}"));
    }

    pub fn log_turn(&mut self, turn: u32) {
        self.log.push(format!("|turn|{turn}"));
    }

    pub fn log_move(&mut self, user: &str, move_name: &str, target: &str) {
        self.log.push(format!("|move|{user}|{move_name}|{target}"));
    }

    pub fn log_miss(&mut self, user: &str) {
        self.log.push(format!("|-miss|{user}"));
    }

    pub fn log_crit(&mut self, target: &str) {
        self.log.push(format!("|-crit|{target}"));
    }

    pub fn log_damage(&mut self, target: &str, hp: u16, max_hp: u16) {
        self.log.push(format!("|-damage|{target}|{hp}/{max_hp}"));
    }

    pub fn log_pass(&mut self, user: &str) {
        self.log.push(format!("|-pass|{user}"));
    }

    pub fn log_faint(&mut self, target: &str) {
        self.log.push(format!("|faint|{target}"));
    }

    pub fn log_outcome(&mut self, outcome: &str) {
        self.log.push(format!("|outcome|{outcome}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.log
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "log": self.log })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_insertion_order() {
        let mut log = BattleLog::new();
        log.log_start("Rogue", "Cave Troll");
        log.log_turn(1);
        log.log_move("Rogue", "Slash", "Cave Troll");
        log.log_damage("Cave Troll", 132, 140);
        assert_eq!(log.lines()[0], "|start|Rogue|Cave Troll");
        assert_eq!(log.lines()[3], "|-damage|Cave Troll|132/140");
    }

    #[test]
    fn json_dump_carries_all_lines() {
        let mut log = BattleLog::new();
        log.log_turn(1);
        log.log_outcome("PlayerWon");
        let value = log.to_json();
        assert_eq!(value["log"].as_array().map(|a| a.len()), Some(2));
    }
}
