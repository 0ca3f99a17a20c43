use phf::phf_map;

/// One entry in the built-in move library.
#[derive(Clone, Copy, Debug)]
pub struct MoveData {
    pub name: &'static str,
    pub description: &'static str,
    pub power: u16,
    pub accuracy: u8,
    pub pp: u8,
}

/// Built-in move library, keyed by normalized id (see [`normalize_move_name`]).
pub static MOVE_LIBRARY: phf::Map<&'static str, MoveData> = phf_map! {
    "slash" => MoveData {
        name: "Slash",
        description: "A quick cut with a blade. Reliable.",
        power: 50,
        accuracy: 100,
        pp: 25,
    },
    "headbutt" => MoveData {
        name: "Headbutt",
        description: "A reckless charge, head first.",
        power: 60,
        accuracy: 95,
        pp: 20,
    },
    "fireball" => MoveData {
        name: "Fireball",
        description: "Hurls a ball of roaring flame.",
        power: 80,
        accuracy: 90,
        pp: 10,
    },
    "iceshard" => MoveData {
        name: "Ice Shard",
        description: "Fires a splinter of razor ice.",
        power: 40,
        accuracy: 100,
        pp: 30,
    },
    "thunderjab" => MoveData {
        name: "Thunder Jab",
        description: "A crackling punch of static charge.",
        power: 65,
        accuracy: 90,
        pp: 15,
    },
    "mudtoss" => MoveData {
        name: "Mud Toss",
        description: "Flings a clod of heavy mud.",
        power: 45,
        accuracy: 100,
        pp: 25,
    },
    "focusstrike" => MoveData {
        name: "Focus Strike",
        description: "A gathered blow that rarely lands but hits hard.",
        power: 110,
        accuracy: 65,
        pp: 5,
    },
    "wildswing" => MoveData {
        name: "Wild Swing",
        description: "A broad, unsteady swing.",
        power: 90,
        accuracy: 75,
        pp: 10,
    },
};

pub fn get_move(id: &str) -> Option<&'static MoveData> {
    MOVE_LIBRARY.get(id)
}

pub fn normalize_move_name(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
