//! Seams between the battle core and the host's rendering/input layer.

/// Which side of the battle an effect or display update targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Input intents consumed during action and move selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
}

/// Blocking hooks into the host's rendering and audio layer.
///
/// Every method returns only once the effect has finished on screen; the
/// controller's suspension points are exactly these calls and the wait for
/// the next [`InputEvent`].
pub trait Presentation {
    fn show_message(&mut self, text: &str);
    fn play_attack_effect(&mut self, side: Side);
    fn play_hit_effect(&mut self, side: Side);
    fn play_faint_effect(&mut self, side: Side);
    fn update_health_display(&mut self, side: Side, current_hp: u16, max_hp: u16);
}

/// No-op presentation for tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentPresentation;

impl Presentation for SilentPresentation {
    fn show_message(&mut self, _text: &str) {}
    fn play_attack_effect(&mut self, _side: Side) {}
    fn play_hit_effect(&mut self, _side: Side) {}
    fn play_faint_effect(&mut self, _side: Side) {}
    fn update_health_display(&mut self, _side: Side, _current_hp: u16, _max_hp: u16) {}
}
