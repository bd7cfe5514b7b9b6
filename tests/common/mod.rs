//! Common test utilities shared across integration tests.

use detective_quest::console::Theme;
use detective_quest::game::GameOutcome;
use detective_quest::{Game, GameConfig};
use std::io::Cursor;

/// A finished scripted playthrough.
pub struct Playthrough {
    pub game: Game,
    pub outcome: GameOutcome,
    pub transcript: String,
}

/// Play the stock mansion feeding `script` as the player's input.
pub fn play(script: &str) -> Playthrough {
    play_with(GameConfig::default(), script)
}

pub fn play_with(config: GameConfig, script: &str) -> Playthrough {
    let mut game = Game::new(config).expect("stock mansion builds");
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let outcome = game
        .run(&mut input, &mut output, &Theme::plain())
        .expect("scripted session runs");
    Playthrough {
        game,
        outcome,
        transcript: String::from_utf8(output).expect("transcript is utf-8"),
    }
}
