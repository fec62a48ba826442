use std::io;
use std::time::Instant;

use rand::thread_rng;
use ratatui::Terminal;

use crate::ai::{AiOpponent, Difficulty};
use crate::config::Config;
use crate::debug;
use crate::game::{self, GameState, InputAction};
use crate::ui;

use super::common::{frame_duration, limit_frame_rate};

/// Run a single-player game against the AI opponent.
///
/// The human drives the left paddle; the engine drives the right one from a
/// per-tick snapshot. Keys 1/2/3 switch the difficulty tier mid-game.
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    difficulty: Difficulty,
) -> Result<(), io::Error> {
    debug::log(
        "GAME_START",
        &format!("Single player vs AI: {}", difficulty.display_name()),
    );

    let mut rng = thread_rng();
    let mut game_state = GameState::new(&config.game);
    game_state.serve(&mut rng);

    let mut engine = AiOpponent::from_difficulty(difficulty, &config.ai, config.game.geometry());
    engine.reset();

    let frame = frame_duration(config.display.target_fps);
    let game_start = Instant::now();

    loop {
        let now = Instant::now();

        // Handle player input (left paddle only)
        let actions = game::poll_input_player_left(&config.keybindings)?;

        for action in &actions {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::Rematch => {
                    if game_state.game_over {
                        game_state.reset_game(&mut rng);
                        engine.reset();
                    }
                }
                InputAction::LeftPaddleUp => {
                    game::physics::move_paddle_up(
                        &mut game_state.left_paddle,
                        config.game.paddle_speed,
                    );
                }
                InputAction::LeftPaddleDown => {
                    game::physics::move_paddle_down(
                        &mut game_state.left_paddle,
                        game_state.field_height,
                        config.game.paddle_speed,
                    );
                }
                InputAction::SwitchDifficulty(tier) => {
                    engine.set_difficulty(tier.key());
                    debug::log(
                        "AI_DIFFICULTY",
                        &format!("Switched to {}", tier.display_name()),
                    );
                }
                _ => {} // Ignore right paddle inputs
            }
        }

        // AI turn: decide from this tick's snapshot, apply the new paddle y.
        // Tick delivery stops while the game-over screen is up.
        if !game_state.game_over {
            let timestamp_ms = game_start.elapsed().as_millis() as u64;
            let decision = engine.calculate_move(&game_state.snapshot(timestamp_ms));
            game_state.right_paddle.y = decision.paddle_y;
        }

        let events = game::step(&mut game_state, &mut rng);

        // New rally: the engine starts fresh (keep game over rendering)
        if events.goal_scored && !game_state.game_over {
            engine.reset();
        }

        let overlay = if game_state.game_over {
            let winner_text = match game_state.winner {
                Some(game::Player::Left) => "YOU WIN!",
                _ => "BOT WINS",
            };
            Some(ui::OverlayMessage::new(vec![
                winner_text.to_string(),
                "".to_string(),
                "R to Rematch  |  Q to Quit".to_string(),
            ]))
        } else {
            None
        };

        terminal.draw(|f| ui::render(f, &game_state, &config.display, overlay.as_ref()))?;

        limit_frame_rate(now, frame);
    }
}
