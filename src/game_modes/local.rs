use std::io;
use std::time::Instant;

use rand::thread_rng;
use ratatui::Terminal;

use crate::config::Config;
use crate::debug;
use crate::game::{self, GameState, InputAction};
use crate::ui;

use super::common::{frame_duration, limit_frame_rate};

/// Run a local 2-player game on one keyboard.
pub fn run_game_local<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    debug::log("GAME_START", "Local 2-player mode");

    let mut rng = thread_rng();
    let mut game_state = GameState::new(&config.game);
    game_state.serve(&mut rng);

    let frame = frame_duration(config.display.target_fps);

    loop {
        let now = Instant::now();

        // Handle input (both paddles)
        let actions = game::poll_input_local_2p(&config.keybindings)?;

        for action in &actions {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::Rematch => {
                    if game_state.game_over {
                        game_state.reset_game(&mut rng);
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
                InputAction::RightPaddleUp => {
                    game::physics::move_paddle_up(
                        &mut game_state.right_paddle,
                        config.game.paddle_speed,
                    );
                }
                InputAction::RightPaddleDown => {
                    game::physics::move_paddle_down(
                        &mut game_state.right_paddle,
                        game_state.field_height,
                        config.game.paddle_speed,
                    );
                }
                _ => {}
            }
        }

        let _events = game::step(&mut game_state, &mut rng);

        let overlay = if game_state.game_over {
            let winner_text = match game_state.winner {
                Some(game::Player::Left) => "LEFT WINS",
                _ => "RIGHT WINS",
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
