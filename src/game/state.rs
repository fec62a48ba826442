use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius,
        }
    }
}

/// A paddle, positioned by the y coordinate of its vertical center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Player {
    Left,
    Right,
}

/// Per-tick view of the game handed to the AI engine.
///
/// `timestamp_ms` is the tick time in milliseconds; when absent the engine
/// falls back to wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot {
    pub ball: Ball,
    pub ai_paddle: Paddle,
    pub timestamp_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u8,
    pub right_score: u8,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub field_width: f32,
    pub field_height: f32,
    pub ball_speed: f32,
    pub max_score: u8,
}

impl GameState {
    pub fn new(game: &GameConfig) -> Self {
        let center_y = game.field_height / 2.0;

        Self {
            ball: Ball::new(game.field_width / 2.0, center_y, game.ball_radius),
            left_paddle: Paddle::new(
                game.left_paddle_x(),
                center_y,
                game.paddle_width,
                game.paddle_height,
            ),
            right_paddle: Paddle::new(
                game.right_paddle_x(),
                center_y,
                game.paddle_width,
                game.paddle_height,
            ),
            left_score: 0,
            right_score: 0,
            game_over: false,
            winner: None,
            field_width: game.field_width,
            field_height: game.field_height,
            ball_speed: game.ball_speed,
            max_score: game.max_score,
        }
    }

    /// Serve from the center: random horizontal direction, small random
    /// vertical component.
    pub fn serve<R: rand::Rng>(&mut self, rng: &mut R) {
        self.ball.x = self.field_width / 2.0;
        self.ball.y = self.field_height / 2.0;
        self.ball.vx = if rng.gen::<bool>() {
            self.ball_speed
        } else {
            -self.ball_speed
        };
        self.ball.vy = (rng.gen::<f32>() - 0.5) * self.ball_speed;
    }

    /// Reset everything for a rematch (scores, winner, ball, paddles) and
    /// serve the first ball.
    pub fn reset_game<R: rand::Rng>(&mut self, rng: &mut R) {
        self.left_score = 0;
        self.right_score = 0;
        self.game_over = false;
        self.winner = None;

        let center_y = self.field_height / 2.0;
        self.left_paddle.y = center_y;
        self.right_paddle.y = center_y;

        self.serve(rng);
    }

    /// The view of this tick the AI engine consumes.
    pub fn snapshot(&self, timestamp_ms: u64) -> GameSnapshot {
        GameSnapshot {
            ball: self.ball,
            ai_paddle: self.right_paddle,
            timestamp_ms: Some(timestamp_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_state_centered() {
        let game = GameConfig::default();
        let state = GameState::new(&game);

        assert_eq!(state.ball.x, game.field_width / 2.0);
        assert_eq!(state.left_paddle.y, game.field_height / 2.0);
        assert_eq!(state.right_paddle.x, game.field_width - game.paddle_margin);
        assert_eq!(state.left_score, 0);
        assert!(!state.game_over);
    }

    #[test]
    fn test_serve_sets_velocity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = GameState::new(&GameConfig::default());

        state.serve(&mut rng);

        assert_eq!(state.ball.vx.abs(), state.ball_speed);
        assert!(state.ball.vy.abs() <= state.ball_speed / 2.0);
        assert_eq!(state.ball.x, state.field_width / 2.0);
    }

    #[test]
    fn test_reset_game_clears_scores_and_recenters() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = GameState::new(&GameConfig::default());
        state.left_score = 3;
        state.right_score = 11;
        state.game_over = true;
        state.winner = Some(Player::Right);
        state.right_paddle.y = 1.0;

        state.reset_game(&mut rng);

        assert_eq!(state.left_score, 0);
        assert_eq!(state.right_score, 0);
        assert!(!state.game_over);
        assert!(state.winner.is_none());
        assert_eq!(state.right_paddle.y, state.field_height / 2.0);
        assert_ne!(state.ball.vx, 0.0);
    }

    #[test]
    fn test_snapshot_carries_ball_and_ai_paddle() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = GameState::new(&GameConfig::default());
        state.serve(&mut rng);

        let snapshot = state.snapshot(1234);

        assert_eq!(snapshot.ball, state.ball);
        assert_eq!(snapshot.ai_paddle, state.right_paddle);
        assert_eq!(snapshot.timestamp_ms, Some(1234));
    }
}
