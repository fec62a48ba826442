use super::state::{Ball, GameState, Paddle, Player};

/// Physics events reported by one tick, used by game modes to reset AI
/// state on new rallies.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhysicsEvents {
    pub paddle_collision: bool,
    pub wall_collision: bool,
    pub goal_scored: bool,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.paddle_collision || self.wall_collision || self.goal_scored
    }
}

/// Advance the game by one tick. Velocities are per tick, so no delta time
/// is involved.
pub fn step<R: rand::Rng>(state: &mut GameState, rng: &mut R) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    if state.game_over {
        return events;
    }

    state.ball.x += state.ball.vx;
    state.ball.y += state.ball.vy;

    // Wall collisions (top and bottom), accounting for ball radius
    let radius = state.ball.radius;
    if state.ball.y - radius <= 0.0 {
        state.ball.y = radius;
        state.ball.vy = state.ball.vy.abs();
        events.wall_collision = true;
    } else if state.ball.y + radius >= state.field_height {
        state.ball.y = state.field_height - radius;
        state.ball.vy = -state.ball.vy.abs();
        events.wall_collision = true;
    }

    if check_paddle_collisions(state) {
        events.paddle_collision = true;
    }

    // Goals: the ball is out once its edge crosses the field boundary
    if state.ball.x - radius <= 0.0 {
        score_point(state, Player::Right, rng);
        events.goal_scored = true;
    } else if state.ball.x + radius >= state.field_width {
        score_point(state, Player::Left, rng);
        events.goal_scored = true;
    }

    events
}

fn score_point<R: rand::Rng>(state: &mut GameState, scorer: Player, rng: &mut R) {
    match scorer {
        Player::Left => state.left_score += 1,
        Player::Right => state.right_score += 1,
    }

    let score = match scorer {
        Player::Left => state.left_score,
        Player::Right => state.right_score,
    };

    if score >= state.max_score {
        state.game_over = true;
        state.winner = Some(scorer);
        state.ball.vx = 0.0;
        state.ball.vy = 0.0;
    } else {
        state.serve(rng);
    }
}

fn check_paddle_collisions(state: &mut GameState) -> bool {
    let ball = state.ball;

    // Left paddle: only catch a ball moving left
    if ball.vx < 0.0 && overlaps(&ball, &state.left_paddle) {
        state.ball.vx = ball.vx.abs();
        state.ball.x = state.left_paddle.x + state.left_paddle.width / 2.0 + ball.radius;
        return true;
    }

    // Right paddle: only catch a ball moving right
    if ball.vx > 0.0 && overlaps(&ball, &state.right_paddle) {
        state.ball.vx = -ball.vx.abs();
        state.ball.x = state.right_paddle.x - state.right_paddle.width / 2.0 - ball.radius;
        return true;
    }

    false
}

fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x + ball.radius >= paddle.x - paddle.width / 2.0
        && ball.x - ball.radius <= paddle.x + paddle.width / 2.0
        && ball.y + ball.radius >= paddle.top()
        && ball.y - ball.radius <= paddle.bottom()
}

/// Move a paddle up by `distance`, keeping its center in range.
pub fn move_paddle_up(paddle: &mut Paddle, distance: f32) {
    paddle.y = (paddle.y - distance).max(paddle.height / 2.0);
}

/// Move a paddle down by `distance`, keeping its center in range.
pub fn move_paddle_down(paddle: &mut Paddle, field_height: f32, distance: f32) {
    paddle.y = (paddle.y + distance).min(field_height - paddle.height / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_with_ball(x: f32, y: f32, vx: f32, vy: f32) -> GameState {
        let mut state = GameState::new(&GameConfig::default());
        state.ball.x = x;
        state.ball.y = y;
        state.ball.vx = vx;
        state.ball.vy = vy;
        state
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_ball(5.0, 0.16, 0.0, -0.05);

        let events = step(&mut state, &mut rng);

        assert!(events.wall_collision);
        assert_eq!(state.ball.y, state.ball.radius);
        assert!(state.ball.vy > 0.0);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_ball(5.0, 5.84, 0.0, 0.05);

        let events = step(&mut state, &mut rng);

        assert!(events.wall_collision);
        assert_eq!(state.ball.y, state.field_height - state.ball.radius);
        assert!(state.ball.vy < 0.0);
    }

    #[test]
    fn test_right_paddle_returns_ball() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_ball(8.8, 3.0, 0.05, 0.0);
        state.right_paddle.y = 3.0;

        let events = step(&mut state, &mut rng);

        assert!(events.paddle_collision);
        assert!(state.ball.vx < 0.0);
        assert!(state.ball.x < state.right_paddle.x);
    }

    #[test]
    fn test_missed_ball_scores_and_reserves() {
        let mut rng = StdRng::seed_from_u64(1);
        // Ball about to cross the right edge, far from the paddle
        let mut state = state_with_ball(9.9, 1.0, 0.1, 0.0);
        state.right_paddle.y = 5.0;

        let events = step(&mut state, &mut rng);

        assert!(events.goal_scored);
        assert_eq!(state.left_score, 1);
        assert!(!state.game_over);
        // Re-served from center
        assert_eq!(state.ball.x, state.field_width / 2.0);
        assert_ne!(state.ball.vx, 0.0);
    }

    #[test]
    fn test_final_point_ends_game() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_ball(0.1, 1.0, -0.1, 0.0);
        state.right_score = state.max_score - 1;
        state.left_paddle.y = 5.0;

        let events = step(&mut state, &mut rng);

        assert!(events.goal_scored);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Player::Right));
        assert_eq!(state.ball.vx, 0.0);
    }

    #[test]
    fn test_game_over_freezes_physics() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = state_with_ball(5.0, 3.0, 0.1, 0.1);
        state.game_over = true;
        let before = state.ball;

        let events = step(&mut state, &mut rng);

        assert!(!events.any());
        assert_eq!(state.ball, before);
    }

    #[test]
    fn test_paddle_movement_clamped() {
        let game = GameConfig::default();
        let mut paddle = Paddle::new(1.0, 3.0, game.paddle_width, game.paddle_height);

        for _ in 0..100 {
            move_paddle_up(&mut paddle, game.paddle_speed);
        }
        assert_eq!(paddle.y, game.paddle_height / 2.0);

        for _ in 0..100 {
            move_paddle_down(&mut paddle, game.field_height, game.paddle_speed);
        }
        assert_eq!(paddle.y, game.field_height - game.paddle_height / 2.0);
    }
}
