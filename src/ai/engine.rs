// AI opponent engine: reaction-gated, difficulty-scaled paddle control

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use std::time::{SystemTime, UNIX_EPOCH};

use super::prediction::predict_ball_position;
use super::Difficulty;
use crate::config::{AiDifficultyConfig, AiTable, FieldGeometry};
use crate::game::{Ball, GameSnapshot};

/// Paddle centers closer to the target than this don't move, preventing
/// oscillation around the aim point.
const MOVE_DEAD_ZONE: f32 = 0.1;

/// One tick's movement decision.
///
/// `direction` is -1 (toward smaller y), 0 (hold), or 1 (toward greater y);
/// `paddle_y` is the engine's tracked paddle center after this tick and
/// `target_y` the currently aimed-at height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDecision {
    pub direction: i8,
    pub paddle_y: f32,
    pub target_y: f32,
}

/// Snapshot of the engine's internals, for logging and evaluation.
#[derive(Debug, Clone, Copy)]
pub struct AiStats {
    pub difficulty: Difficulty,
    pub config: AiDifficultyConfig,
    pub paddle_y: f32,
    pub target_y: f32,
}

/// The AI opponent for one game session.
///
/// Emulates a time-limited, imperfect human: it only notices the ball after
/// its tier's reaction delay, only re-aims while the ball approaches, and
/// aims with a tier-scaled error. One instance per AI game; never shared.
///
/// The random source is a type parameter so tests can drive the engine with
/// a seeded generator.
pub struct AiOpponent<R: Rng = ThreadRng> {
    difficulty: Difficulty,
    config: AiDifficultyConfig,
    table: AiTable,
    geometry: FieldGeometry,

    paddle_y: f32,
    target_y: f32,
    last_reaction_ms: u64,
    reaction_delay_ms: f32,

    rng: R,
}

impl AiOpponent<ThreadRng> {
    /// Create an opponent from a tier name. Unknown or empty names fall
    /// back to medium; that silent default is part of the contract.
    pub fn new(difficulty: &str, table: &AiTable, geometry: FieldGeometry) -> Self {
        Self::with_rng(
            Difficulty::parse(difficulty).unwrap_or_default(),
            table,
            geometry,
            thread_rng(),
        )
    }

    pub fn from_difficulty(
        difficulty: Difficulty,
        table: &AiTable,
        geometry: FieldGeometry,
    ) -> Self {
        Self::with_rng(difficulty, table, geometry, thread_rng())
    }
}

impl<R: Rng> AiOpponent<R> {
    /// Create an opponent with an explicit random source.
    pub fn with_rng(
        difficulty: Difficulty,
        table: &AiTable,
        geometry: FieldGeometry,
        rng: R,
    ) -> Self {
        Self {
            difficulty,
            config: table.get(difficulty),
            table: *table,
            geometry,
            paddle_y: 0.0,
            target_y: 0.0,
            last_reaction_ms: 0,
            reaction_delay_ms: 0.0,
            rng,
        }
    }

    /// Decide this tick's move from a game snapshot.
    ///
    /// While inside the reaction delay window the engine holds still and
    /// keeps its previous aim. Once free to react it re-aims only at an
    /// approaching ball, then steers the paddle toward the (imperfectly)
    /// predicted impact point.
    pub fn calculate_move(&mut self, snapshot: &GameSnapshot) -> MoveDecision {
        let ball = &snapshot.ball;
        let paddle = &snapshot.ai_paddle;
        let now = snapshot.timestamp_ms.unwrap_or_else(wall_clock_ms);

        // Still waiting on reflexes; hold position
        let since_last_reaction = now.saturating_sub(self.last_reaction_ms) as f32;
        if since_last_reaction < self.reaction_delay_ms {
            return MoveDecision {
                direction: 0,
                paddle_y: self.paddle_y,
                target_y: self.target_y,
            };
        }

        if should_react(ball) {
            self.last_reaction_ms = now;
            self.reaction_delay_ms = self.config.reaction_time * 1000.0;

            let predicted = predict_ball_position(ball, paddle.x, &self.geometry);
            self.target_y = apply_accuracy(predicted, self.config.accuracy, &mut self.rng);
        }

        let direction = calculate_direction(paddle.y, self.target_y);
        self.paddle_y = update_paddle_position(paddle.y, direction, self.config.speed, &self.geometry);

        MoveDecision {
            direction,
            paddle_y: self.paddle_y,
            target_y: self.target_y,
        }
    }

    /// Re-center for a new rally and clear the reaction bookkeeping.
    pub fn reset(&mut self) {
        self.paddle_y = self.geometry.field_height / 2.0;
        self.target_y = self.paddle_y;
        self.last_reaction_ms = 0;
        self.reaction_delay_ms = 0.0;
    }

    /// Switch tiers mid-game. Unknown tier names are ignored, keeping the
    /// active config; like the construction fallback this is deliberate.
    pub fn set_difficulty(&mut self, difficulty: &str) {
        if let Some(tier) = Difficulty::parse(difficulty) {
            self.difficulty = tier;
            self.config = self.table.get(tier);
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> &AiDifficultyConfig {
        &self.config
    }

    pub fn stats(&self) -> AiStats {
        AiStats {
            difficulty: self.difficulty,
            config: self.config,
            paddle_y: self.paddle_y,
            target_y: self.target_y,
        }
    }
}

/// The AI re-aims only while the ball approaches its side of the field.
/// A ball moving away keeps the last aim point, like a player who stops
/// tracking a receding ball.
fn should_react(ball: &Ball) -> bool {
    ball.vx > 0.0
}

/// Add the tier's aim error: uniform, centered on zero, with total spread
/// `(1 - accuracy) * 2`. Perfect accuracy leaves the target untouched.
fn apply_accuracy<R: Rng>(target_y: f32, accuracy: f32, rng: &mut R) -> f32 {
    let max_error = (1.0 - accuracy) * 2.0;
    let error = (rng.gen::<f32>() - 0.5) * max_error;
    target_y + error
}

fn calculate_direction(paddle_center: f32, target_y: f32) -> i8 {
    if (target_y - paddle_center).abs() < MOVE_DEAD_ZONE {
        return 0;
    }

    if target_y > paddle_center {
        1
    } else {
        -1
    }
}

/// Displace the paddle center by one tick of movement, kept in range.
/// min-then-max so a paddle taller than the field resolves to the top
/// bound instead of panicking.
fn update_paddle_position(
    paddle_y: f32,
    direction: i8,
    speed: f32,
    geometry: &FieldGeometry,
) -> f32 {
    if direction == 0 {
        return paddle_y;
    }

    let half_paddle = geometry.paddle_height / 2.0;
    (paddle_y + direction as f32 * speed)
        .min(geometry.field_height - half_paddle)
        .max(half_paddle)
}

fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
