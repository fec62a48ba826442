// Paddlebot configuration types
// All settings with sensible defaults for a 10 x 6 field

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub keybindings: KeyBindings,
    pub game: GameConfig,
    pub ai: AiTable,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybindings: KeyBindings::default(),
            game: GameConfig::default(),
            ai: AiTable::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle controls (single-player vs AI)
    pub player_paddle_up: String,
    pub player_paddle_down: String,

    // Left paddle controls (local 2-player mode - left player)
    pub left_paddle_up: String,
    pub left_paddle_down: String,

    // Right paddle controls (local 2-player mode - right player)
    pub right_paddle_up: String,
    pub right_paddle_down: String,

    // Game controls
    pub quit: String,
    pub rematch: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_paddle_up: "W".to_string(),
            player_paddle_down: "S".to_string(),
            left_paddle_up: "W".to_string(),
            left_paddle_down: "S".to_string(),
            right_paddle_up: "Up".to_string(),
            right_paddle_down: "Down".to_string(),
            quit: "Q".to_string(),
            rematch: "R".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

/// Field dimensions and game tuning, in field units.
///
/// Velocities are expressed per tick; the game loop runs one physics tick
/// per rendered frame.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,

    // Paddle geometry; paddle y is the vertical center of the paddle
    pub paddle_height: f32,
    pub paddle_width: f32,

    // Distance from the field edge to a paddle's center x
    pub paddle_margin: f32,

    pub ball_radius: f32,

    // Serve speed of the ball, units per tick
    pub ball_speed: f32,

    // Human paddle displacement per input tap
    pub paddle_speed: f32,

    // Score required to win
    pub max_score: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 10.0,
            field_height: 6.0,
            paddle_height: 1.0,
            paddle_width: 0.2,
            paddle_margin: 1.0,
            ball_radius: 0.15,
            ball_speed: 0.02,
            paddle_speed: 0.1,
            max_score: 11,
        }
    }
}

impl GameConfig {
    /// The subset of the field the AI engine needs to reason about.
    pub fn geometry(&self) -> FieldGeometry {
        FieldGeometry {
            field_height: self.field_height,
            paddle_height: self.paddle_height,
            ball_radius: self.ball_radius,
        }
    }

    /// Center x of the left paddle.
    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Center x of the right (AI) paddle.
    pub fn right_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_margin
    }
}

/// Field geometry handed to the AI engine at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGeometry {
    pub field_height: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
}

/// Tuning constants for one AI difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AiDifficultyConfig {
    // Seconds the AI waits before reacting to an approaching ball
    pub reaction_time: f32,

    // 0.0 = wild aim, 1.0 = perfect prediction
    pub accuracy: f32,

    // Paddle displacement per tick
    pub speed: f32,
}

/// Per-difficulty AI tuning table, immutable after load.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct AiTable {
    pub easy: AiDifficultyConfig,
    pub medium: AiDifficultyConfig,
    pub hard: AiDifficultyConfig,
}

impl AiTable {
    /// Tuning constants for the given tier.
    pub fn get(&self, difficulty: crate::ai::Difficulty) -> AiDifficultyConfig {
        use crate::ai::Difficulty;
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for AiTable {
    fn default() -> Self {
        Self {
            easy: AiDifficultyConfig {
                reaction_time: 0.3,
                accuracy: 0.6,
                speed: 0.06,
            },
            medium: AiDifficultyConfig {
                reaction_time: 0.15,
                accuracy: 0.8,
                speed: 0.08,
            },
            hard: AiDifficultyConfig {
                reaction_time: 0.05,
                accuracy: 0.95,
                speed: 0.1,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second; one physics tick runs per frame
    pub target_fps: u64,

    // Colors as RGB values 0-255
    pub score_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            score_color: [255, 255, 255],
            paddle_color: [255, 255, 255],
            ball_color: [255, 255, 255],
            center_line_color: [100, 100, 100],
        }
    }
}
