pub mod ai;
pub mod config;
pub mod debug;
pub mod game;
pub mod game_modes;
pub mod menu;
pub mod ui;

/// Physics ticks (and rendered frames) per second at the default settings.
pub const TICK_RATE_HZ: u64 = 60;
