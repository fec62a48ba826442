// Headless AI evaluation harness
//
// Plays scripted points between a perfect-tracking left paddle and the AI
// opponent, then prints a JSON summary. Useful for checking that the
// difficulty tiers actually order themselves by strength after tuning.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use paddlebot::ai::{AiOpponent, Difficulty};
use paddlebot::config;
use paddlebot::game::{self, GameState, Player};
use paddlebot::TICK_RATE_HZ;

#[derive(Debug)]
struct SimArgs {
    difficulty: Difficulty,
    points: u32,
    seed: u64,
    max_ticks: u64,
}

#[derive(Debug, Serialize)]
struct Summary {
    difficulty: &'static str,
    seed: u64,
    points: u32,
    ai_points_won: u32,
    player_points_won: u32,
    capped_rallies: u32,
    avg_rally_ticks: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args().context("invalid arguments")?;
    let config = config::load_config().context("failed to load configuration")?;

    info!(
        difficulty = args.difficulty.display_name(),
        points = args.points,
        seed = args.seed,
        "starting simulation"
    );

    let mut physics_rng = StdRng::seed_from_u64(args.seed);
    let mut state = GameState::new(&config.game);
    // Never end the match on score; points are counted here instead
    state.max_score = u8::MAX;
    state.serve(&mut physics_rng);

    let mut engine = AiOpponent::with_rng(
        args.difficulty,
        &config.ai,
        config.game.geometry(),
        StdRng::seed_from_u64(args.seed.wrapping_add(1)),
    );
    engine.reset();

    let mut ai_points_won = 0u32;
    let mut player_points_won = 0u32;
    let mut capped_rallies = 0u32;
    let mut total_rally_ticks = 0u64;
    let mut rally_ticks = 0u64;
    let mut ticks = 0u64;
    let mut points_played = 0u32;

    while points_played < args.points {
        // Left paddle: perfect tracker, limited only by paddle speed
        track_ball(&mut state, config.game.paddle_speed);

        let timestamp_ms = ticks * 1000 / TICK_RATE_HZ;
        let decision = engine.calculate_move(&state.snapshot(timestamp_ms));
        state.right_paddle.y = decision.paddle_y;

        let events = game::step(&mut state, &mut physics_rng);
        ticks += 1;
        rally_ticks += 1;

        if events.goal_scored {
            let winner = if state.left_score > 0 {
                Player::Left
            } else {
                Player::Right
            };
            match winner {
                Player::Left => player_points_won += 1,
                Player::Right => ai_points_won += 1,
            }
            state.left_score = 0;
            state.right_score = 0;

            points_played += 1;
            total_rally_ticks += rally_ticks;
            info!(
                point = points_played,
                winner = ?winner,
                rally_ticks,
                "point finished"
            );

            rally_ticks = 0;
            engine.reset();
        } else if rally_ticks >= args.max_ticks {
            // Neither side is missing; abandon the rally so the run ends
            capped_rallies += 1;
            points_played += 1;
            total_rally_ticks += rally_ticks;
            info!(point = points_played, rally_ticks, "rally capped");

            rally_ticks = 0;
            state.serve(&mut physics_rng);
            engine.reset();
        }
    }

    let stats = engine.stats();
    info!(?stats, "final engine state");

    let summary = Summary {
        difficulty: args.difficulty.key(),
        seed: args.seed,
        points: args.points,
        ai_points_won,
        player_points_won,
        capped_rallies,
        avg_rally_ticks: total_rally_ticks as f64 / args.points.max(1) as f64,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to encode summary")?
    );

    Ok(())
}

/// Step the left paddle toward the approaching ball, back to center when
/// the ball moves away.
fn track_ball(state: &mut GameState, paddle_speed: f32) {
    let target_y = if state.ball.vx < 0.0 {
        state.ball.y
    } else {
        state.field_height / 2.0
    };

    let diff = target_y - state.left_paddle.y;
    if diff.abs() <= paddle_speed {
        return;
    }

    if diff > 0.0 {
        game::physics::move_paddle_down(&mut state.left_paddle, state.field_height, paddle_speed);
    } else {
        game::physics::move_paddle_up(&mut state.left_paddle, paddle_speed);
    }
}

fn parse_args() -> Result<SimArgs> {
    let mut args = SimArgs {
        difficulty: Difficulty::default(),
        points: 20,
        seed: 42,
        max_ticks: 50_000,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--difficulty" => {
                let value = expect_value(&argv, i, "--difficulty")?;
                // Unknown names fall back to medium, same as the game
                args.difficulty = Difficulty::parse(value).unwrap_or_default();
                i += 2;
            }
            "--points" => {
                args.points = expect_value(&argv, i, "--points")?
                    .parse()
                    .context("--points expects a number")?;
                i += 2;
            }
            "--seed" => {
                args.seed = expect_value(&argv, i, "--seed")?
                    .parse()
                    .context("--seed expects a number")?;
                i += 2;
            }
            "--max-ticks" => {
                args.max_ticks = expect_value(&argv, i, "--max-ticks")?
                    .parse()
                    .context("--max-ticks expects a number")?;
                i += 2;
            }
            "--help" | "-h" => {
                println!("Usage: simulate [--difficulty easy|medium|hard] [--points N]");
                println!("                [--seed N] [--max-ticks N]");
                std::process::exit(0);
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn expect_value<'a>(argv: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    argv.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", flag))
}
