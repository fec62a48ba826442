use std::io;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use paddlebot::config::{self, Config};
use paddlebot::menu::{self, AppState, GameMode, MenuAction, MenuState};
use paddlebot::{debug, game_modes};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let debug_enabled = parse_args(&args);

    debug::init(debug_enabled).context("failed to initialize debug log")?;
    debug::log("SESSION_START", "Paddlebot starting");

    let config = config::load_config().context("failed to load configuration")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("game loop failed")
}

/// Parse command line arguments; only --debug and --help are recognized
fn parse_args(args: &[String]) -> bool {
    let mut debug_enabled = false;

    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => debug_enabled = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    debug_enabled
}

fn print_usage(program: &str) {
    println!("Paddlebot - Terminal Pong against an AI opponent");
    println!();
    println!("Usage:");
    println!("  {}            # Play (menu selects the mode)", program);
    println!("  {} --debug    # Also write diagnostics to /tmp", program);
    println!();
    println!("See the simulate binary for headless AI evaluation.");
}

/// Menu and game mode state machine
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    let mut menu_state = MenuState::new();
    let mut app_state = AppState::Menu;

    loop {
        match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state))?;

                match menu::handle_menu_input(&mut menu_state)? {
                    MenuAction::None => {}
                    MenuAction::StartGame(mode) => app_state = AppState::Game(mode),
                    MenuAction::Quit => app_state = AppState::Exiting,
                }
            }
            AppState::Game(mode) => {
                match mode {
                    GameMode::SinglePlayer(difficulty) => {
                        game_modes::run_game_vs_ai(terminal, config, difficulty)?;
                    }
                    GameMode::LocalTwoPlayer => {
                        game_modes::run_game_local(terminal, config)?;
                    }
                }
                // Game modes return on quit; drop back to the menu
                app_state = AppState::Menu;
            }
            AppState::Exiting => {
                debug::log("SESSION_END", "Exiting");
                return Ok(());
            }
        }
    }
}
