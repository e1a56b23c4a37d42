//! Dock Grid - main entry point
//!
//! Builds the registry and move plan from the configuration, then either
//! opens the terminal viewer or runs one of the headless commands.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{stdout, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use dockgrid::app::App;
use dockgrid::cli::{Cli, Commands, ConfigCommands};
use dockgrid::config::SimulationConfig;
use dockgrid::engine::{plan_scramble, MovePlan};
use dockgrid::error::{DockGridError, Result};
use dockgrid::player::{NoRedraw, Player};
use dockgrid::registry::BoxRegistry;
use dockgrid::render::{render_svg, SvgFrames};

/// Initialize tracing. Logs go to `log_file` when given, otherwise to
/// stderr unless `quiet` (the terminal viewer owns the screen).
fn init_tracing(verbose: u8, log_file: Option<&Path>, quiet: bool) -> Result<()> {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None if quiet => {}
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Main application entry point
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(cli.verbose, cli.log_file.as_deref(), interactive)?;
    info!("dockgrid starting up");
    debug!(?cli, "CLI arguments parsed");

    if let Some(Commands::Config { action }) = &cli.command {
        run_config_command(action)?;
        return Ok(());
    }

    let config = SimulationConfig::resolve(cli.config.as_deref())
        .map_err(|e| DockGridError::config(format!("{:#}", e)))?;
    let registry = BoxRegistry::populate(&config);
    let plan = plan_scramble(&registry, &config.swaps)?;

    match cli.command {
        None | Some(Commands::Tui) => run_tui(Player::from_plan(registry, plan), config.step_interval())?,
        Some(Commands::Plan) => println!("{}", plan.summary(&registry)),
        Some(Commands::Play { interval_ms, frames }) => {
            let interval = interval_ms.map_or(config.step_interval(), Duration::from_millis);
            run_headless(registry, plan, interval, frames.as_deref(), &config)?;
        }
        Some(Commands::Render { output, after }) => {
            let registry = if after { play_through(registry, plan)? } else { registry };
            let svg = render_svg(&registry, &config.svg);
            match output {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    info!("SVG written to {}", path.display());
                }
                None => stdout().write_all(svg.as_bytes())?,
            }
        }
        Some(Commands::Config { .. }) => {}
    }

    Ok(())
}

fn run_config_command(action: &ConfigCommands) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Init { path } => {
            SimulationConfig::default().save_to_file(path)?;
            println!("✓ Default configuration written to {}", path.display());
        }
        ConfigCommands::Validate { path } => {
            let config = SimulationConfig::load_from_file(path)?;
            match config.validate() {
                Ok(()) => println!("✓ Configuration file is valid: {}", path.display()),
                Err(e) => {
                    error!("Configuration validation failed: {}", e);
                    eprintln!("✗ Configuration validation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

/// Run the terminal viewer, always restoring the terminal afterwards
fn run_tui(player: Player, step_interval: Duration) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| DockGridError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen).map_err(|e| {
        DockGridError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| DockGridError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| App::new(player, step_interval).run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}

/// Replay the plan on the timer, optionally writing a frame per step
fn run_headless(
    registry: BoxRegistry,
    plan: MovePlan,
    interval: Duration,
    frames: Option<&Path>,
    config: &SimulationConfig,
) -> Result<()> {
    let mut player = Player::from_plan(registry, plan);

    let played = match frames {
        Some(dir) => {
            let mut scene = SvgFrames::create(dir, config.svg.clone())?;
            scene.write_frame(player.registry())?;
            let played = player.play_all(interval, &mut scene)?;
            println!("✓ {} steps played, {} frames in {}", played, scene.written(), dir.display());
            played
        }
        None => {
            let played = player.play_all(interval, &mut NoRedraw)?;
            println!("✓ {} steps played", played);
            played
        }
    };

    debug!(played, "headless replay done");
    Ok(())
}

/// Apply the whole plan without pausing
fn play_through(registry: BoxRegistry, plan: MovePlan) -> Result<BoxRegistry> {
    let mut player = Player::from_plan(registry, plan);
    player.play_all(Duration::ZERO, &mut NoRedraw)?;
    Ok(player.registry().clone())
}
