// sortty: step-by-step sorting visualizer with time travel

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sortty::config::Cli;
use sortty::engine::controller::RunController;
use sortty::input::{generate, parse_numbers, DEFAULT_INPUT};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input = match (&cli.input, cli.random) {
        (Some(text), _) => {
            let parsed = parse_numbers(text);
            if !parsed.is_clean() {
                warn!(rejected = ?parsed.rejected, "ignoring tokens that are not integers");
                eprintln!("Ignoring invalid entries: {}", parsed.rejected.join(" "));
            }
            parsed.values
        }
        (None, Some(_)) => generate(&cli.generator(), &mut rng),
        (None, None) => parse_numbers(DEFAULT_INPUT).values,
    };

    if cli.headless {
        return run_headless(&cli, &input);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(
        cli.algorithm,
        input,
        cli.generator(),
        rng,
        cli.delay(),
        !cli.step_mode,
    );
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Sort without the TUI and print every step
fn run_headless(cli: &Cli, input: &[i64]) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = RunController::new();
    controller.start(cli.algorithm, input)?;
    controller.run_to_end()?;

    for frame in controller.frames().iter() {
        println!("{:>5}  {}", frame.step, frame.outcome.message);
    }
    if let Some(last) = controller.latest_frame() {
        println!();
        println!("Sorted positions: {}/{}", last.sorted.len(), last.array.len());
    }
    println!();
    println!("Algorithm: {}", cli.algorithm.name());
    println!("Steps: {}", controller.frame_count().saturating_sub(1));
    println!("Result: {:?}", controller.array());
    Ok(())
}

/// Install the tracing subscriber; the TUI owns the terminal, so it logs only to a file
fn init_tracing(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}
