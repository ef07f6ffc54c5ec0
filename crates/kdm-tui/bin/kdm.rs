//! Kingdom Death: Monster roll calculator
//!
//! Main entry point. Runs a one-shot `hit`/`wound` command when given one,
//! otherwise the interactive calculator.

use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use kdm_core::{CalculatorState, StatBounds};
use kdm_tui::cli::{self, Args};
use kdm_tui::{App, Config, Error, Theme, logging};

fn main() -> ExitCode {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "kdm failed");
            eprintln!("kdm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    // Logging first so config problems are recorded
    match (&args.log_file, &args.command) {
        (Some(path), _) => logging::init_file_logging(path)?,
        (None, Some(_)) => logging::init_stderr_logging()?,
        (None, None) => {}
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let bounds = args.stat_bounds(&config);

    if let Some(command) = &args.command {
        println!("{}", cli::run_command(command, bounds)?);
        return Ok(());
    }

    let theme = Theme::from_choice(args.theme_choice(&config));
    let app = App::new(CalculatorState::new(bounds), theme).with_names(config.survivor_labels());
    run_tui(app, bounds)
}

fn run_tui(mut app: App, bounds: StatBounds) -> Result<(), Error> {
    tracing::info!(min = bounds.min(), max = bounds.max(), "starting calculator");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Error> {
    loop {
        // Draw
        terminal.draw(|frame| app.render(frame))?;

        // Handle input
        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);

            if app.should_quit() {
                tracing::info!("quitting");
                return Ok(());
            }
        }
    }
}
