use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aquawatch::{
    config::Settings, events, report, ui, App, FileSource, RandomSource, ReadingSource,
};

/// How often a replay file is checked for changes.
const FILE_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "aquawatch")]
#[command(about = "Terminal dashboard for microplastic water quality readings")]
struct Args {
    /// Settings file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replay readings from a JSON file instead of generating them
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Upper bound (exclusive) of the Good band
    #[arg(long)]
    good_max: Option<f64>,

    /// Upper bound (exclusive) of the Moderate band
    #[arg(long)]
    moderate_max: Option<f64>,

    /// Number of generated readings
    #[arg(short = 'n', long, conflicts_with = "file")]
    readings: Option<usize>,

    /// Seed for reproducible generated readings
    #[arg(short, long, conflicts_with = "file")]
    seed: Option<u64>,

    /// Seconds between automatic regenerations (0 = only on demand)
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Export the dashboard to a JSON file and exit
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref(), args.export.is_some())?;

    let mut settings = Settings::load(args.config.as_deref())?;
    apply_overrides(&mut settings, &args);
    settings.validate()?;

    let source = build_source(&settings, args.file.as_deref());

    // Handle export mode (non-interactive)
    if let Some(ref export_path) = args.export {
        return export_to_file(source, &settings, export_path);
    }

    let refresh_interval = match (args.file.is_some(), settings.refresh_secs) {
        (true, _) => Some(FILE_POLL_INTERVAL),
        (false, 0) => None,
        (false, secs) => Some(Duration::from_secs(secs)),
    };

    run_tui(source, &settings, refresh_interval)
}

/// Set up tracing.
///
/// The TUI owns the terminal, so logs only go to stderr in export mode.
fn init_logging(log_file: Option<&Path>, export_mode: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if export_mode {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    Ok(())
}

/// Command-line flags take precedence over file and environment settings.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if let Some(good_max) = args.good_max {
        settings.thresholds.good_max = good_max;
    }
    if let Some(moderate_max) = args.moderate_max {
        settings.thresholds.moderate_max = moderate_max;
    }
    if let Some(readings) = args.readings {
        settings.source.readings = readings;
    }
    if args.seed.is_some() {
        settings.source.seed = args.seed;
    }
    if let Some(refresh) = args.refresh {
        settings.refresh_secs = refresh;
    }
}

fn build_source(settings: &Settings, file: Option<&Path>) -> Box<dyn ReadingSource> {
    if let Some(path) = file {
        return Box::new(FileSource::new(path));
    }

    let source = &settings.source;
    let random = match source.seed {
        Some(seed) => RandomSource::seeded(source.readings, seed),
        None => RandomSource::new(source.readings),
    };

    Box::new(
        random
            .with_interval(chrono::Duration::minutes(source.interval_minutes))
            .with_value_range(source.min_value, source.max_value),
    )
}

/// Run the TUI with the given reading source
fn run_tui(
    source: Box<dyn ReadingSource>,
    settings: &Settings,
    refresh_interval: Option<Duration>,
) -> Result<()> {
    // Create app before taking over the terminal; theme detection queries it
    let mut app =
        App::new(source, settings.threshold_config()).with_threshold_step(settings.thresholds.step);
    let _ = app.reload_data();

    info!(source = app.source_description(), "starting dashboard");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Option<Duration>,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        if let Some(interval) = refresh_interval {
            if last_refresh.elapsed() >= interval {
                let _ = app.reload_data();
                last_refresh = Instant::now();
            }
        }
    }

    info!("dashboard closed");
    Ok(())
}

/// Build the dashboard once and write it as JSON
fn export_to_file(
    mut source: Box<dyn ReadingSource>,
    settings: &Settings,
    export_path: &Path,
) -> Result<()> {
    let readings = match source.poll() {
        Some(readings) => readings,
        None => anyhow::bail!(
            "{}",
            source.error().unwrap_or("reading source produced no data")
        ),
    };

    let data = aquawatch::DashboardData::build(&readings, settings.threshold_config())?;
    report::write_report(&data, export_path)?;

    info!(
        readings = data.readings.len(),
        path = %export_path.display(),
        "exported dashboard"
    );
    println!("Exported dashboard to: {}", export_path.display());
    Ok(())
}
