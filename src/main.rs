use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use medicare::app::{App, StatusLevel};
use medicare::{config, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "medicare",
    version,
    about = "MediCare: patients, reminders and today's schedule in the terminal"
)]
struct Args {
    /// Config file (defaults to $MEDICARE_CONFIG or ~/.config/medicare/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    let log_path = args.log_file.clone().or_else(config::log_path);
    let log_error = log_path
        .as_deref()
        .map(|path| logging::init(path, config.log_level.as_deref()))
        .and_then(Result::err);

    let mut app = App::new(&config);
    if let Some(err) = config_error {
        warn!(error = %err, "config ignored");
        app.set_status(format!("Конфигурация не загружена: {err}"), StatusLevel::Warn);
    }
    if let Some(err) = log_error {
        app.set_status(format!("Журнал отключён: {err:#}"), StatusLevel::Warn);
    }
    info!(doctor = %config.doctor.name, "starting");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }
    info!("stopped");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        let screen = terminal.draw(|f| ui::draw(f, &app))?.area;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => input::handle_mouse(&mut app, mouse, screen),
                _ => {}
            }
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => {
            let preview: String = text.chars().take(32).collect();
            let ellipsis = if text.chars().count() > 32 { "..." } else { "" };
            app.set_status(format!("Скопировано: {preview}{ellipsis}"), StatusLevel::Info);
        }
        Err(err) => {
            warn!(error = %err, "clipboard unavailable");
            app.set_status("Буфер обмена недоступен", StatusLevel::Error);
        }
    }
}
