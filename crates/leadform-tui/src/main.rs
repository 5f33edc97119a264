mod actions;
mod app;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::actions::execute_action;
use crate::app::App;
use leadform_config as config;
use leadform_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "leadform-tui", version, about = "leadform TUI")]
struct Args {
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    ledger: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Leave the visit date empty instead of today
    #[arg(long)]
    no_prefill: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let app_config = config::load(args.config).with_context(|| "load config")?;

    let catalog_path = paths::resolve_catalog_path(args.catalog.or(app_config.catalog_path))
        .with_context(|| "resolve catalog path")?;
    let ledger_path = paths::resolve_ledger_path(args.ledger.or(app_config.ledger_path))
        .with_context(|| "resolve ledger path")?;
    let store = Store::open(&catalog_path, &ledger_path)
        .with_context(|| format!("open catalog {}", catalog_path.display()))?;

    let choices = store
        .catalog()
        .choices()
        .into_iter()
        .map(str::to_string)
        .collect();
    let prefill = app_config.form.prefill_visit_date && !args.no_prefill;
    let mut app = App::new(choices, prefill);

    let mut terminal = TerminalGuard::new()?;
    run_app(&mut terminal, &store, &mut app)
}

fn run_app(terminal: &mut TerminalGuard, store: &Store, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        while let Some(action) = app.next_action() {
            if let Err(err) = execute_action(app, store, action) {
                app.set_error(format!("{:#}", err));
            }
        }

        terminal
            .terminal_mut()
            .draw(|frame| ui::draw(frame, app, store.catalog()))?;

        if app.should_quit {
            break;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::from_secs(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            original_hook(info);
        }));

        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
