use std::fs::File;
use std::sync::Mutex;

use posplus::catalog::Catalog;
use posplus::config::{AppConfig, fetch_config};
use posplus::receipt::MAX_TICKET_NUMBER;
use posplus::tui::{self, Action, App, Message};
use posplus::{PosError, Result};
use rand::Rng;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Milliseconds between ticks that expire status messages.
const TICK_INTERVAL_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<()> {
    let app_config = fetch_config()?;

    // The TUI owns stdout, so logs only go somewhere when a file is given.
    if let Some(path) = &app_config.log_file {
        let file = File::create(path)
            .map_err(|e| PosError::Io(format!("failed to open log file {}: {e}", path.display())))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let catalog = load_catalog(&app_config)?;
    info!(items = catalog.len(), "menu loaded");

    let mut app = App::new(&app_config, catalog);
    app.ticket_number = rand::thread_rng().gen_range(0..=MAX_TICKET_NUMBER);

    tui::install_panic_hook();
    let mut terminal = tui::setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    tui::event::spawn_event_reader(tx.clone());
    tui::event::spawn_tick_timer(tx, TICK_INTERVAL_MS);

    let result = run(&mut terminal, &mut app, &mut rx).await;

    tui::restore_terminal(&mut terminal)?;
    if let Err(ref e) = result {
        error!(error = %e, "storefront stopped");
    }
    result
}

fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    match &config.menu_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

async fn run(
    terminal: &mut tui::Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|frame| tui::render(frame, app))
            .map_err(|e| PosError::Io(format!("failed to draw: {e}")))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(Action::SaveOrder) = tui::event::update(app, message) {
            let mut rng = rand::thread_rng();
            let order_number: u16 = rng.gen_range(100..=999);
            let next_ticket = rng.gen_range(0..=MAX_TICKET_NUMBER);
            if let Some(finalized) = app.save_order(order_number, next_ticket) {
                info!(
                    order_number,
                    lines = finalized.line_count,
                    items = finalized.item_count,
                    total = %finalized.totals.total,
                    "order saved"
                );
            }
        }
    }
    Ok(())
}
