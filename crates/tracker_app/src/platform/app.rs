use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use tracker_core::{update, AppState, Msg};
use tracker_logging::{tracker_debug, tracker_info, tracker_warn};

use super::config::{read_config, DEFAULT_CONFIG_FILE};
use super::curated::load_curated_list;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let loaded = read_config(&config_path)?;
    let found_config = loaded.is_some();
    let config = loaded.unwrap_or_default();

    logging::initialize(config.log_destination, config.log_level);
    if found_config {
        tracker_info!("config loaded from {:?}", config_path);
    } else {
        tracker_info!("no config at {:?}; using defaults", config_path);
    }

    let entries = load_curated_list(&config.curated_list).context("loading the curated list")?;
    tracker_info!("{} curated entries", entries.len());

    let engine_config = config.engine_config();
    let state = AppState::new().with_link_source(engine_config.link_source);
    let effects = EffectRunner::new(engine_config).context("starting the catalog engine")?;
    let mut app = App::new(state, effects);

    let (cmd_tx, cmd_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if cmd_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP}\n");
    app.dispatch(Msg::CuratedLoaded(entries));
    app.render_if_dirty();

    loop {
        match cmd_rx.recv_timeout(TICK_INTERVAL) {
            Ok(line) => {
                if !app.handle_line(&line) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => app.dispatch(Msg::Tick),
            Err(RecvTimeoutError::Disconnected) => {
                tracker_debug!("stdin closed");
                break;
            }
        }
        app.drain_engine();
        app.render_if_dirty();
    }

    tracker_info!("exiting");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self { state, effects }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
    }

    fn drain_engine(&mut self) {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
    }

    /// Returns false once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_command(line) {
            Ok(Some(Command::Send(msg))) => self.dispatch(msg),
            Ok(Some(Command::Select(row))) => self.select_row(row),
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Quit)) => return false,
            Ok(None) => {}
            Err(err) => println!("{err}"),
        }
        true
    }

    fn select_row(&mut self, row: usize) {
        if self.state.is_loading() {
            println!("Still loading; try again in a moment.");
            return;
        }
        let view = self.state.view();
        match view.rows.get(row - 1) {
            Some(found) => self.dispatch(Msg::RecordSelected { key: found.key }),
            None => {
                tracker_warn!("row {} out of range ({} rows)", row, view.rows.len());
                println!("No row {row}; the list has {} rows.", view.rows.len());
            }
        }
    }

    fn render_if_dirty(&mut self) {
        if self.state.consume_dirty() {
            print!("{}", render(&self.state.view()));
            let _ = io::stdout().flush();
        }
    }
}
