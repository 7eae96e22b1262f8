use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use catalog_core::{update, AppState, Msg};
use catalog_engine::{EngineHandle, LocationStore};
use catalog_logging::{catalog_info, catalog_warn};

use super::config::{config_path, load_config, AppConfig};
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::Command;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let (config, config_error) = match load_config(&path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    catalog_logging::initialize(&config.log);
    if let Some(err) = config_error {
        catalog_warn!("Using default config; {:?} could not be loaded: {}", path, err);
    }

    let store = LocationStore::new(&config.location_file);
    let location = initial_location(&store);
    catalog_info!("Mounting accessories page at ?{}", location);

    let engine =
        EngineHandle::new(config.product_source()).context("failed to start catalog engine")?;
    let state = AppState::from_location(&location)
        .with_stale_responses(config.stale_policy())
        .with_transition_delay(config.transition_delay());
    let mut page = Page::new(state, EffectRunner::new(engine, store, location));

    let lines = spawn_input_reader();
    page.dispatch(Msg::Mounted)?;

    loop {
        for msg in page.effects.poll() {
            page.dispatch(msg)?;
        }

        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match ui::input::parse_command(&line, &page.state.view()) {
                Some(Command::Dispatch(msg)) => page.dispatch(msg)?,
                Some(Command::Help) => page.print(ui::constants::HELP_TEXT)?,
                Some(Command::Invalid(reason)) => page.print(&reason)?,
                Some(Command::Quit) => break,
                None => {}
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    page.dispatch(Msg::Unmounted)?;
    catalog_info!("Unmounted accessories page at ?{}", page.effects.location());
    Ok(())
}

/// The first CLI argument wins over the saved location.
fn initial_location(store: &LocationStore) -> String {
    if let Some(arg) = std::env::args().nth(1) {
        return arg;
    }
    match store.load() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(err) => {
            catalog_warn!("Failed to read saved location from {:?}: {}", store.path(), err);
            String::new()
        }
    }
}

fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

struct Page {
    state: AppState,
    effects: EffectRunner,
}

impl Page {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self { state, effects }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            let view = self.state.view();
            let mut out = io::stdout().lock();
            writeln!(out)?;
            for line in ui::render::render(&view) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }
        Ok(())
    }

    fn print(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}
