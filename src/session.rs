// 🔁 Session Loop - collect → load → page → restart?
//
// Every pass starts from scratch: nothing is carried over between restarts.

use crate::collector::collect_filters;
use crate::console::Console;
use crate::filters::FilterSpec;
use crate::loader::load;
use crate::pager::page;
use crate::registry::DatasetRegistry;
use crate::table::TripTable;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no: ";

/// Where the session is between user turns
#[derive(Debug)]
pub enum SessionState {
    Collecting,
    Loading(FilterSpec),
    Paging(TripTable),
    AskRestart,
    Done,
}

impl SessionState {
    fn name(&self) -> &str {
        match self {
            SessionState::Collecting => "collecting",
            SessionState::Loading(_) => "loading",
            SessionState::Paging(_) => "paging",
            SessionState::AskRestart => "ask-restart",
            SessionState::Done => "done",
        }
    }
}

/// Drive sessions until the user declines to restart
///
/// A failed load ends the program: the error is returned to the caller.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &DatasetRegistry,
) -> Result<()> {
    let mut state = SessionState::Collecting;
    let mut iteration = 1;

    loop {
        debug!("Session {}: {}", iteration, state.name());
        state = match state {
            SessionState::Collecting => SessionState::Loading(collect_filters(console)?),
            SessionState::Loading(spec) => {
                let filters = serde_json::to_string(&spec).context("Failed to encode filters")?;
                info!("Loading with filters {}", filters);
                let table = load(registry, &spec)
                    .with_context(|| format!("Could not load trips for {}", spec.city))?;
                console.say(&format!(
                    "Loaded {} trips for {} (month: {}, day: {})",
                    table.len(),
                    spec.city,
                    spec.month,
                    spec.day
                ))?;
                SessionState::Paging(table)
            }
            SessionState::Paging(table) => {
                let shown = page(console, &table)?;
                debug!("Showed {} of {} trips", shown, table.len());
                SessionState::AskRestart
            }
            SessionState::AskRestart => {
                if console.confirm(RESTART_PROMPT)? {
                    iteration += 1;
                    SessionState::Collecting
                } else {
                    SessionState::Done
                }
            }
            SessionState::Done => break,
        };
    }

    info!("Finished after {} session(s)", iteration);
    Ok(())
}
