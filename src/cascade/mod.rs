// src/cascade/mod.rs
//
// The location selector: State → District → Taluka → Tehsil, four dependent
// dropdowns where choosing a value at one level determines (and refetches)
// the options at the next.
//
// The machine itself performs no I/O. A selection change hands back a
// `FetchTicket`; whoever drives the machine performs the fetch and reports
// back through `complete`. Every ticket carries the generation of the level
// it was issued for, and `complete` discards tickets whose generation no
// longer matches, so a response for a superseded selection can never
// overwrite the current options, no matter how late it arrives.

mod controller;

pub use controller::{CascadeController, LocationFetcher};

use crate::domain::location::{LocationLevel, LocationNode};
use std::error::Error;
use std::fmt;

/// Permission to run one scoped fetch: options for `level`, constrained to
/// the selected parent. Issued by the machine, redeemed via `complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    level: LocationLevel,
    parent_id: Option<i64>,
    generation: u64,
}

impl FetchTicket {
    pub fn level(&self) -> LocationLevel {
        self.level
    }

    /// The parent selection this fetch is scoped to; `None` only for states.
    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }
}

#[derive(Debug, Default)]
struct Level {
    options: Vec<LocationNode>,
    selected: Option<i64>,
    generation: u64,
    loading: bool,
}

/// The four current selections, each nullable. A non-null selection always
/// has a fully-selected ancestor chain above it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSelection {
    pub state_id: Option<i64>,
    pub district_id: Option<i64>,
    pub taluka_id: Option<i64>,
    pub tehsil_id: Option<i64>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CascadeError {
    /// Tried to select below a level that has no selection.
    ParentUnselected(LocationLevel),
    /// The id is not among the level's loaded options.
    UnknownOption(LocationLevel, i64),
}

impl fmt::Display for CascadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CascadeError::ParentUnselected(level) => {
                write!(f, "Cannot select a {level} before its parent level")
            }
            CascadeError::UnknownOption(level, id) => {
                write!(f, "No {level} with id {id} among the loaded options")
            }
        }
    }
}

impl Error for CascadeError {}

/// What `complete` did with a fetch response.
#[derive(Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    /// The response is current and its options are now live.
    Applied(LocationLevel),
    /// The response was superseded by a newer selection and was discarded.
    Stale(LocationLevel),
    /// The fetch failed; the level shows no options and stays unselected.
    Failed(LocationLevel, String),
}

#[derive(Debug, Default)]
pub struct LocationCascade {
    levels: [Level; 4],
}

fn idx(level: LocationLevel) -> usize {
    match level {
        LocationLevel::State => 0,
        LocationLevel::District => 1,
        LocationLevel::Taluka => 2,
        LocationLevel::Tehsil => 3,
    }
}

impl LocationCascade {
    /// All four levels unselected, nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) loading the state list. Clears the whole chain:
    /// with no state selected, no child list is meaningful.
    pub fn load_states(&mut self) -> FetchTicket {
        let level = &mut self.levels[idx(LocationLevel::State)];
        level.generation += 1;
        level.loading = true;
        level.selected = None;
        level.options.clear();

        let ticket = FetchTicket {
            level: LocationLevel::State,
            parent_id: None,
            generation: level.generation,
        };
        self.clear_below(LocationLevel::State);
        ticket
    }

    /// Applies a selection (or a clear, with `None`) at `level`.
    ///
    /// Selecting a value clears every deeper level and returns the ticket
    /// for the child fetch scoped to the new id. Clearing applies the same
    /// downstream rule but fetches nothing. Either way, any in-flight fetch
    /// for a deeper level is invalidated.
    pub fn select(
        &mut self,
        level: LocationLevel,
        choice: Option<i64>,
    ) -> Result<Option<FetchTicket>, CascadeError> {
        let i = idx(level);

        let Some(id) = choice else {
            self.levels[i].selected = None;
            self.clear_below(level);
            return Ok(None);
        };

        if i > 0 && self.levels[i - 1].selected.is_none() {
            return Err(CascadeError::ParentUnselected(level));
        }
        if !self.levels[i].options.iter().any(|n| n.id == id) {
            return Err(CascadeError::UnknownOption(level, id));
        }

        self.levels[i].selected = Some(id);
        self.clear_below(level);

        let Some(child) = level.child() else {
            // Tehsil: terminal for this interaction.
            return Ok(None);
        };

        let child_level = &mut self.levels[idx(child)];
        child_level.loading = true;
        Ok(Some(FetchTicket {
            level: child,
            parent_id: Some(id),
            generation: child_level.generation,
        }))
    }

    /// Feeds a fetch response back into the machine. Responses whose ticket
    /// generation no longer matches the level are discarded unapplied.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<LocationNode>, String>,
    ) -> CascadeEvent {
        let level = &mut self.levels[idx(ticket.level)];

        if ticket.generation != level.generation {
            log::debug!("Discarding stale {} response", ticket.level);
            return CascadeEvent::Stale(ticket.level);
        }

        level.loading = false;
        match result {
            Ok(options) => {
                level.options = options;
                CascadeEvent::Applied(ticket.level)
            }
            Err(message) => {
                level.options.clear();
                CascadeEvent::Failed(ticket.level, message)
            }
        }
    }

    fn clear_below(&mut self, level: LocationLevel) {
        for i in (idx(level) + 1)..self.levels.len() {
            let deeper = &mut self.levels[i];
            deeper.selected = None;
            deeper.options.clear();
            deeper.loading = false;
            // Invalidates any fetch still in flight for this level.
            deeper.generation += 1;
        }
    }

    pub fn selection(&self) -> CascadeSelection {
        CascadeSelection {
            state_id: self.selected(LocationLevel::State),
            district_id: self.selected(LocationLevel::District),
            taluka_id: self.selected(LocationLevel::Taluka),
            tehsil_id: self.selected(LocationLevel::Tehsil),
        }
    }

    pub fn selected(&self, level: LocationLevel) -> Option<i64> {
        self.levels[idx(level)].selected
    }

    pub fn options(&self, level: LocationLevel) -> &[LocationNode] {
        &self.levels[idx(level)].options
    }

    pub fn is_loading(&self, level: LocationLevel) -> bool {
        self.levels[idx(level)].loading
    }
}
