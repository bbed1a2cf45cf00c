// src/cascade/controller.rs

use crate::api::ApiError;
use crate::cascade::{CascadeError, CascadeEvent, CascadeSelection, FetchTicket, LocationCascade};
use crate::domain::location::{LocationLevel, LocationNode};
use crate::notify::Notifier;

/// The data-fetch collaborator behind the cascade: one scoped list per
/// level. `MarketplaceClient` is the production implementation; tests use
/// in-memory fakes.
pub trait LocationFetcher {
    fn states(&self) -> Result<Vec<LocationNode>, ApiError>;
    fn districts(&self, state_id: i64) -> Result<Vec<LocationNode>, ApiError>;
    fn talukas(&self, district_id: i64) -> Result<Vec<LocationNode>, ApiError>;
    fn tehsils(&self, taluka_id: i64) -> Result<Vec<LocationNode>, ApiError>;
}

/// Drives the cascade machine against real collaborators: runs each issued
/// ticket through the fetcher and surfaces failures as a toast instead of an
/// error return (the dropdown just shows no options). No automatic retry.
pub struct CascadeController<F: LocationFetcher, N: Notifier> {
    cascade: LocationCascade,
    fetcher: F,
    notifier: N,
}

impl<F: LocationFetcher, N: Notifier> CascadeController<F, N> {
    pub fn new(fetcher: F, notifier: N) -> Self {
        Self {
            cascade: LocationCascade::new(),
            fetcher,
            notifier,
        }
    }

    /// Loads (or reloads) the top-level state list.
    pub fn load_states(&mut self) {
        let ticket = self.cascade.load_states();
        self.run(ticket);
    }

    /// Selects or clears a value at `level`, fetching the child options when
    /// a value was picked.
    pub fn select(
        &mut self,
        level: LocationLevel,
        choice: Option<i64>,
    ) -> Result<(), CascadeError> {
        if let Some(ticket) = self.cascade.select(level, choice)? {
            self.run(ticket);
        }
        Ok(())
    }

    fn run(&mut self, ticket: FetchTicket) {
        let result = self.fetch(&ticket).map_err(|e| e.to_string());
        if let CascadeEvent::Failed(level, message) = self.cascade.complete(ticket, result) {
            log::warn!("{level} fetch failed: {message}");
            self.notifier
                .error(&format!("Could not load {level} options"));
        }
    }

    fn fetch(&self, ticket: &FetchTicket) -> Result<Vec<LocationNode>, ApiError> {
        match (ticket.level(), ticket.parent_id()) {
            (LocationLevel::State, _) => self.fetcher.states(),
            (LocationLevel::District, Some(id)) => self.fetcher.districts(id),
            (LocationLevel::Taluka, Some(id)) => self.fetcher.talukas(id),
            (LocationLevel::Tehsil, Some(id)) => self.fetcher.tehsils(id),
            (level, None) => Err(ApiError::UnexpectedShape(format!(
                "{level} fetch issued without a parent id"
            ))),
        }
    }

    pub fn selection(&self) -> CascadeSelection {
        self.cascade.selection()
    }

    pub fn options(&self, level: LocationLevel) -> &[LocationNode] {
        self.cascade.options(level)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
