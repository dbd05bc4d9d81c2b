//! Per-dataset view-state machine.
//!
//! Each dashboard owns one `DashboardView` per dataset: idle until the tab
//! is first activated, then loading, then ready or error. A "load full
//! data" transition fires at most once per view (latched on first raw-data
//! activation) and replaces the row set wholesale.
//!
//! Fetches are not cancelled; instead every load hands out a generation-
//! numbered [`LoadTicket`], and `complete` drops results whose ticket is
//! stale, so an out-of-order completion can never clobber newer state.

use ddash_api::TransportError;

/// Row limit for the initial page of a dashboard.
pub const PAGE_LIMIT: usize = 20;

/// Row limit for the one-time full-data load.
pub const FULL_LIMIT: usize = 100;

/// Lifecycle of one dataset view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Tab never activated; nothing fetched.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Rows are held and displayable.
    Ready,
    /// The last load failed; carries the human-readable message.
    Error(String),
}

/// Permission to commit the result of one load. Stale tickets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    pub limit: usize,
}

#[derive(Debug)]
pub struct DashboardView<T> {
    state: ViewState,
    rows: Vec<T>,
    full_requested: bool,
    generation: u64,
    last_limit: usize,
}

impl<T> DashboardView<T> {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            rows: Vec::new(),
            full_requested: false,
            generation: 0,
            last_limit: PAGE_LIMIT,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// True once the one-shot full-data load has been triggered.
    pub fn full_data_requested(&self) -> bool {
        self.full_requested
    }

    fn issue_ticket(&mut self, limit: usize) -> LoadTicket {
        self.generation += 1;
        self.last_limit = limit;
        self.state = ViewState::Loading;
        LoadTicket {
            generation: self.generation,
            limit,
        }
    }

    /// First activation of the tab: idle -> loading with the page limit.
    /// Returns `None` on every later activation.
    pub fn activate(&mut self) -> Option<LoadTicket> {
        match self.state {
            ViewState::Idle => Some(self.issue_ticket(PAGE_LIMIT)),
            _ => None,
        }
    }

    /// First activation of the raw-data sub-tab: ready -> loading with the
    /// full limit, at most once per view instance.
    pub fn open_raw_data(&mut self) -> Option<LoadTicket> {
        if self.full_requested || self.state != ViewState::Ready {
            return None;
        }
        self.full_requested = true;
        Some(self.issue_ticket(FULL_LIMIT))
    }

    /// Manual retry from the error panel: re-enter loading with the limit
    /// of the failed load.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        match self.state {
            ViewState::Error(_) => {
                let limit = self.last_limit;
                Some(self.issue_ticket(limit))
            }
            _ => None,
        }
    }

    /// Commit a load result. Returns false (and changes nothing) if the
    /// ticket was superseded by a newer load.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<T>, TransportError>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.state = ViewState::Ready;
            }
            Err(err) => {
                // previously loaded rows stay visible behind the error panel
                self.state = ViewState::Error(err.to_string());
            }
        }
        true
    }
}

impl<T> Default for DashboardView<T> {
    fn default() -> Self {
        Self::new()
    }
}
