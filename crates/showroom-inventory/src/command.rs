//! Explicit command dispatch for the record browser.
//!
//! Each button in the interface maps to exactly one [`Command`] variant,
//! dispatched synchronously. The browser owns the component-local view
//! state (the displayed rows, the active filter, the active sort direction)
//! and re-derives the rows from the database after every action. Nothing
//! about the view survives outside this struct.
//!
//! Sort commands keep the active search filter: sorting a filtered view
//! re-runs the filtered query in the new direction.

use showroom_db::DbPool;
use showroom_types::{NewVehicle, SortDirection, VehicleRow};

use crate::error::InventoryError;
use crate::store;

/// A user action, one per interface button.
#[derive(Debug, Clone)]
pub enum Command {
    /// Reload the default view: unfiltered, price ascending.
    Refresh,
    /// Filter by free text matched against model and manufacturer name.
    /// Empty text falls back to the default view.
    Search {
        /// The filter text, trimmed before use.
        text: String,
    },
    /// Re-order the current view by price, cheapest first.
    SortAscending,
    /// Re-order the current view by price, most expensive first.
    SortDescending,
    /// Validate the form input and insert a new vehicle.
    Add {
        /// The raw form input.
        vehicle: NewVehicle,
    },
    /// Delete the vehicle behind the selected row, if any.
    Delete {
        /// The id read from the selected row's first column, or `None`
        /// when no row is selected.
        selected: Option<i64>,
    },
}

impl Command {
    /// Returns the command identifier used for dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Search { .. } => "search",
            Self::SortAscending => "sort-ascending",
            Self::SortDescending => "sort-descending",
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
        }
    }
}

/// Component-local view state, re-derived from the database on every load.
#[derive(Debug, Clone, Default)]
struct ViewState {
    rows: Vec<VehicleRow>,
    filter: Option<String>,
    order: SortDirection,
}

/// The record browser: a command dispatcher over the dealership database.
///
/// Holds the connection pool and the current view. On dispatch failure the
/// previously displayed rows are left untouched, so the interface keeps
/// showing the last good state.
pub struct RecordBrowser {
    pool: DbPool,
    view: ViewState,
}

impl RecordBrowser {
    /// Creates a browser with an empty view. [`RecordBrowser::open`] is the
    /// usual entry point; this exists for callers that want to defer the
    /// first load.
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            view: ViewState::default(),
        }
    }

    /// Creates a browser and performs the initial load of the default view.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError` if the initial listing query fails.
    pub fn open(pool: DbPool) -> Result<Self, InventoryError> {
        let mut browser = Self::new(pool);
        browser.reload()?;
        Ok(browser)
    }

    /// The currently displayed rows.
    pub fn rows(&self) -> &[VehicleRow] {
        &self.view.rows
    }

    /// The active search filter, if any.
    pub fn filter(&self) -> Option<&str> {
        self.view.filter.as_deref()
    }

    /// The active sort direction.
    pub fn order(&self) -> SortDirection {
        self.view.order
    }

    /// Executes a command, refreshing the view; read the result via
    /// [`RecordBrowser::rows`].
    ///
    /// Each command checks a connection out of the pool, runs its
    /// statements, and releases it before returning. On error the view is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError` for database, validation, and selection
    /// failures; the caller converts these to dialogs.
    pub fn dispatch(&mut self, command: Command) -> Result<(), InventoryError> {
        tracing::debug!(command = command.name(), "dispatching user action");

        match command {
            Command::Refresh => {
                self.view.filter = None;
                self.view.order = SortDirection::Ascending;
                self.reload()?;
            }
            Command::Search { text } => {
                let trimmed = text.trim();
                self.view.filter = (!trimmed.is_empty()).then(|| trimmed.to_string());
                self.view.order = SortDirection::Ascending;
                self.reload()?;
            }
            Command::SortAscending => {
                self.view.order = SortDirection::Ascending;
                self.reload()?;
            }
            Command::SortDescending => {
                self.view.order = SortDirection::Descending;
                self.reload()?;
            }
            Command::Add { vehicle } => {
                {
                    let conn = self.pool.get()?;
                    let id = store::add_vehicle(&conn, &vehicle)?;
                    tracing::info!(id, model = %vehicle.model.trim(), "vehicle added");
                }
                self.view.filter = None;
                self.view.order = SortDirection::Ascending;
                self.reload()?;
            }
            Command::Delete { selected } => {
                let id = selected.ok_or(InventoryError::NothingSelected)?;
                {
                    let conn = self.pool.get()?;
                    let deleted = store::delete_vehicle(&conn, id)?;
                    tracing::info!(id, deleted, "vehicle delete issued");
                }
                self.view.filter = None;
                self.view.order = SortDirection::Ascending;
                self.reload()?;
            }
        }

        Ok(())
    }

    /// Re-derives the displayed rows from the database using the active
    /// filter and ordering. Only replaces the view on success.
    fn reload(&mut self) -> Result<(), InventoryError> {
        let conn = self.pool.get()?;
        self.view.rows = store::list_vehicles(&conn, self.view.filter.as_deref(), self.view.order)?;
        Ok(())
    }
}
