//! Record browser/editor core for the Showroom dealership database.
//!
//! Implements the query/display/mutation cycle: parametrized read queries
//! over the vehicle/manufacturer join, insert and delete mutations with
//! input validation, and an explicit command dispatcher that re-derives the
//! displayed row set after every action.
//!
//! Every user-supplied value, including the free-text search filter, is
//! bound as a SQL parameter, never interpolated into statement text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use showroom_inventory::{Command, RecordBrowser};
//!
//! let mut browser = RecordBrowser::open(pool)?;
//! browser.dispatch(Command::Search {
//!     text: "Toyota".to_string(),
//! })?;
//! let rows = browser.rows();
//! ```

mod command;
mod error;
mod store;

pub use command::{Command, RecordBrowser};
pub use error::InventoryError;
pub use store::{
    add_vehicle, delete_vehicle, list_vehicles, manufacturer_id_by_name, validate_input,
    ValidatedVehicle,
};
