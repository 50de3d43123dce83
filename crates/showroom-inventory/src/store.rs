//! SQL operations for the record browser.
//!
//! Reads go through [`list_vehicles`], which joins vehicles with their
//! manufacturer and supports an optional contains-filter plus a price
//! ordering. Writes go through [`add_vehicle`] (validate, resolve the
//! manufacturer, insert) and [`delete_vehicle`] (id-based delete).
//!
//! The filter text is always bound as a parameter. The only piece of SQL
//! assembled at runtime is the ORDER BY keyword, rendered from a two-variant
//! enum rather than user text.

use rusqlite::{params, Connection, Row};

use showroom_types::{NewVehicle, SortDirection, VehicleRow};

use crate::error::InventoryError;

/// The joined listing projection shared by every read path.
const LISTING_SELECT: &str = "SELECT v.id, v.model, v.price, m.name, m.country
     FROM vehicles v
     JOIN manufacturers m ON v.manufacturer_id = m.id";

fn order_clause(order: SortDirection) -> &'static str {
    match order {
        SortDirection::Ascending => "ORDER BY v.price ASC",
        SortDirection::Descending => "ORDER BY v.price DESC",
    }
}

fn row_to_vehicle(row: &Row<'_>) -> rusqlite::Result<VehicleRow> {
    Ok(VehicleRow {
        id: row.get(0)?,
        model: row.get(1)?,
        price: row.get(2)?,
        manufacturer: row.get(3)?,
        country: row.get(4)?,
    })
}

/// Loads the vehicle listing.
///
/// With no filter, returns every vehicle joined with its manufacturer. With
/// a filter, returns the rows whose model or manufacturer name contains the
/// filter text (LIKE semantics). Both variants are ordered by price in the
/// requested direction.
///
/// # Errors
///
/// Returns `InventoryError::Database` on SQL failure.
pub fn list_vehicles(
    conn: &Connection,
    filter: Option<&str>,
    order: SortDirection,
) -> Result<Vec<VehicleRow>, InventoryError> {
    let mut vehicles = Vec::new();

    match filter {
        Some(text) => {
            let sql = format!(
                "{LISTING_SELECT}
                 WHERE v.model LIKE '%' || ?1 || '%' OR m.name LIKE '%' || ?1 || '%'
                 {}",
                order_clause(order)
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![text], row_to_vehicle)?;
            for row in rows {
                vehicles.push(row?);
            }
        }
        None => {
            let sql = format!("{LISTING_SELECT} {}", order_clause(order));
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], row_to_vehicle)?;
            for row in rows {
                vehicles.push(row?);
            }
        }
    }

    Ok(vehicles)
}

/// Resolves a manufacturer id by exact name match.
///
/// Returns `Ok(None)` when no manufacturer carries the name; the add
/// operation turns that into a user-facing "manufacturer not found" error.
///
/// # Errors
///
/// Returns `InventoryError::Database` on SQL failure.
pub fn manufacturer_id_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<i64>, InventoryError> {
    let mut stmt = conn.prepare("SELECT id FROM manufacturers WHERE name = ?1")?;
    let mut rows = stmt.query(params![name])?;

    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}

/// Add-form input after validation: fields trimmed, price parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVehicle {
    /// The trimmed model name.
    pub model: String,
    /// The parsed price.
    pub price: f64,
    /// The trimmed manufacturer name, not yet resolved to an id.
    pub manufacturer: String,
}

/// Validates raw add-form input.
///
/// Model and manufacturer must be non-empty after trimming; the price text
/// must parse as a finite number.
///
/// # Errors
///
/// Returns `InventoryError::EmptyField` or `InventoryError::InvalidPrice`.
pub fn validate_input(input: &NewVehicle) -> Result<ValidatedVehicle, InventoryError> {
    let model = input.model.trim();
    if model.is_empty() {
        return Err(InventoryError::EmptyField("model"));
    }

    let manufacturer = input.manufacturer.trim();
    if manufacturer.is_empty() {
        return Err(InventoryError::EmptyField("manufacturer"));
    }

    let price_text = input.price.trim();
    let price: f64 = price_text
        .parse()
        .map_err(|_| InventoryError::InvalidPrice(price_text.to_string()))?;
    if !price.is_finite() {
        return Err(InventoryError::InvalidPrice(price_text.to_string()));
    }

    Ok(ValidatedVehicle {
        model: model.to_string(),
        price,
        manufacturer: manufacturer.to_string(),
    })
}

/// Inserts a new vehicle row.
///
/// Validates the input, resolves the manufacturer by exact name, and
/// inserts. The manufacturer lookup is the only referential check (the
/// schema declares no foreign key), so an unknown name aborts the insert
/// before any write happens.
///
/// # Errors
///
/// Returns a validation error, `InventoryError::ManufacturerNotFound`, or
/// `InventoryError::Database`.
pub fn add_vehicle(conn: &Connection, input: &NewVehicle) -> Result<i64, InventoryError> {
    let vehicle = validate_input(input)?;

    let manufacturer_id = manufacturer_id_by_name(conn, &vehicle.manufacturer)?
        .ok_or_else(|| InventoryError::ManufacturerNotFound(vehicle.manufacturer.clone()))?;

    conn.execute(
        "INSERT INTO vehicles (model, price, manufacturer_id) VALUES (?1, ?2, ?3)",
        params![vehicle.model, vehicle.price, manufacturer_id],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Deletes the vehicle with the given id.
///
/// Returns the number of rows removed. A missing id deletes zero rows and
/// is not an error; the caller's reload simply shows no change.
///
/// # Errors
///
/// Returns `InventoryError::Database` on SQL failure.
pub fn delete_vehicle(conn: &Connection, id: i64) -> Result<usize, InventoryError> {
    let deleted = conn.execute("DELETE FROM vehicles WHERE id = ?1", params![id])?;
    Ok(deleted)
}
