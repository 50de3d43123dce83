//! Shared types for the Showroom dealership browser.
//!
//! This crate provides the domain types used across the Showroom workspace:
//! the vehicle and manufacturer records, the raw add-form input, the sort
//! direction, and the table column metadata used by the display layer.
//!
//! No crate in the workspace depends on anything *except* `showroom-types`
//! for cross-cutting type definitions. This keeps the dependency graph clean
//! and prevents circular dependencies.

use serde::{Deserialize, Serialize};

/// A single row of the joined vehicle listing, as rendered in the table.
///
/// Produced by the default list query: vehicles joined with their
/// manufacturer, one row per vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRow {
    /// Auto-incremented vehicle ID. The first table column; delete reads
    /// the target ID from here.
    pub id: i64,
    /// The vehicle model name.
    pub model: String,
    /// The vehicle price.
    pub price: f64,
    /// The manufacturer name, resolved through the join.
    pub manufacturer: String,
    /// The manufacturer country, resolved through the join.
    pub country: String,
}

/// A manufacturer record. Read-only from the browser's perspective:
/// manufacturers are only ever looked up by name, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Auto-incremented manufacturer ID.
    pub id: i64,
    /// The manufacturer name, unique within the table.
    pub name: String,
    /// The manufacturer country.
    pub country: String,
}

/// Raw add-form input, exactly as entered by the user.
///
/// The price arrives as text and is parsed during validation; all three
/// fields are trimmed before any check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVehicle {
    /// The model name field.
    pub model: String,
    /// The price field, unparsed.
    pub price: String,
    /// The manufacturer name field, matched exactly against the
    /// manufacturer table.
    pub manufacturer: String,
}

/// Direction of the price ordering applied to the vehicle listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Cheapest first. The default view ordering.
    #[default]
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortDirection {
    /// Returns the canonical string label for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown sort direction string.
#[derive(Debug, Clone)]
pub struct ParseSortDirectionError(pub String);

impl std::fmt::Display for ParseSortDirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown sort direction: {}", self.0)
    }
}

impl std::error::Error for ParseSortDirectionError {}

/// Semantic columns of the vehicle table, in display order.
///
/// Each column carries a fixed pixel width: the ID column is narrow, text
/// columns are wider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    /// Vehicle ID.
    Id,
    /// Vehicle model.
    Model,
    /// Vehicle price.
    Price,
    /// Manufacturer name.
    Manufacturer,
    /// Manufacturer country.
    Country,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Model,
        Column::Price,
        Column::Manufacturer,
        Column::Country,
    ];

    /// Returns the column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Model => "Model",
            Self::Price => "Price",
            Self::Manufacturer => "Manufacturer",
            Self::Country => "Country",
        }
    }

    /// Returns the fixed column width in pixels.
    pub fn width(self) -> u32 {
        match self {
            Self::Id => 50,
            Self::Model => 150,
            Self::Price => 150,
            Self::Manufacturer => 120,
            Self::Country => 160,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_direction_round_trip() {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let s = direction.as_str();
            let restored: SortDirection = s.parse().expect("should parse direction string");
            assert_eq!(restored, direction);
        }
    }

    #[test]
    fn sort_direction_from_invalid() {
        assert!("up".parse::<SortDirection>().is_err());
        assert!("".parse::<SortDirection>().is_err());
    }

    #[test]
    fn sort_direction_default_is_ascending() {
        assert_eq!(SortDirection::default(), SortDirection::Ascending);
    }

    #[test]
    fn sort_direction_serialises_lowercase() {
        let json = serde_json::to_string(&SortDirection::Descending).expect("should serialise");
        assert_eq!(json, "\"descending\"");

        let parsed: SortDirection =
            serde_json::from_str("\"ascending\"").expect("should deserialise");
        assert_eq!(parsed, SortDirection::Ascending);
    }

    #[test]
    fn columns_are_in_display_order() {
        let labels: Vec<&str> = Column::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["ID", "Model", "Price", "Manufacturer", "Country"]
        );
    }

    #[test]
    fn id_column_is_narrowest() {
        for column in Column::ALL {
            assert!(
                Column::Id.width() <= column.width(),
                "ID must be the narrow column, {column:?} is narrower"
            );
        }
    }

    #[test]
    fn vehicle_row_serialises_to_flat_json() {
        let row = VehicleRow {
            id: 7,
            model: "X5".to_string(),
            price: 45000.0,
            manufacturer: "BMW".to_string(),
            country: "Germany".to_string(),
        };

        let json = serde_json::to_string(&row).expect("should serialise");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("should parse");

        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["model"], "X5");
        assert_eq!(parsed["price"], 45000.0);
        assert_eq!(parsed["manufacturer"], "BMW");
        assert_eq!(parsed["country"], "Germany");
    }
}
