//! Showroom desktop application: a Tauri shell over the dealership record
//! browser.
//!
//! The window hosts a bundled static page with the vehicle table, the
//! add-form inputs, and one button per command. Each button invokes exactly
//! one `#[tauri::command]` handler, which dispatches synchronously through
//! the record browser and either returns the refreshed row set or an
//! [`ErrorReport`] that the page presents as a blocking dialog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod config;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use showroom_inventory::{Command, InventoryError, RecordBrowser};
use showroom_types::{Column, NewVehicle, SortDirection, VehicleRow};

/// Resolve the application data directory.
///
/// Uses `dirs::data_dir()` to locate the platform-specific directory:
/// - Windows: `%APPDATA%\Showroom`
/// - macOS: `~/Library/Application Support/Showroom`
/// - Linux: `~/.local/share/Showroom`
fn resolve_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Showroom")
}

/// Writes a default `config.toml` into the data directory if one does not
/// already exist.
///
/// Returns the path to the config file on success.
fn ensure_config(data_dir: &Path) -> Result<PathBuf, String> {
    let config_path = data_dir.join("config.toml");
    if !config_path.exists() {
        let db_path = data_dir.join("showroom.db");
        // Use forward slashes for the database path: Windows APIs accept
        // them, and TOML double-quoted strings treat backslashes as escape
        // sequences, which breaks parsing.
        let db_path_safe = db_path.display().to_string().replace('\\', "/");
        let contents = format!(
            r#"# Showroom desktop configuration (auto-generated).

[database]
path = "{db_path_safe}"
busy_timeout_ms = 5000
pool_max_size = 4

[logging]
level = "info"
json = false
"#,
        );
        std::fs::write(&config_path, contents).map_err(|e| {
            format!(
                "failed to write default config to {}: {e}",
                config_path.display()
            )
        })?;
    }

    Ok(config_path)
}

/// Failure payload delivered to the frontend dialog layer.
///
/// `severity` selects the dialog presentation: "warning" for the
/// nothing-selected case, "error" for everything else. `message` carries
/// the raw error text.
#[derive(Debug, Clone, Serialize)]
struct ErrorReport {
    severity: &'static str,
    message: String,
}

impl From<InventoryError> for ErrorReport {
    fn from(err: InventoryError) -> Self {
        Self {
            severity: if err.is_warning() { "warning" } else { "error" },
            message: err.to_string(),
        }
    }
}

impl ErrorReport {
    fn internal(message: String) -> Self {
        Self {
            severity: "error",
            message,
        }
    }
}

/// Tauri-managed application state.
struct AppManagedState {
    browser: Mutex<RecordBrowser>,
}

/// Dispatches a command through the browser and maps the outcome for the
/// frontend. Failures are logged here, at the dialog boundary, and nowhere
/// else.
fn run_command(
    state: &tauri::State<'_, AppManagedState>,
    command: Command,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    let mut browser = state
        .browser
        .lock()
        .map_err(|e| ErrorReport::internal(format!("browser state poisoned: {e}")))?;

    match browser.dispatch(command) {
        Ok(()) => Ok(browser.rows().to_vec()),
        Err(err) => {
            tracing::warn!(warning = err.is_warning(), "action failed: {err}");
            Err(ErrorReport::from(err))
        }
    }
}

/// Column metadata for the table: header labels and fixed pixel widths,
/// in display order.
#[derive(Debug, Clone, Serialize)]
struct ColumnSpec {
    label: &'static str,
    width: u32,
}

/// Describe the table columns so the page can build its header.
#[tauri::command]
fn table_columns() -> Vec<ColumnSpec> {
    Column::ALL
        .iter()
        .map(|c| ColumnSpec {
            label: c.label(),
            width: c.width(),
        })
        .collect()
}

/// Load the default view: unfiltered, price ascending.
#[tauri::command]
fn load_vehicles(
    state: tauri::State<'_, AppManagedState>,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    run_command(&state, Command::Refresh)
}

/// Filter the listing by free text. Empty text loads the default view.
#[tauri::command]
fn search_vehicles(
    state: tauri::State<'_, AppManagedState>,
    text: String,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    run_command(&state, Command::Search { text })
}

/// Re-order the current view (keeping any active filter) by price.
#[tauri::command]
fn sort_vehicles(
    state: tauri::State<'_, AppManagedState>,
    direction: SortDirection,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    let command = match direction {
        SortDirection::Ascending => Command::SortAscending,
        SortDirection::Descending => Command::SortDescending,
    };
    run_command(&state, command)
}

/// Validate the form input and insert a new vehicle.
#[tauri::command]
fn add_vehicle(
    state: tauri::State<'_, AppManagedState>,
    vehicle: NewVehicle,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    run_command(&state, Command::Add { vehicle })
}

/// Delete the vehicle behind the selected row. `selected` is `None` when
/// no row is selected, which comes back as a warning.
#[tauri::command]
fn delete_vehicle(
    state: tauri::State<'_, AppManagedState>,
    selected: Option<i64>,
) -> Result<Vec<VehicleRow>, ErrorReport> {
    run_command(&state, Command::Delete { selected })
}

fn main() {
    let data_dir = resolve_data_dir();
    std::fs::create_dir_all(&data_dir).expect("failed to create Showroom data directory");

    let config_path = ensure_config(&data_dir).expect("failed to initialize configuration");
    let cfg = config::load_config(Some(&config_path.to_string_lossy()))
        .expect("failed to load configuration");

    let filter =
        EnvFilter::try_new(&cfg.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if cfg.logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let pool = showroom_db::create_pool(
        &cfg.database.path,
        showroom_db::DbRuntimeSettings {
            busy_timeout_ms: cfg.database.busy_timeout_ms,
            pool_max_size: cfg.database.pool_max_size,
        },
    )
    .expect("failed to create database pool, check database.path in config");

    {
        let conn = pool
            .get()
            .expect("failed to get database connection for migrations");
        let applied =
            showroom_db::run_migrations(&conn).expect("failed to run database migrations");
        if applied > 0 {
            tracing::info!(count = applied, "applied database migrations");
        }
    }

    let browser = RecordBrowser::open(pool).expect("failed to load the vehicle listing");
    tracing::info!(
        rows = browser.rows().len(),
        db = %cfg.database.path,
        "showroom ready"
    );

    tauri::Builder::default()
        .manage(AppManagedState {
            browser: Mutex::new(browser),
        })
        .invoke_handler(tauri::generate_handler![
            table_columns,
            load_vehicles,
            search_vehicles,
            sort_vehicles,
            add_vehicle,
            delete_vehicle,
        ])
        .run(tauri::generate_context!())
        .expect("error running Showroom desktop");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_config_creates_file_with_all_sections() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_path = ensure_config(dir.path()).expect("ensure_config should succeed");
        assert!(config_path.exists(), "config file must be created");

        let contents = std::fs::read_to_string(&config_path).expect("should read config");
        assert!(contents.contains("[database]"), "missing [database] section");
        assert!(contents.contains("[logging]"), "missing [logging] section");
    }

    #[test]
    fn ensure_config_is_idempotent() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");

        let path1 = ensure_config(dir.path()).expect("first call should succeed");
        let contents1 = std::fs::read_to_string(&path1).expect("should read");

        let path2 = ensure_config(dir.path()).expect("second call should succeed");
        let contents2 = std::fs::read_to_string(&path2).expect("should read");

        assert_eq!(path1, path2, "paths should match");
        assert_eq!(
            contents1, contents2,
            "contents should not change on second call"
        );
    }

    #[test]
    fn ensure_config_points_db_path_into_data_dir() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_path = ensure_config(dir.path()).expect("ensure_config should succeed");
        let contents = std::fs::read_to_string(&config_path).expect("should read");

        let expected_db = dir.path().join("showroom.db");
        let expected_db_safe = expected_db.display().to_string().replace('\\', "/");
        assert!(
            contents.contains(&expected_db_safe),
            "config should contain db path: {expected_db_safe}"
        );
    }

    #[test]
    fn generated_config_parses_through_the_loader() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_path = ensure_config(dir.path()).expect("ensure_config should succeed");

        let cfg = config::load_config(Some(&config_path.to_string_lossy()))
            .expect("generated config should parse");
        assert!(cfg.database.path.ends_with("showroom.db"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn error_report_severity_tracks_warning_class() {
        let report = ErrorReport::from(InventoryError::NothingSelected);
        assert_eq!(report.severity, "warning");

        let report = ErrorReport::from(InventoryError::ManufacturerNotFound(
            "UnknownCo".to_string(),
        ));
        assert_eq!(report.severity, "error");
        assert!(report.message.contains("UnknownCo"));
    }
}
