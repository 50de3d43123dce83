use showroom_db::{create_pool, run_migrations, DbRuntimeSettings};

#[test]
fn db_initialization_works() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("showroom.db");

    let pool = create_pool(&db_path.to_string_lossy(), DbRuntimeSettings::default())
        .expect("failed to create pool");
    let conn = pool.get().expect("failed to get connection");
    let applied = run_migrations(&conn).expect("failed to run migrations");
    assert_eq!(applied, 2);

    // Verify table set (excluding sqlite_sequence and internal tables)
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
        .expect("failed to prepare table list query");
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("failed to execute table list query")
        .map(|r| r.expect("failed to read table name"))
        .collect();

    assert_eq!(
        tables,
        ["_showroom_migrations", "manufacturers", "vehicles"]
    );
}

#[test]
fn migrations_survive_reopen() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("showroom.db");
    let path_str = db_path.to_string_lossy().to_string();

    {
        let pool =
            create_pool(&path_str, DbRuntimeSettings::default()).expect("failed to create pool");
        let conn = pool.get().expect("failed to get connection");
        assert_eq!(run_migrations(&conn).expect("first run"), 2);
    }

    // A second process start against the same file applies nothing new.
    let pool =
        create_pool(&path_str, DbRuntimeSettings::default()).expect("failed to recreate pool");
    let conn = pool.get().expect("failed to get connection");
    assert_eq!(run_migrations(&conn).expect("second run"), 0);

    let vehicle_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))
        .expect("failed to count vehicles");
    assert_eq!(vehicle_count, 6, "seed stock should persist across reopen");
}
