//! SQL DDL for initializing the sales storage.

/// SQLite schema:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, assigned by the engine when a
///   create omits it
/// - `fecha` free-form TEXT (no date parsing happens anywhere)
/// - `importe` REAL
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS ventas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    fecha TEXT NOT NULL,
    tienda TEXT NOT NULL,
    importe REAL NOT NULL
);
"#;
