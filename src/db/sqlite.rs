use crate::db::models::DbVenta;
use crate::db::schema::SQLITE_INIT;
use crate::error::VentasError;
use crate::types::Venta;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Handle over the single `ventas` table. Cheap to clone; all methods issue
/// one statement and commit implicitly.
#[derive(Clone)]
pub struct SalesStorage {
    pool: SqlitePool,
}

impl SalesStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and bootstrap the schema.
    pub async fn connect(database_url: &str) -> Result<Self, VentasError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), VentasError> {
        // execute statement by statement (sqlx::query rejects multi-commands)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a sale, returning the assigned id. An explicit `id` in the
    /// request is honored; otherwise SQLite autoincrement assigns one.
    pub async fn create(&self, venta: &Venta) -> Result<i64, VentasError> {
        let result = sqlx::query("INSERT INTO ventas (id, fecha, tienda, importe) VALUES (?, ?, ?, ?)")
            .bind(venta.id)
            .bind(&venta.fecha)
            .bind(&venta.tienda)
            .bind(venta.importe)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_all(&self) -> Result<Vec<DbVenta>, VentasError> {
        let rows = sqlx::query_as::<_, DbVenta>(
            "SELECT id, fecha, tienda, importe FROM ventas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbVenta>, VentasError> {
        let row = sqlx::query_as::<_, DbVenta>(
            "SELECT id, fecha, tienda, importe FROM ventas WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// First match in storage order, mirroring the lookup contract.
    pub async fn get_by_tienda(&self, tienda: &str) -> Result<Option<DbVenta>, VentasError> {
        let row = sqlx::query_as::<_, DbVenta>(
            "SELECT id, fecha, tienda, importe FROM ventas WHERE tienda = ? ORDER BY id LIMIT 1",
        )
        .bind(tienda)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Full overwrite of fecha/tienda/importe. Returns false when no row has
    /// the given id.
    pub async fn update(&self, id: i64, venta: &Venta) -> Result<bool, VentasError> {
        let result = sqlx::query("UPDATE ventas SET fecha = ?, tienda = ?, importe = ? WHERE id = ?")
            .bind(&venta.fecha)
            .bind(&venta.tienda)
            .bind(venta.importe)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, VentasError> {
        let result = sqlx::query("DELETE FROM ventas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
