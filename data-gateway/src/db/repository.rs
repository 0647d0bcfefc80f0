use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};

use super::CollectionStore;
use crate::config::CollectionConfig;
use crate::error::StoreError;
use crate::models::Record;

/// Collection store backed by Postgres tables, one table per collection.
///
/// Rows are exchanged as JSON objects keyed by column name.
pub struct PgCollectionStore {
    pool: PgPool,
}

impl PgCollectionStore {
    /// Build the pool without connecting; connection failures surface on
    /// the first query instead of at startup.
    pub fn connect_lazy(config: &CollectionConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.database_url)?;

        tracing::info!(
            max_connections = config.max_connections,
            "Collection store pool configured"
        );
        Ok(Self { pool })
    }
}

#[async_trait]
impl CollectionStore for PgCollectionStore {
    async fn query_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let sql = select_all_sql(collection)?;

        let rows = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Fetched {} records from {}", rows.len(), collection);
        Ok(rows.into_iter().map(|Json(record)| record).collect())
    }

    async fn insert(&self, collection: &str, record: Record) -> Result<Record, StoreError> {
        let columns: Vec<&str> = record.keys().map(String::as_str).collect();
        let sql = insert_sql(collection, &columns)?;

        let query = sqlx::query_scalar::<_, Json<Record>>(&sql);
        let query = if columns.is_empty() {
            query
        } else {
            query.bind(Json(&record))
        };
        let Json(stored) = query.fetch_one(&self.pool).await?;

        tracing::info!("Inserted record into {}", collection);
        Ok(stored)
    }
}

/// Quote a `table` or `schema.table` name, rejecting anything that is not a
/// plain identifier.
pub fn quote_identifier(name: &str) -> Result<String, StoreError> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 || !parts.iter().all(|part| is_plain_identifier(part)) {
        return Err(StoreError::InvalidCollection(format!(
            "'{}' is not a valid collection name",
            name
        )));
    }

    Ok(parts
        .iter()
        .map(|part| format!("\"{}\"", part))
        .collect::<Vec<_>>()
        .join("."))
}

fn is_plain_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn select_all_sql(collection: &str) -> Result<String, StoreError> {
    let table = quote_identifier(collection)?;
    Ok(format!("SELECT to_jsonb(t) FROM {} AS t", table))
}

/// Columns absent from the record keep their table defaults.
fn insert_sql(collection: &str, columns: &[&str]) -> Result<String, StoreError> {
    let table = quote_identifier(collection)?;

    if columns.is_empty() {
        return Ok(format!(
            "INSERT INTO {} AS t DEFAULT VALUES RETURNING to_jsonb(t)",
            table
        ));
    }

    let quoted = columns
        .iter()
        .map(|column| {
            if is_plain_identifier(column) {
                Ok(format!("\"{}\"", column))
            } else {
                Err(StoreError::Query(format!(
                    "'{}' is not a valid field name",
                    column
                )))
            }
        })
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    Ok(format!(
        "INSERT INTO {table} AS t ({quoted}) \
         SELECT {quoted} FROM jsonb_populate_record(NULL::{table}, $1) \
         RETURNING to_jsonb(t)"
    ))
}
