//! Apply the catalog schema: tables in foreign-key order, then indexes.
//! Idempotent (IF NOT EXISTS everywhere), so it runs on every startup.

use crate::error::AppError;
use sqlx::SqlitePool;

struct TableDef {
    name: &'static str,
    columns: &'static [(&'static str, &'static str)],
    constraints: &'static [&'static str],
}

struct IndexDef {
    name: &'static str,
    table: &'static str,
    columns: &'static [&'static str],
}

const TABLES: &[TableDef] = &[
    TableDef {
        name: "users",
        columns: &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("email", "TEXT NOT NULL UNIQUE"),
            ("hashed_password", "TEXT NOT NULL"),
            ("created_at", "TEXT NOT NULL"),
        ],
        constraints: &[],
    },
    TableDef {
        name: "products",
        columns: &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("name", "TEXT NOT NULL"),
            ("category", "TEXT NOT NULL"),
            ("attributes", "TEXT NOT NULL DEFAULT '{}'"),
            ("created_at", "TEXT NOT NULL"),
        ],
        constraints: &[],
    },
    TableDef {
        name: "suppliers",
        columns: &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("name", "TEXT NOT NULL"),
            ("tier", "TEXT NOT NULL"),
            ("tags", "TEXT NOT NULL DEFAULT '[]'"),
        ],
        constraints: &["CHECK (tier IN ('tier_1', 'tier_2'))"],
    },
    TableDef {
        name: "offers",
        columns: &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("product_id", "INTEGER NOT NULL"),
            ("supplier_id", "INTEGER NOT NULL"),
            ("price", "REAL NOT NULL"),
            ("currency", "TEXT NOT NULL DEFAULT 'USD'"),
            ("created_at", "TEXT NOT NULL"),
        ],
        constraints: &[
            "FOREIGN KEY (product_id) REFERENCES products (id)",
            "FOREIGN KEY (supplier_id) REFERENCES suppliers (id)",
        ],
    },
    TableDef {
        name: "events",
        columns: &[
            ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
            ("event_type", "TEXT NOT NULL DEFAULT 'product_view'"),
            ("product_id", "INTEGER NOT NULL"),
            ("session_id", "TEXT NOT NULL"),
            ("timestamp", "TEXT NOT NULL"),
        ],
        constraints: &["FOREIGN KEY (product_id) REFERENCES products (id)"],
    },
];

const INDEXES: &[IndexDef] = &[
    IndexDef { name: "idx_products_category", table: "products", columns: &["category"] },
    IndexDef { name: "idx_offers_product_id", table: "offers", columns: &["product_id"] },
    IndexDef { name: "idx_offers_supplier_id", table: "offers", columns: &["supplier_id"] },
    IndexDef { name: "idx_events_timestamp", table: "events", columns: &["timestamp"] },
    IndexDef { name: "idx_events_product_id", table: "events", columns: &["product_id"] },
];

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn create_table_sql(t: &TableDef) -> String {
    let mut defs: Vec<String> = t
        .columns
        .iter()
        .map(|(name, typ)| format!("{} {}", quote(name), typ))
        .collect();
    defs.extend(t.constraints.iter().map(|c| c.to_string()));
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(t.name),
        defs.join(",\n  ")
    )
}

fn create_index_sql(idx: &IndexDef) -> String {
    let cols: Vec<String> = idx.columns.iter().map(|c| quote(c)).collect();
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
        quote(idx.name),
        quote(idx.table),
        cols.join(", ")
    )
}

/// Create all tables and indexes in one transaction.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for t in TABLES {
        let sql = create_table_sql(t);
        tracing::debug!(table = t.name, "ensure table");
        sqlx::query(&sql).execute(&mut *tx).await?;
    }
    for idx in INDEXES {
        sqlx::query(&create_index_sql(idx)).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = TABLES.len(), indexes = INDEXES.len(), "schema applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store;

    #[test]
    fn table_sql_includes_constraints() {
        let sql = create_table_sql(&TABLES[2]);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"suppliers\""));
        assert!(sql.contains("CHECK (tier IN ('tier_1', 'tier_2'))"));
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = store::connect(&Settings::in_memory()).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'products', 'suppliers', 'offers', 'events')",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn tier_check_rejects_unknown_values() {
        let pool = store::connect(&Settings::in_memory()).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let res = sqlx::query("INSERT INTO suppliers (name, tier) VALUES ('x', 'tier_9')")
            .execute(&pool)
            .await;
        assert!(res.is_err());
    }
}
