//! Schema creation and seed data for the todos table

use sqlx::{PgPool, Postgres, QueryBuilder};

use super::DbError;

/// Fixed record inserted into an empty table at startup
#[derive(Debug, Clone, Copy)]
pub struct SeedTodo {
    pub title: &'static str,
    pub description: &'static str,
}

/// Seed records, in insertion order.
pub const SEED_TODOS: [SeedTodo; 3] = [
    SeedTodo {
        title: "Reading",
        description: "Read 'FastAPI Documentation'",
    },
    SeedTodo {
        title: "Workout",
        description: "Perform a 30-minute workout session",
    },
    SeedTodo {
        title: "Coding",
        description: "Build a FastAPI app for CRUD operations",
    },
];

/// Create the todos table if needed and seed it when empty.
///
/// Returns the number of seed rows inserted (0 when the table already had
/// rows). Safe to call on every start.
pub async fn run(pool: &PgPool) -> Result<u64, DbError> {
    tracing::info!("Ensuring todos table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT,
            completed BOOLEAN DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!(rows = existing, "todos table already populated, skipping seed");
        return Ok(0);
    }

    // Single multi-row INSERT so a fresh sequence hands out ids in seed order
    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO todos (title, description, completed) ");
    builder.push_values(SEED_TODOS.iter(), |mut row, seed| {
        row.push_bind(seed.title)
            .push_bind(seed.description)
            .push_bind(false);
    });

    let inserted = builder.build().execute(pool).await?.rows_affected();
    tracing::info!(rows = inserted, "Seeded todos table");

    Ok(inserted)
}
