//! Schema bootstrap for the books table

use sqlx::PgPool;

use crate::Result;

/// Create the `books` table if it does not exist.
///
/// Safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running book migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            author TEXT NOT NULL DEFAULT '',
            title TEXT NOT NULL DEFAULT '',
            publisher TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Book migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("connect failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");

        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = 'books')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");

        assert!(exists.0);
    }
}
