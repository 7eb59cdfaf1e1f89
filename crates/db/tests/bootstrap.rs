use estate_db::seed;
use estate_db::storage::{PgStorage, Storage};
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_full_bootstrap(pool: PgPool) {
    estate_db::health_check(&pool).await.unwrap();

    let tables = [
        "locations",
        "neighborhoods",
        "properties",
        "property_units",
        "property_images",
        "unit_images",
        "inquiries",
        "image_storage",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Demo seed writes once into an empty database.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_seed_if_empty(pool: PgPool) {
    let store = PgStorage::new(pool);
    let summary = seed::seed_if_empty(&store).await.unwrap().unwrap();
    assert_eq!(store.list_locations().await.unwrap().len(), summary.locations);
    assert!(seed::seed_if_empty(&store).await.unwrap().is_none());
}

/// Inquiry status is constrained in the schema, not only in the API.
#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn test_inquiry_status_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO inquiries (name, email, message, status)
         VALUES ('A', 'a@example.com', 'hi', 'archived')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
