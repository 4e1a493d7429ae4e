//! Data access for the stocks table. Each function runs exactly one
//! statement.

use sqlx::PgPool;

use crate::models::{Stock, StockPayload};

pub async fn insert_stock(pool: &PgPool, stock: &StockPayload) -> Result<i32, sqlx::Error> {
    let id: i32 = sqlx::query_scalar(
        "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
    )
    .bind(&stock.name)
    .bind(stock.price)
    .bind(&stock.company)
    .fetch_one(pool)
    .await?;

    tracing::info!(id, "inserted a single record");
    Ok(id)
}

/// `None` when no row has this id.
pub async fn get_stock(pool: &PgPool, id: i32) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>(
        "SELECT stockid, name, price, company FROM stocks WHERE stockid = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_stocks(pool: &PgPool) -> Result<Vec<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT stockid, name, price, company FROM stocks")
        .fetch_all(pool)
        .await
}

/// Returns the number of rows affected; 0 when the id does not exist.
pub async fn update_stock(
    pool: &PgPool,
    id: i32,
    stock: &StockPayload,
) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1")
        .bind(id)
        .bind(&stock.name)
        .bind(stock.price)
        .bind(&stock.company)
        .execute(pool)
        .await?
        .rows_affected();

    tracing::info!(id, rows, "updated stock");
    Ok(rows)
}

pub async fn delete_stock(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM stocks WHERE stockid = $1")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();

    tracing::info!(id, rows, "deleted stock");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::database_pool;

    // Tests share one database; each tags its rows with a unique company
    // so concurrent runs don't see each other's data.
    fn payload(name: &str, price: i32, company: &str) -> StockPayload {
        StockPayload {
            name: name.into(),
            price,
            company: company.into(),
        }
    }

    fn unique_company(test: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("{}-{}-{}", test, std::process::id(), nanos)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_round_trips() {
        let pool = database_pool().await;
        let company = unique_company("round-trip");
        let id = insert_stock(&pool, &payload("Tesla", 900, &company)).await.unwrap();

        let stock = get_stock(&pool, id).await.unwrap().expect("stock should exist");
        assert_eq!(
            stock,
            Stock {
                id,
                name: "Tesla".into(),
                price: 900,
                company,
            }
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn repeated_reads_are_identical() {
        let pool = database_pool().await;
        let id = insert_stock(&pool, &payload("Ford", 12, &unique_company("reads")))
            .await
            .unwrap();

        let first = get_stock(&pool, id).await.unwrap();
        let second = get_stock(&pool, id).await.unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_touches_only_the_target_row() {
        let pool = database_pool().await;
        let company = unique_company("update");
        let target = insert_stock(&pool, &payload("A", 1, &company)).await.unwrap();
        let other = insert_stock(&pool, &payload("B", 2, &company)).await.unwrap();
        let other_before = get_stock(&pool, other).await.unwrap();

        let rows = update_stock(&pool, target, &payload("A2", 10, &company)).await.unwrap();
        assert_eq!(rows, 1);

        let updated = get_stock(&pool, target).await.unwrap().unwrap();
        assert_eq!(updated.name, "A2");
        assert_eq!(updated.price, 10);
        assert_eq!(updated.id, target);
        assert_eq!(get_stock(&pool, other).await.unwrap(), other_before);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_affects_nothing() {
        let pool = database_pool().await;
        let rows = update_stock(&pool, -1, &payload("ghost", 0, "none")).await.unwrap();
        assert_eq!(rows, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_exactly_one_row() {
        let pool = database_pool().await;
        let company = unique_company("delete");
        let doomed = insert_stock(&pool, &payload("X", 1, &company)).await.unwrap();
        let survivor = insert_stock(&pool, &payload("Y", 2, &company)).await.unwrap();

        assert_eq!(delete_stock(&pool, doomed).await.unwrap(), 1);
        assert!(get_stock(&pool, doomed).await.unwrap().is_none());
        assert!(get_stock(&pool, survivor).await.unwrap().is_some());

        assert_eq!(delete_stock(&pool, doomed).await.unwrap(), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_contains_every_inserted_stock() {
        let pool = database_pool().await;
        let company = unique_company("list");
        let mut inserted = Vec::new();
        for (i, name) in ["Apple", "Banana", "Cherry"].iter().enumerate() {
            let price = (i as i32 + 1) * 100;
            let id = insert_stock(&pool, &payload(name, price, &company)).await.unwrap();
            inserted.push(Stock {
                id,
                name: name.to_string(),
                price,
                company: company.clone(),
            });
        }

        let mut listed: Vec<Stock> = list_stocks(&pool)
            .await
            .unwrap()
            .into_iter()
            .filter(|s| s.company == company)
            .collect();
        listed.sort_by_key(|s| s.id);
        inserted.sort_by_key(|s| s.id);
        assert_eq!(listed, inserted);
    }
}
