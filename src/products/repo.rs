use sqlx::PgPool;
use uuid::Uuid;

use crate::products::dto::ProductPayload;
use crate::products::repo_types::Product;

impl Product {
    /// All products. No ordering contract.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, img, created_at, updated_at
            FROM products
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// Insert the payload as-is and return the stored record with its
    /// assigned id.
    pub async fn insert(db: &PgPool, fields: &ProductPayload) -> sqlx::Result<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, img)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, img, created_at, updated_at
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.price)
        .bind(fields.img.as_deref())
        .fetch_one(db)
        .await
    }

    /// Apply the provided fields to an existing record; absent fields keep
    /// their stored value. `None` means no row matched the id.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        fields: &ProductPayload,
    ) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                img = COALESCE($4, img),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, price, img, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(fields.name.as_deref())
        .bind(fields.price)
        .bind(fields.img.as_deref())
        .fetch_optional(db)
        .await
    }

    /// Remove a record, reporting whether anything was deleted.
    pub async fn delete(db: &PgPool, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
