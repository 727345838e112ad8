//! 数据库基础设施

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::config::StorageConfig;
use crate::core::error::RepositoryError;
use crate::domain::{Product, ProductRepository};

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &StorageConfig) -> Result<Self, sqlx::Error> {
        info!("连接数据库: {}", redact_database_url(&config.database_url));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建商品表（不存在时）
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                product_id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                description VARCHAR(500) NOT NULL,
                category VARCHAR(50) NOT NULL,
                price NUMERIC(16, 2) NOT NULL,
                image_data BYTEA,
                image_mime_type VARCHAR(50)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// 隐去连接串中的密码，用于日志输出
pub fn redact_database_url(database_url: &str) -> String {
    const UNPARSABLE: &str = "<无法解析的数据库连接串>";

    let Ok(mut url) = Url::parse(database_url) else {
        return UNPARSABLE.to_string();
    };
    if !url.has_host() {
        return UNPARSABLE.to_string();
    }
    if url.password().is_some() && url.set_password(Some("***")).is_err() {
        return UNPARSABLE.to_string();
    }
    url.to_string()
}

/// PostgreSQL 商品仓储
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn products(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT product_id, name, description, category, price, image_data, image_mime_type \
             FROM products ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT product_id, name, description, category, price, image_data, image_mime_type \
             FROM products WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save_product(&self, product: Product) -> Result<Product, RepositoryError> {
        if product.is_new() {
            let saved = sqlx::query_as::<_, Product>(
                "INSERT INTO products (name, description, category, price, image_data, image_mime_type) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING product_id, name, description, category, price, image_data, image_mime_type",
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.category)
            .bind(product.price)
            .bind(&product.image_data)
            .bind(&product.image_mime_type)
            .fetch_one(&self.pool)
            .await?;

            return Ok(saved);
        }

        // 未携带图片时保留原图
        let saved = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, description = $3, category = $4, price = $5, \
             image_data = CASE WHEN $6::BYTEA IS NULL THEN image_data ELSE $6 END, \
             image_mime_type = CASE WHEN $6::BYTEA IS NULL THEN image_mime_type ELSE $7 END \
             WHERE product_id = $1 \
             RETURNING product_id, name, description, category, price, image_data, image_mime_type",
        )
        .bind(product.product_id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.category)
        .bind(product.price)
        .bind(&product.image_data)
        .bind(&product.image_mime_type)
        .fetch_optional(&self.pool)
        .await?;

        saved.ok_or(RepositoryError::NotFound(product.product_id))
    }

    async fn delete_product(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let removed = sqlx::query_as::<_, Product>(
            "DELETE FROM products WHERE product_id = $1 \
             RETURNING product_id, name, description, category, price, image_data, image_mime_type",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(removed)
    }
}
