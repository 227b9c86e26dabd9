//! Product endpoints

use async_trait::async_trait;
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::{ClientResult, HttpClient};

/// Product resource operations
#[async_trait]
pub trait ProductApi {
    /// All available products (public listing).
    async fn products(&self) -> ClientResult<Vec<Product>>;

    /// A single product by identity.
    async fn product(&self, product_id: i64) -> ClientResult<Product>;

    /// Products owned by one user.
    async fn user_products(&self, user_id: i64) -> ClientResult<Vec<Product>>;

    /// Keyword search over name and description.
    async fn search_products(&self, keyword: &str) -> ClientResult<Vec<Product>>;

    async fn create_product(&self, product: &ProductCreate) -> ClientResult<Product>;

    async fn update_product(&self, product_id: i64, product: &ProductUpdate)
    -> ClientResult<Product>;

    async fn delete_product(&self, product_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl ProductApi for HttpClient {
    async fn products(&self) -> ClientResult<Vec<Product>> {
        self.get("api/products").await
    }

    async fn product(&self, product_id: i64) -> ClientResult<Product> {
        self.get(&format!("api/products/{product_id}")).await
    }

    async fn user_products(&self, user_id: i64) -> ClientResult<Vec<Product>> {
        self.get(&format!("api/users/{user_id}/products")).await
    }

    async fn search_products(&self, keyword: &str) -> ClientResult<Vec<Product>> {
        self.get_query("api/products/search", &[("keyword", keyword)])
            .await
    }

    async fn create_product(&self, product: &ProductCreate) -> ClientResult<Product> {
        self.post("api/products", product).await
    }

    async fn update_product(
        &self,
        product_id: i64,
        product: &ProductUpdate,
    ) -> ClientResult<Product> {
        self.put(&format!("api/products/{product_id}"), product).await
    }

    async fn delete_product(&self, product_id: i64) -> ClientResult<()> {
        self.delete_empty(&format!("api/products/{product_id}")).await
    }
}
