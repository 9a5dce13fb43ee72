//! Service layer the view-models talk to.
//!
//! Failures never reach the caller as errors: lists come back empty,
//! lookups come back `None` and deletes report `false`. The underlying
//! cause is only logged.

use async_trait::async_trait;

use crate::{
    client::api::{ApiClient, ClientResult},
    dto::products::{ProductFilters, ProductPayload},
    models::{Category, Product},
};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_products(&self) -> Vec<Product>;

    async fn get_products_filtered(&self, filters: &ProductFilters) -> Vec<Product>;

    async fn get_product_by_id(&self, id: i32) -> Option<Product>;

    /// Returns the stored product, with its id and creation time assigned.
    async fn insert_product(&self, product: &Product) -> Option<Product>;

    async fn update_product(&self, id: i32, product: &Product) -> Option<Product>;

    async fn delete_product(&self, id: i32) -> bool;
}

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn get_categories(&self) -> Vec<Category>;

    async fn get_category_by_id(&self, id: i32) -> Option<Category>;
}

#[derive(Debug, Clone)]
pub struct HttpProductService {
    client: ApiClient,
}

impl HttpProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn get_products(&self) -> Vec<Product> {
        let result = self.client.get::<Vec<Product>>("v1/products").await;
        collapse("get products", result).unwrap_or_default()
    }

    async fn get_products_filtered(&self, filters: &ProductFilters) -> Vec<Product> {
        let result = self
            .client
            .get_with_query::<Vec<Product>, _>("v1/products/filters", filters)
            .await;
        collapse("filter products", result).unwrap_or_default()
    }

    async fn get_product_by_id(&self, id: i32) -> Option<Product> {
        let result = self.client.get(&format!("v1/products/{id}")).await;
        collapse("get product", result)
    }

    async fn insert_product(&self, product: &Product) -> Option<Product> {
        let payload = ProductPayload::from(product);
        collapse(
            "insert product",
            self.client.post("v1/products", &payload).await,
        )
    }

    async fn update_product(&self, id: i32, product: &Product) -> Option<Product> {
        let payload = ProductPayload::from(product);
        let result = self
            .client
            .put(&format!("v1/products/{id}"), &payload)
            .await;
        collapse("update product", result)
    }

    async fn delete_product(&self, id: i32) -> bool {
        let result = self.client.delete(&format!("v1/products/{id}")).await;
        collapse("delete product", result).is_some()
    }
}

#[derive(Debug, Clone)]
pub struct HttpCategoryService {
    client: ApiClient,
}

impl HttpCategoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryService for HttpCategoryService {
    async fn get_categories(&self) -> Vec<Category> {
        let result = self.client.get::<Vec<Category>>("v1/categories").await;
        collapse("get categories", result).unwrap_or_default()
    }

    async fn get_category_by_id(&self, id: i32) -> Option<Category> {
        let result = self.client.get(&format!("v1/categories/{id}")).await;
        collapse("get category", result)
    }
}

fn collapse<T>(operation: &'static str, result: ClientResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(operation, error = %err, "stock api call failed");
            None
        }
    }
}
