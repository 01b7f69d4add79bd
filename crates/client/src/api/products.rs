//! Product catalog endpoints.

use reqwest::Method;
use reqwest::multipart::{Form, Part};

use pawsome_core::ProductId;

use crate::models::Product;

use super::cache::{CacheKey, CacheValue};
use super::types::{ProductInput, ProductQuery};
use super::{ApiClient, ApiError};

/// Typed bindings for `/products/*`.
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /products` - the product listing, optionally filtered
    /// (cached per filter, 5 minute TTL).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let key = CacheKey::Products {
            category: query.category.clone(),
        };
        if let Some(CacheValue::Products(products)) = self.client.cache_get(&key).await {
            return Ok(products);
        }

        let products: Vec<Product> = self.client.get_with_query("/products", query).await?;
        self.client
            .cache_insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the product does not exist or the call fails.
    pub async fn get(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.client.get(&format!("/products/{id}")).await
    }

    /// `POST /products` - add a product (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin, the image cannot be
    /// read, or the call fails.
    pub async fn create(&self, input: ProductInput) -> Result<Product, ApiError> {
        let form = product_form(input).await?;
        let product = self
            .client
            .send_multipart(Method::POST, "/products", form)
            .await?;
        self.client.invalidate_products().await;
        Ok(product)
    }

    /// `PUT /products/{id}` - update a product (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin, the image cannot be
    /// read, or the call fails.
    pub async fn update(&self, id: &ProductId, input: ProductInput) -> Result<Product, ApiError> {
        let form = product_form(input).await?;
        let product = self
            .client
            .send_multipart(Method::PUT, &format!("/products/{id}"), form)
            .await?;
        self.client.invalidate_products().await;
        Ok(product)
    }

    /// `DELETE /products/{id}` (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        self.client.delete(&format!("/products/{id}")).await?;
        self.client.invalidate_products().await;
        Ok(())
    }
}

/// Build the multipart body for product create/update.
async fn product_form(input: ProductInput) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", input.name)
        .text("description", input.description)
        .text("price", input.price.to_string())
        .text("category", input.category)
        .text("stock", input.stock.to_string())
        .text("isActive", input.is_active.to_string());

    if let Some(path) = input.image {
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        let bytes = tokio::fs::read(&path).await?;
        form = form.part("image", Part::bytes(bytes).file_name(file_name));
    }

    Ok(form)
}
