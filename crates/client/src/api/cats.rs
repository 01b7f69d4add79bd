//! Cat catalog endpoints.

use reqwest::Method;
use reqwest::multipart::{Form, Part};

use pawsome_core::CatId;

use crate::models::Cat;

use super::cache::{CacheKey, CacheValue};
use super::types::CatInput;
use super::{ApiClient, ApiError};

/// Typed bindings for `/cats/*`.
pub struct CatsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CatsApi<'a> {
    pub(super) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /cats` - the full adoptable-cat listing (cached, 5 minute TTL).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the call fails.
    pub async fn list(&self) -> Result<Vec<Cat>, ApiError> {
        if let Some(CacheValue::Cats(cats)) = self.client.cache_get(&CacheKey::Cats).await {
            return Ok(cats);
        }

        let cats: Vec<Cat> = self.client.get("/cats").await?;
        self.client
            .cache_insert(CacheKey::Cats, CacheValue::Cats(cats.clone()))
            .await;
        Ok(cats)
    }

    /// `GET /cats/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the cat does not exist or the call fails.
    pub async fn get(&self, id: &CatId) -> Result<Cat, ApiError> {
        self.client.get(&format!("/cats/{id}")).await
    }

    /// `POST /cats` - add a cat to the catalog (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin, the image cannot be
    /// read, or the call fails.
    pub async fn create(&self, input: CatInput) -> Result<Cat, ApiError> {
        let form = cat_form(input).await?;
        let cat = self.client.send_multipart(Method::POST, "/cats", form).await?;
        self.client.invalidate_cats().await;
        Ok(cat)
    }

    /// `PUT /cats/{id}` - update a catalog entry (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin, the image cannot be
    /// read, or the call fails.
    pub async fn update(&self, id: &CatId, input: CatInput) -> Result<Cat, ApiError> {
        let form = cat_form(input).await?;
        let cat = self
            .client
            .send_multipart(Method::PUT, &format!("/cats/{id}"), form)
            .await?;
        self.client.invalidate_cats().await;
        Ok(cat)
    }

    /// `DELETE /cats/{id}` (back-office).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the caller is not an admin or the call fails.
    pub async fn delete(&self, id: &CatId) -> Result<(), ApiError> {
        self.client.delete(&format!("/cats/{id}")).await?;
        self.client.invalidate_cats().await;
        Ok(())
    }
}

/// Build the multipart body the backend's upload middleware expects:
/// flat text fields, `traits` as a JSON string, optional `image` file part.
async fn cat_form(input: CatInput) -> Result<Form, ApiError> {
    let traits = serde_json::json!({
        "energyLevel": input.energy_level,
        "maintenanceLevel": input.maintenance_level,
        "personality": input.personality,
        "goodWithKids": input.good_with_kids,
    });

    let mut form = Form::new()
        .text("name", input.name)
        .text("breed", input.breed)
        .text("age", input.age.to_string())
        .text("gender", input.gender)
        .text("description", input.description)
        .text("adoptionFee", input.adoption_fee.to_string())
        .text("traits", traits.to_string());

    if let Some(path) = input.image {
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        let bytes = tokio::fs::read(&path).await?;
        form = form.part("image", Part::bytes(bytes).file_name(file_name));
    }

    Ok(form)
}
