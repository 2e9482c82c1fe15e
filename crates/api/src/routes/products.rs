//! Product (charcutería) routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{AppState, error::ApiError};
use paraiso_db::entities::products;

/// Language used when `idioma` is omitted.
pub const DEFAULT_LANGUAGE: &str = "es";

/// `?idioma=` with a default.
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    /// Language code.
    pub idioma: Option<String>,
}

impl LanguageQuery {
    /// Returns the requested language or `es`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.idioma.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// A product as served to the frontend.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    /// Product id, shared by all translations.
    pub id_producto: i32,
    /// Language code.
    pub idioma: String,
    /// Product name.
    pub nombre: String,
    /// Producer, if any.
    pub empresa: Option<String>,
    /// Description.
    pub descripcion: String,
    /// Image URL.
    pub imagen_url: String,
    /// Category.
    pub categoria: String,
    /// Creation time.
    pub fecha: DateTime<FixedOffset>,
}

impl From<products::Model> for ProductResponse {
    fn from(model: products::Model) -> Self {
        Self {
            id_producto: model.id,
            idioma: model.language,
            nombre: model.name,
            empresa: model.company,
            descripcion: model.description,
            imagen_url: model.image_url,
            categoria: model.category,
            fecha: model.created_at,
        }
    }
}

/// GET `/charcuteria?idioma=`
async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let Query(query) = query?;
    let products = state.products().list_by_language(query.language()).await?;

    debug!(language = %query.language(), count = products.len(), "Listed products");
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/charcuteria", get(list_products))
}
