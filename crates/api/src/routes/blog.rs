//! Blog routes.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::products::LanguageQuery;
use crate::{AppState, error::ApiError};
use paraiso_db::entities::posts;
use paraiso_shared::AppError;

const NOT_FOUND: &str = "Blog not found";

/// `?idioma=` that must be present.
#[derive(Debug, Deserialize)]
pub struct RequiredLanguageQuery {
    /// Language code.
    pub idioma: String,
}

/// A blog post as served to the frontend.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post id, shared by all translations.
    pub id_noticia: i32,
    /// Language code.
    pub idioma: String,
    /// URL slug.
    pub slug: String,
    /// Title.
    pub titulo: String,
    /// Body (HTML).
    pub contenido: String,
    /// Author.
    pub autor: String,
    /// Main image URL.
    pub imagen_url: String,
    /// Secondary image URL.
    pub imagen_url_2: Option<String>,
    /// Publication time, as stored (no offset).
    pub fecha_publicacion: NaiveDateTime,
    /// Last edit time, as stored (no offset).
    pub fecha_actualizacion: Option<NaiveDateTime>,
}

impl From<posts::Model> for PostResponse {
    fn from(model: posts::Model) -> Self {
        Self {
            id_noticia: model.id,
            idioma: model.language,
            slug: model.slug,
            titulo: model.title,
            contenido: model.body,
            autor: model.author,
            imagen_url: model.image_url,
            imagen_url_2: model.image_url_2,
            fecha_publicacion: model.published_at,
            fecha_actualizacion: model.updated_at,
        }
    }
}

fn found(post: Option<posts::Model>) -> Result<Json<PostResponse>, ApiError> {
    post.map(|post| Json(post.into()))
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()).into())
}

/// GET `/blog?idioma=`
/// Posts in one language, most recently changed first.
async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let Query(query) = query?;
    let posts = state.posts().list_by_language(query.language()).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET `/blog/{slug}?idioma=`
/// The language is optional here.
async fn get_post_by_slug(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let Path(slug) = path?;
    let Query(query) = query?;
    found(
        state
            .posts()
            .find_by_slug(&slug, query.idioma.as_deref())
            .await?,
    )
}

/// GET `/blog/by-id/{id}?idioma=`
async fn get_post_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<RequiredLanguageQuery>, QueryRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let Path(id) = path?;
    let Query(query) = query?;
    found(state.posts().find_by_id(id, &query.idioma).await?)
}

/// Creates the blog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/blog/by-id/{id}", get(get_post_by_id))
        .route("/blog/{slug}", get(get_post_by_slug))
}
