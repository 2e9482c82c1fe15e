//! `SeaORM` Entity for the blog post table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_noticia")]
    pub id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "idioma")]
    pub language: String,
    pub slug: String,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "contenido", column_type = "Text")]
    pub body: String,
    #[sea_orm(column_name = "autor")]
    pub author: String,
    #[sea_orm(column_name = "imagen_url")]
    pub image_url: String,
    #[sea_orm(column_name = "imagen_url_2", nullable)]
    pub image_url_2: Option<String>,
    #[sea_orm(column_name = "fecha_publicacion")]
    pub published_at: DateTime,
    #[sea_orm(column_name = "fecha_actualizacion", nullable)]
    pub updated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
