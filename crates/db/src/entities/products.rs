//! `SeaORM` Entity for the product (charcutería) table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charcuteria")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "id_producto")]
    pub id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "idioma")]
    pub language: String,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "empresa", nullable)]
    pub company: Option<String>,
    #[sea_orm(column_name = "descripcion", column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "imagen_url")]
    pub image_url: String,
    #[sea_orm(column_name = "categoria")]
    pub category: String,
    #[sea_orm(column_name = "fecha")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
