//! Product entity - A grocery item listed in the storefront catalog.
//!
//! Rows are owned by the backend; the storefront only reads them. Each product has a
//! display name, a unit price, an optional category and a featured flag used by the
//! landing page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Stable identifier, never reused
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Display name (e.g., "Fresh Apples")
    pub name: String,
    /// Optional long description, searched alongside the name
    pub description: Option<String>,
    /// Price per unit in dollars
    pub price: f64,
    /// Unit the price refers to (e.g., "kg", "piece")
    pub unit: String,
    /// Category this product belongs to, None when uncategorized
    pub category_id: Option<String>,
    /// Units on hand, informational only
    pub stock_quantity: i32,
    /// Product photo, renderers fall back to a placeholder
    pub image_url: Option<String>,
    /// Whether the product appears in the landing page's featured section
    pub is_featured: bool,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product optionally belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
