use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{categories, products};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// A stock item as exchanged over the API. An `id` of zero marks a draft
/// that the store has not assigned an identity to yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub description: String,
    pub quantity: i32,
    pub price: Decimal,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn is_draft(&self) -> bool {
        self.id == 0
    }

    pub fn from_entity(model: products::Model, category: categories::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            quantity: model.quantity,
            price: model.price,
            category: category.into(),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
