use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::{IntoParams, ToSchema};

use crate::models::Product;

/// Body of both `POST /v1/products` and `PUT /v1/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    pub description: String,
    pub quantity: i32,
    pub price: Decimal,
    pub category_id: i32,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            description: product.description.clone(),
            quantity: product.quantity,
            price: product.price,
            category_id: product.category.id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductFilters {
    /// Case-insensitive substring of the description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category name, matched case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exact quantity.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<i32>,
}

impl ProductFilters {
    /// Text filters are trimmed at both ends, and a filter left empty
    /// counts as absent. Description and category follow the same rule.
    pub fn normalized(self) -> Self {
        let keep = |s: Option<String>| {
            s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
        };
        Self {
            description: keep(self.description),
            category: keep(self.category),
            quantity: self.quantity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.category.is_none() && self.quantity.is_none()
    }
}

/// Query strings carry `quantity=` for an unset field, so an empty value
/// means no filter rather than a parse failure.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => match text.trim() {
            "" => Ok(None),
            digits => digits.parse().map(Some).map_err(de::Error::custom),
        },
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
