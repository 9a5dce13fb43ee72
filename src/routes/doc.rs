use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::CategoryList,
        products::{ProductFilters, ProductList, ProductPayload},
    },
    models::{Category, Product},
    response::{ApiResponse, Meta},
    routes::{categories, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::filter_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        categories::list_categories,
        categories::get_category,
    ),
    components(
        schemas(
            Product,
            Category,
            ProductPayload,
            ProductFilters,
            ProductList,
            CategoryList,
            Meta,
            ApiResponse<Product>,
            ApiResponse<Category>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Stock item endpoints"),
        (name = "Categories", description = "Category endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
