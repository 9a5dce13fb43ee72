use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::{
    dto::products::{ProductFilters, ProductPayload},
    entity::{
        categories::{self, Entity as Categories},
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::Product,
};

pub async fn get_products(conn: &DatabaseConnection) -> AppResult<Vec<Product>> {
    Products::find()
        .find_also_related(Categories)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(with_category)
        .collect()
}

pub async fn get_product_by_id(conn: &DatabaseConnection, id: i32) -> AppResult<Option<Product>> {
    Products::find_by_id(id)
        .find_also_related(Categories)
        .one(conn)
        .await?
        .map(with_category)
        .transpose()
}

/// Insert a product; the store assigns the id and the creation time is
/// stamped here, never by the caller.
pub async fn insert_product(
    conn: &DatabaseConnection,
    payload: ProductPayload,
) -> AppResult<Product> {
    let category = require_category(conn, payload.category_id).await?;
    let active = ActiveModel {
        id: NotSet,
        description: Set(payload.description),
        quantity: Set(payload.quantity),
        price: Set(payload.price),
        category_id: Set(category.id),
        created_at: Set(Utc::now().into()),
    };
    let product = active.insert(conn).await?;
    tracing::info!(product_id = product.id, "product inserted");

    Ok(Product::from_entity(product, category))
}

/// Replace every field of an existing product except its id and creation
/// time. Returns `None` when no product has the given id.
pub async fn update_product(
    conn: &DatabaseConnection,
    payload: ProductPayload,
    id: i32,
) -> AppResult<Option<Product>> {
    let Some(existing) = Products::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    let category = require_category(conn, payload.category_id).await?;

    let mut active: ActiveModel = existing.into();
    active.description = Set(payload.description);
    active.quantity = Set(payload.quantity);
    active.price = Set(payload.price);
    active.category_id = Set(category.id);

    let product = active.update(conn).await?;
    tracing::info!(product_id = product.id, "product updated");

    Ok(Some(Product::from_entity(product, category)))
}

pub async fn delete_product(conn: &DatabaseConnection, id: i32) -> AppResult<bool> {
    let result = Products::delete_by_id(id).exec(conn).await?;
    let deleted = result.rows_affected > 0;
    tracing::info!(product_id = id, deleted, "product delete requested");
    Ok(deleted)
}

/// Products matching every supplied filter. Absent filters match
/// everything, so an empty filter set returns the full list.
pub async fn get_by_filters(
    conn: &DatabaseConnection,
    filters: ProductFilters,
) -> AppResult<Vec<Product>> {
    let filters = filters.normalized();
    let mut condition = Condition::all();

    if let Some(description) = &filters.description {
        condition = condition.add(contains_ignoring_case(
            Expr::col((Products, Column::Description)),
            description,
        ));
    }

    if let Some(category) = &filters.category {
        condition = condition.add(
            SimpleExpr::from(Func::lower(Expr::col((Categories, categories::Column::Name))))
                .eq(Func::lower(Expr::val(category.as_str()))),
        );
    }

    if let Some(quantity) = filters.quantity {
        condition = condition.add(Column::Quantity.eq(quantity));
    }

    tracing::debug!(?filters, "filtering products");

    Products::find()
        .find_also_related(Categories)
        .filter(condition)
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(with_category)
        .collect()
}

async fn require_category(conn: &DatabaseConnection, id: i32) -> AppResult<categories::Model> {
    Categories::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("unknown category {id}")))
}

fn with_category(
    (product, category): (ProductModel, Option<categories::Model>),
) -> AppResult<Product> {
    let category = category.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "product {} references a missing category",
            product.id
        ))
    })?;
    Ok(Product::from_entity(product, category))
}

const LIKE_ESCAPE: char = '\\';

/// `LOWER(column) LIKE LOWER('%needle%') ESCAPE '\'`. Both sides are folded
/// by the database so they agree on every backend, and `%`/`_` in the
/// needle match literally.
fn contains_ignoring_case(column: impl Into<SimpleExpr>, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(needle));
    SimpleExpr::from(Func::lower(column)).binary(
        BinOper::Like,
        SimpleExpr::Binary(
            Box::new(Func::lower(Expr::val(pattern)).into()),
            BinOper::Escape,
            Box::new(SimpleExpr::Constant(LIKE_ESCAPE.into())),
        ),
    )
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_metacharacters_are_escaped() {
        assert_eq!(escape_like("50% off"), r"50\% off");
        assert_eq!(escape_like("w_dget"), r"w\_dget");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
