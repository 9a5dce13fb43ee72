use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::{
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::AppResult,
    models::Category,
};

pub async fn get_categories(conn: &DatabaseConnection) -> AppResult<Vec<Category>> {
    let items = Categories::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();
    Ok(items)
}

pub async fn get_category_by_id(conn: &DatabaseConnection, id: i32) -> AppResult<Option<Category>> {
    let category = Categories::find_by_id(id).one(conn).await?;
    Ok(category.map(Category::from))
}

pub async fn insert_category(conn: &DatabaseConnection, name: &str) -> AppResult<Category> {
    let active = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    let category = active.insert(conn).await?;
    tracing::debug!(category_id = category.id, "category inserted");
    Ok(category.into())
}
