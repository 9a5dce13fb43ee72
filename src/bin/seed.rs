use axum_stock_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::{ProductFilters, ProductPayload},
    entity::categories::{Column, Entity as Categories},
    models::Category,
    repository::{categories, products},
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, 1).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let hardware = ensure_category(&orm, "Hardware").await?;
    let tools = ensure_category(&orm, "Tools").await?;
    let electrical = ensure_category(&orm, "Electrical").await?;

    let items = [
        ("Widget", 5, Decimal::new(999, 2), &hardware),
        ("Hex bolt M8", 250, Decimal::new(35, 2), &hardware),
        ("Claw hammer", 12, Decimal::new(2490, 2), &tools),
        ("Cordless drill", 4, Decimal::new(12900, 2), &tools),
        ("Extension cord 10m", 20, Decimal::new(1875, 2), &electrical),
    ];

    for (description, quantity, price, category) in items {
        ensure_product(&orm, description, quantity, price, category).await?;
    }

    println!("Seed completed");
    Ok(())
}

async fn ensure_category(orm: &DatabaseConnection, name: &str) -> anyhow::Result<Category> {
    let existing = Categories::find()
        .filter(Column::Name.eq(name))
        .one(orm)
        .await?;
    let category = match existing {
        Some(model) => model.into(),
        None => categories::insert_category(orm, name).await?,
    };
    println!("Ensured category {name} (id={})", category.id);
    Ok(category)
}

async fn ensure_product(
    orm: &DatabaseConnection,
    description: &str,
    quantity: i32,
    price: Decimal,
    category: &Category,
) -> anyhow::Result<()> {
    let filters = ProductFilters {
        description: Some(description.to_string()),
        ..Default::default()
    };
    let already_seeded = products::get_by_filters(orm, filters)
        .await?
        .iter()
        .any(|p| p.description == description);
    if already_seeded {
        return Ok(());
    }

    let payload = ProductPayload {
        description: description.to_string(),
        quantity,
        price,
        category_id: category.id,
    };
    let product = products::insert_product(orm, payload).await?;
    println!("Seeded product {description} (id={})", product.id);
    Ok(())
}
