#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum_stock_api::{
    client::{CategoryService, Notice, Notifier, ProductService},
    db::{create_orm_conn, run_migrations},
    dto::products::{ProductFilters, ProductPayload},
    models::{Category, Product},
    repository::categories::insert_category,
    state::AppState,
};
use rust_decimal::Decimal;

/// Fresh in-memory store with every migration applied. A single connection
/// keeps all queries on the same SQLite memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub struct Seeded {
    pub hardware: Category,
    pub tools: Category,
}

pub async fn seed_categories(state: &AppState) -> anyhow::Result<Seeded> {
    Ok(Seeded {
        hardware: insert_category(&state.orm, "Hardware").await?,
        tools: insert_category(&state.orm, "Tools").await?,
    })
}

pub fn payload(description: &str, quantity: i32, price: Decimal, category: &Category) -> ProductPayload {
    ProductPayload {
        description: description.to_string(),
        quantity,
        price,
        category_id: category.id,
    }
}

/// Product service double that records every mutating call.
#[derive(Default)]
pub struct FakeProducts {
    pub stored: Mutex<Vec<Product>>,
    pub mutations: AtomicUsize,
    pub fail: bool,
}

impl FakeProducts {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductService for &FakeProducts {
    async fn get_products(&self) -> Vec<Product> {
        self.stored.lock().unwrap().clone()
    }

    async fn get_products_filtered(&self, filters: &ProductFilters) -> Vec<Product> {
        self.stored
            .lock()
            .unwrap()
            .iter()
            .filter(|p| filters.quantity.is_none_or(|q| p.quantity == q))
            .cloned()
            .collect()
    }

    async fn get_product_by_id(&self, id: i32) -> Option<Product> {
        self.stored.lock().unwrap().iter().find(|p| p.id == id).cloned()
    }

    async fn insert_product(&self, product: &Product) -> Option<Product> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return None;
        }
        let mut stored = self.stored.lock().unwrap();
        let product = Product {
            id: stored.len() as i32 + 1,
            ..product.clone()
        };
        stored.push(product.clone());
        Some(product)
    }

    async fn update_product(&self, id: i32, product: &Product) -> Option<Product> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return None;
        }
        let mut stored = self.stored.lock().unwrap();
        let slot = stored.iter_mut().find(|p| p.id == id)?;
        *slot = Product {
            id,
            created_at: slot.created_at,
            ..product.clone()
        };
        Some(slot.clone())
    }

    async fn delete_product(&self, id: i32) -> bool {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return false;
        }
        let mut stored = self.stored.lock().unwrap();
        let before = stored.len();
        stored.retain(|p| p.id != id);
        stored.len() < before
    }
}

pub struct FakeCategories(pub Vec<Category>);

#[async_trait]
impl CategoryService for FakeCategories {
    async fn get_categories(&self) -> Vec<Category> {
        self.0.clone()
    }

    async fn get_category_by_id(&self, id: i32) -> Option<Category> {
        self.0.iter().find(|c| c.id == id).cloned()
    }
}

/// Notifier that answers confirmations with a fixed reply and keeps every notice.
pub struct RecordingNotifier {
    pub answer: bool,
    pub questions: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
        }
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for &RecordingNotifier {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer
    }

    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
