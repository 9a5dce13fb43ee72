use tokio::sync::watch;

use crate::{
    client::service::ProductService,
    dto::products::ProductFilters,
    models::Product,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub filters: ProductFilters,
}

/// Backs the product grid: the current list and the filters that produced it.
pub struct ProductListViewModel<P> {
    products: P,
    state: watch::Sender<ProductListState>,
}

impl<P: ProductService> ProductListViewModel<P> {
    pub fn new(products: P) -> Self {
        let (state, _) = watch::channel(ProductListState::default());
        Self { products, state }
    }

    pub fn state(&self) -> ProductListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProductListState> {
        self.state.subscribe()
    }

    /// Reload using the active filters; with none set this is the full list.
    pub async fn refresh(&mut self) {
        let filters = self.state().filters;
        let products = if filters.is_empty() {
            self.products.get_products().await
        } else {
            self.products.get_products_filtered(&filters).await
        };
        tracing::debug!(count = products.len(), "product list refreshed");
        self.state.send_replace(ProductListState { products, filters });
    }

    pub async fn apply_filters(&mut self, filters: ProductFilters) {
        self.state.send_modify(|state| state.filters = filters.normalized());
        self.refresh().await;
    }

    pub async fn clear_filters(&mut self) {
        self.apply_filters(ProductFilters::default()).await;
    }

    /// The listed product with `id`, ready to hand to the detail view.
    pub fn find(&self, id: i32) -> Option<Product> {
        self.state.borrow().products.iter().find(|p| p.id == id).cloned()
    }
}
