use tokio::sync::watch;

use crate::{
    client::{
        service::{CategoryService, ProductService},
        state::{Command, Effect, ItemDetailState, Notice, NoticeLevel},
    },
    models::{Category, Product},
};

/// Dialog surface of the front end.
pub trait Notifier: Send + Sync {
    /// Ask a yes/no question; `true` means the user agreed.
    fn confirm(&self, question: &str) -> bool;

    fn notify(&self, notice: &Notice);
}

/// Runtime around [`ItemDetailState`]: runs the effect a command asks for
/// and publishes every new state to subscribers.
///
/// `dispatch` borrows the view-model mutably, so a command's API call has
/// always finished before the next command is looked at.
pub struct ItemDetailViewModel<P, C, N> {
    products: P,
    categories: C,
    notifier: N,
    state: watch::Sender<ItemDetailState>,
}

impl<P, C, N> ItemDetailViewModel<P, C, N>
where
    P: ProductService,
    C: CategoryService,
    N: Notifier,
{
    pub async fn new(products: P, categories: C, notifier: N) -> Self {
        let initial = ItemDetailState::with_categories(categories.get_categories().await);
        let (state, _) = watch::channel(initial);
        Self {
            products,
            categories,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> ItemDetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ItemDetailState> {
        self.state.subscribe()
    }

    pub async fn reload_categories(&mut self) {
        let categories = self.categories.get_categories().await;
        self.publish(self.state().replace_categories(categories));
    }

    pub fn select_product(&mut self, product: Option<Product>) {
        self.publish(self.state().select(product));
    }

    pub fn edit_product(&mut self, edit: impl FnOnce(&mut Product)) {
        self.publish(self.state().edit_product(edit));
    }

    pub fn select_category(&mut self, category: Category) {
        self.publish(self.state().select_category(category));
    }

    pub async fn dispatch(&mut self, command: Command) {
        tracing::debug!(?command, "dispatching command");
        let transition = command.handler()(&self.state());
        self.publish(transition.state);
        if let Some(effect) = transition.effect {
            self.run(effect).await;
        }
    }

    async fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(notice) => self.notify(&notice),
            Effect::Insert(product) => {
                let stored = self.products.insert_product(&product).await;
                let (next, notice) = self.state().insert_completed(stored);
                self.publish(next);
                self.notify(&notice);
            }
            Effect::Update(product) => {
                let stored = self.products.update_product(product.id, &product).await;
                let (next, notice) = self.state().update_completed(stored);
                self.publish(next);
                self.notify(&notice);
            }
            Effect::ConfirmDelete(id) => {
                let question = format!("Are you sure you want to delete product with id {id}?");
                if !self.notifier.confirm(&question) {
                    return;
                }
                let deleted = self.products.delete_product(id).await;
                self.notify(&ItemDetailState::delete_completed(id, deleted));
            }
        }
    }

    fn publish(&self, next: ItemDetailState) {
        self.state.send_replace(next);
    }

    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => tracing::info!(notice = %notice.message, "user notified"),
            NoticeLevel::Error => tracing::warn!(notice = %notice.message, "user notified"),
        }
        self.notifier.notify(notice);
    }
}
