//! Editing state of the item detail view.
//!
//! Every UI command is looked up in a dispatch table and handled by a pure
//! function that takes the current state and returns the next one, plus at
//! most one effect for the runtime to carry out. Effects that talk to the
//! API come back through the `*_completed` functions once the call returns.

use crate::models::{Category, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing,
    Inserting,
}

/// The product and category a cancel falls back to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub product: Product,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDetailState {
    pub product: Product,
    pub snapshot: Snapshot,
    pub selected_category: Option<Category>,
    pub categories: Vec<Category>,
    pub mode: EditMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    StartEdition,
    StartInsertion,
    StartDeletion,
    Add,
    Save,
    Cancel,
}

pub type Handler = fn(&ItemDetailState) -> Transition;

impl Command {
    pub fn handler(self) -> Handler {
        match self {
            Command::StartEdition => start_edition,
            Command::StartInsertion => start_insertion,
            Command::StartDeletion => start_deletion,
            Command::Add => add,
            Command::Save => save,
            Command::Cancel => cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Insert(Product),
    Update(Product),
    /// Ask the user, then delete the product with this id.
    ConfirmDelete(i32),
    Notify(Notice),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ItemDetailState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn unchanged(state: &ItemDetailState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
        }
    }
}

impl ItemDetailState {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode != EditMode::Idle
    }

    pub fn is_adding(&self) -> bool {
        self.mode == EditMode::Inserting
    }

    /// Show `product` and remember it for cancel. Ignored while a change is
    /// pending, so the snapshot of the product being edited is never lost.
    pub fn select(&self, product: Option<Product>) -> Self {
        let mut next = self.clone();
        let Some(product) = product else {
            return next;
        };
        if self.is_editing() {
            return next;
        }
        next.selected_category = Some(product.category.clone());
        next.snapshot = Snapshot {
            product: product.clone(),
            category: next.selected_category.clone(),
        };
        next.product = product;
        next
    }

    pub fn edit_product(&self, edit: impl FnOnce(&mut Product)) -> Self {
        let mut next = self.clone();
        if next.is_editing() {
            edit(&mut next.product);
        }
        next
    }

    pub fn select_category(&self, category: Category) -> Self {
        let mut next = self.clone();
        if next.is_editing() {
            next.selected_category = Some(category);
        }
        next
    }

    pub fn replace_categories(&self, categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..self.clone()
        }
    }

    pub fn insert_completed(&self, stored: Option<Product>) -> (Self, Notice) {
        let notice = match &stored {
            Some(_) => Notice::info("Product saved!"),
            None => Notice::error("Error saving product!"),
        };
        (self.finish(stored), notice)
    }

    pub fn update_completed(&self, stored: Option<Product>) -> (Self, Notice) {
        let notice = match &stored {
            Some(_) => Notice::info("Product edited!"),
            None => Notice::error("Error editing product"),
        };
        (self.finish(stored), notice)
    }

    pub fn delete_completed(id: i32, deleted: bool) -> Notice {
        if deleted {
            Notice::info("Product deleted!")
        } else {
            Notice::error(format!("Error deleting product {id}"))
        }
    }

    // Whatever the outcome, the current product becomes the new cancel
    // point and editing ends.
    fn finish(&self, stored: Option<Product>) -> Self {
        let mut next = self.clone();
        if let Some(product) = stored {
            next.selected_category = Some(product.category.clone());
            next.product = product;
        }
        next.snapshot = Snapshot {
            product: next.product.clone(),
            category: next.selected_category.clone(),
        };
        next.mode = EditMode::Idle;
        next
    }

    fn with_selected_category_applied(&self) -> Product {
        let mut product = self.product.clone();
        product.category = self.selected_category.clone().unwrap_or_default();
        product
    }
}

fn start_edition(state: &ItemDetailState) -> Transition {
    if state.mode != EditMode::Idle || state.product.is_draft() {
        return Transition::unchanged(state);
    }
    Transition {
        state: ItemDetailState {
            mode: EditMode::Editing,
            ..state.clone()
        },
        effect: None,
    }
}

fn start_insertion(state: &ItemDetailState) -> Transition {
    if state.mode != EditMode::Idle {
        return Transition::unchanged(state);
    }
    Transition {
        state: ItemDetailState {
            product: Product::default(),
            selected_category: state.categories.first().cloned(),
            mode: EditMode::Inserting,
            ..state.clone()
        },
        effect: None,
    }
}

fn start_deletion(state: &ItemDetailState) -> Transition {
    let effect = if state.product.is_draft() {
        Effect::Notify(Notice::error("No product selected"))
    } else {
        Effect::ConfirmDelete(state.product.id)
    };
    Transition {
        state: state.clone(),
        effect: Some(effect),
    }
}

fn add(state: &ItemDetailState) -> Transition {
    if state.mode != EditMode::Inserting {
        return Transition::unchanged(state);
    }
    let product = state.with_selected_category_applied();
    Transition {
        state: ItemDetailState {
            product: product.clone(),
            ..state.clone()
        },
        effect: Some(Effect::Insert(product)),
    }
}

fn save(state: &ItemDetailState) -> Transition {
    if state.mode != EditMode::Editing {
        return Transition::unchanged(state);
    }
    let product = state.with_selected_category_applied();
    Transition {
        state: ItemDetailState {
            product: product.clone(),
            ..state.clone()
        },
        effect: Some(Effect::Update(product)),
    }
}

fn cancel(state: &ItemDetailState) -> Transition {
    if state.mode == EditMode::Idle {
        return Transition::unchanged(state);
    }
    Transition {
        state: ItemDetailState {
            product: state.snapshot.product.clone(),
            selected_category: state.snapshot.category.clone(),
            mode: EditMode::Idle,
            ..state.clone()
        },
        effect: None,
    }
}
