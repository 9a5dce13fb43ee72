//! Client side of the stock API: an HTTP service layer plus the
//! view-models a desktop front end binds to.

pub mod api;
pub mod product_list;
pub mod service;
pub mod state;
pub mod view_model;

pub use api::{ApiClient, ClientError};
pub use product_list::{ProductListState, ProductListViewModel};
pub use service::{CategoryService, HttpCategoryService, HttpProductService, ProductService};
pub use state::{Command, EditMode, Effect, ItemDetailState, Notice, NoticeLevel, Transition};
pub use view_model::{ItemDetailViewModel, Notifier};
