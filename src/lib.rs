pub mod api;
pub mod app;
pub mod config;
pub mod conversation;
pub mod error;
pub mod event;
pub mod input_bar;
pub mod render;
pub mod response;
pub mod ui;
pub mod util;
pub mod viewer;

pub use app::App;
pub use config::ClientConfig;
pub use error::{AssistantError, Result};
