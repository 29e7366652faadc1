//! Terminal user interface
//!
//! Component-based UI: one typed state store in [`app_component`], views that
//! render pushed data, and a renderer that owns the terminal and event loop.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::{AppComponent, AppState};
pub use layout::LayoutManager;
pub use renderer::run_app;
