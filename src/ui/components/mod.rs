//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod input;
pub mod leads_view;
pub mod product_view;
pub mod sequence_view;
pub mod settings_view;
pub mod status_bar;
pub mod tab_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use input::InputField;
pub use leads_view::LeadsView;
pub use product_view::ProductView;
pub use sequence_view::SequenceView;
pub use settings_view::SettingsView;
pub use status_bar::StatusBarComponent;
pub use tab_bar::TabBarComponent;
