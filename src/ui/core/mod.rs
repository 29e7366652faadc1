//! Core UI functionality for the Prospector application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, action definitions, component abstractions, and
//! background task management. It provides the foundation that all UI
//! components build upon.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, tabs and dialog kinds
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard input handling
//! - [`task_manager`] - Background task management and async operation handling
//!
//! # Architecture
//!
//! The core UI follows a component-based architecture where:
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Tasks** run asynchronously via the [`TaskManager`] and report back as
//!    actions on a channel
//!
//! State lives in one typed store owned by the app component; views receive
//! copies of the data they render and communicate changes exclusively through
//! actions.

// Core UI modules
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

// Re-export core types for easier access from other modules
pub use actions::{Action, DialogType, Tab};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskResult};
