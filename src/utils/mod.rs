//! Utility modules for the Prospector application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application. These utilities provide functionality for
//! date/time handling, text shaping and other cross-cutting concerns.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date and time formatting helpers
//! - [`text`] - Text truncation and labelling helpers for table cells
//!
//! # Design Philosophy
//!
//! All utilities follow these principles:
//!
//! - **Pure functions** when possible - Avoid side effects for predictable behavior
//! - **Performance** - Efficient implementations suitable for frequent use
//! - **Testability** - Easy to unit test with clear inputs and outputs

pub mod datetime;
pub mod text;
