//! Prospector - a terminal client for the lead agent backend
//!
//! This library provides a terminal-based interface for the full outreach
//! workflow: describing a product, generating an audience analysis, finding
//! and selecting leads, composing a personalized email sequence, and managing
//! the connected email account. All heavy lifting happens on the backend HTTP
//! API; this crate renders its state and keeps the workflow honest.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - HTTP client and tolerant wire models for the backend
//! * [`config`] - Application configuration management
//! * [`constants`] - Messages, limits and defaults shared across the UI
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Small text and date/time helpers

/// Backend HTTP client and wire models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for text and date/time handling
pub mod utils;
