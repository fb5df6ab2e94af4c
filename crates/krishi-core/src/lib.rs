//! Core types and actions for the Krishi Sevak farming assistant client
//!
//! # Modules
//!
//! - `actions`: User-triggered operations (one round trip, one state update)
//! - `api`: Endpoint payloads and the `KrishiApi` backend trait
//! - `chat`: Chat assistant conversation log
//! - `config`: UI configuration
//! - `crops`: Static crop reference table
//! - `error`: Error types and Result alias
//! - `panel`: Per-panel request sequencing
//! - `section`: Main-view sections
//! - `state`: Application state
//! - `theme`: Light/dark theme and its storage abstraction
//! - `view`: View models rendered by the UI

pub mod actions;
pub mod api;
pub mod chat;
pub mod config;
pub mod crops;
pub mod error;
pub mod panel;
pub mod section;
pub mod state;
pub mod theme;
pub mod view;

// Re-exports
pub use api::{FormPayload, KrishiApi};
pub use chat::{ChatEntry, ChatLog, ChatRole};
pub use config::UiConfig;
pub use crops::{CropFacts, CropInfoView, CropKey};
pub use error::{ApiError, Error, Result};
pub use panel::{Panel, PanelView, Ticket};
pub use section::Section;
pub use state::{AppState, StateCell};
pub use theme::{MemoryThemeStore, Theme, ThemeController, ThemeStore};
