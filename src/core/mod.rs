//! # Core Application Logic
//!
//! This module contains mushaf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//!     │  data store  │ ──▶ │    index     │ ──▶ │   library    │
//!     │ (bundled     │     │ (chapter /   │     │ (the lookup  │
//!     │  JSON tables)│     │  section     │     │  API the UI  │
//!     │              │     │  buckets)    │     │  consumes)   │
//!     └──────────────┘     └──────────────┘     └──────────────┘
//!
//!     ┌──────────────┐
//!     │ theme store  │  independent, parallel: one dark-mode flag,
//!     │              │  derived palette, synchronous subscribers
//!     └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`data`]: bundled tables parsed into validated records
//! - [`index`]: verses bucketed by chapter and by section, built once
//! - [`library`]: read-only lookup API over the store and indexes
//! - [`text`]: display shaping (Arabic-Indic numbers, verse runs, Basmala)
//! - [`theme`]: the theme store and its palettes
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum — everything that can happen in the app
//! - [`config`]: `~/.mushaf/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod data;
pub mod index;
pub mod library;
pub mod state;
pub mod text;
pub mod theme;
