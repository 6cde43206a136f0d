//! stockdeck - a terminal client for a supply-chain management backend
//!
//! The library holds everything but the binary's event loop so integration
//! tests and benchmarks can drive it:
//! - [`session`] and [`api`]: the session store and the HTTP client wrapper
//! - [`view_model`]: per-screen state with fetch-on-activation lifecycles
//! - [`app`], [`input`] and [`ui`]: the TUI state machine and its rendering

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_model;
