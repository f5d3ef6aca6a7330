//! # fxpulse - AI forex signal dashboard
//!
//! A terminal dashboard that shows a synthetic indicator set for a selected
//! currency pair and timeframe, asks a generative model for a BUY/SELL/HOLD
//! recommendation and a grounded news summary, and keeps both fresh on a
//! timer. Built with ratatui and reqwest.
//!
//! ## Architecture
//!
//! - **Catalog**: static currency pairs and timeframes
//! - **Indicators**: synthetic indicator snapshots
//! - **API**: model transport plus the signal and news clients
//! - **Orchestrator**: refresh cycles, concurrent fetches, stale-response guard
//! - **State**: selection, cycle state and UI state
//! - **Events**: input handling and key bindings
//! - **UI**: layout and rendering logic
//! - **Config**: configuration management

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod indicators;
pub mod orchestrator;
pub mod state;
pub mod ui;

pub use app::{App, init_orchestrator};
pub use config::Config;
pub use error::{Error, Result};
pub use orchestrator::{CycleEvent, RefreshOrchestrator};
