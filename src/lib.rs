//! # Connect Four
//!
//! Connect Four against a computer opponent that picks its moves with a
//! depth-limited minimax search, alpha-beta pruning and a window-counting
//! heuristic. Ships with a terminal UI built with Ratatui and a plain text mode.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and the session that sequences turns
//! - [`ai`] — Evaluator, minimax search, and the computer agents
//! - [`ui`] — Terminal UI and text front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
