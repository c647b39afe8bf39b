//! Front ends: a terminal UI built on ratatui and a line-oriented text mode.
//! Both drive a [`Session`](crate::game::Session) and only render its state.

mod app;
mod game_view;
pub mod text;

pub use app::App;
