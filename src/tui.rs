//! Terminal front end: a thin ratatui host over [`crate::game::Game`].
//!
//! `app` holds all state and input handling so it can be driven without a
//! terminal; `controller` owns the event loop; `ui` only draws.

pub mod app;
pub mod controller;
mod ui;
