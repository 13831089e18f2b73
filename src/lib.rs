//! Terminal progress gauges
//!
//! A gauge widget drawn on a character-cell canvas, plus a small dashboard
//! that runs simulated jobs against a set of gauges.

pub mod app;
pub mod event;
pub mod state;
pub mod ui;
