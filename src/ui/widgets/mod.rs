//! Custom widgets for the dashboard.

pub mod gauge;

pub use gauge::Gauge;
