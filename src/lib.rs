//! Application core of the health companion app: navigation, view state,
//! account and device capabilities, and the composition root wiring them.

pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod devices;
pub mod lifecycle;
pub mod logging;
pub mod navigation;
pub mod ui;
