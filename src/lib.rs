pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod mvi;
pub mod oneshot;
pub mod service;
pub mod ui;
