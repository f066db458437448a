pub mod api;
pub mod clipboard;
pub mod core;
pub mod estimator;
