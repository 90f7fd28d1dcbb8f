pub mod api;
pub mod config;
pub mod error_convert;
pub mod lifecycle;
pub mod menu;
pub mod session;
