//! Backend runtime entry point and public API surface.
//!
//! This crate owns the backend lifecycle, routes bridge messages to services,
//! and keeps the notification center that the frontend renders.

mod app;
mod config;
pub mod notification_center;
mod runtime;
mod services;
mod state;

pub(crate) use crate::app::AppContext;
pub use crate::notification_center::NotificationCenter;
pub use crate::runtime::run;
