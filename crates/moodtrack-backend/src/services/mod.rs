//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the
//! `AppContext`, mutate the notification center and report changes back to
//! the frontend.

pub mod config_service;
pub mod notification_service;
