//! ProsePolish API server
//!
//! Thin HTTP proxy between the browser editor and the hosted correction
//! model. Keeps the provider key server-side and normalizes failures into a
//! single machine-readable error shape.

pub mod api;
pub mod app_state;
pub mod config;
pub mod corrector;
