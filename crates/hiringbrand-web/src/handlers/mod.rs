//! HTTP handlers for all API routes.

pub mod differentiation;
pub mod system;
