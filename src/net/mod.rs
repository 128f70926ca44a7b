//! Networking modules for the auth boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_client` performs the sign-in request and `types` defines its wire
//! schema.

pub mod auth_client;
pub mod types;
