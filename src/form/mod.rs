//! Sign-in form logic, independent of the view layer.
//!
//! ARCHITECTURE
//! ============
//! `schema` declares the field rules, `controller` owns values and the
//! submission lifecycle, and `submission` talks to the auth client once the
//! controller has dispatched.

pub mod controller;
pub mod schema;
pub mod submission;
