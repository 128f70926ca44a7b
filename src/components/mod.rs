//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from the
//! page that owns the form state and hold no state of their own.

pub mod error_banner;
pub mod form_field;
