//! Small view-layer helpers shared across pages.

pub mod lifetime;
