//! Component-lifetime token for async work spawned from a view.
//!
//! SYSTEM CONTEXT
//! ==============
//! A task spawned with `spawn_local` can outlive the component that started
//! it. The component keeps one `Lifetime`, hands clones to its tasks, and
//! calls `end()` from `on_cleanup`; tasks check `is_alive()` before writing
//! back into signals that may already be disposed.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owner as torn down. Visible to every clone.
    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Tie this token to the current reactive owner.
    pub fn end_on_cleanup(&self) {
        let token = self.clone();
        leptos::prelude::on_cleanup(move || token.end());
    }
}
