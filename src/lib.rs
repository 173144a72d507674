#![doc(test(attr(deny(warnings))))]

//! Timesheet Core offers the attendance ledger, expense, and summary
//! primitives that power the weekly timesheet ("puantaj") workflows and CLI.

pub mod cli;
pub mod core;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Timesheet Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
