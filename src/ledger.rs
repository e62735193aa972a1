use std::sync::Arc;
use tokio::sync::Mutex;
use crate::ledger::domain::LendingLedger;

pub mod domain;
pub mod notifier;
pub mod factory;
pub mod command;
pub mod controller;

// SharedLedger is the one ledger instance of a branch, serialized behind an async mutex
pub type SharedLedger = Arc<Mutex<Box<dyn LendingLedger>>>;

pub fn share_ledger(ledger: Box<dyn LendingLedger>) -> SharedLedger {
    Arc::new(Mutex::new(ledger))
}
