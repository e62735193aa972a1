use std::sync::Arc;
use crate::catalog::Catalog;
use crate::checkout::domain::model::LoanRecord;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::customers::CustomerRegistry;
use crate::gateway::factory::create_recorder;
use crate::ledger::domain::LendingLedger;
use crate::ledger::domain::service::LendingLedgerImpl;

pub fn create_ledger(config: &Configuration, customer_registry: Arc<dyn CustomerRegistry>,
                     catalog: Arc<dyn Catalog>, initial_loans: Vec<LoanRecord>) -> LibraryResult<Box<dyn LendingLedger>> {
    let recorder = create_recorder(config);
    Ok(Box::new(LendingLedgerImpl::new(config, customer_registry, catalog,
                                       recorder, initial_loans)?))
}
