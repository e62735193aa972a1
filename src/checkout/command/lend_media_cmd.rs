use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::Catalog;
use crate::checkout::domain::model::LoanRecord;
use crate::core::command::{Command, CommandError, resolve_date, resolve_subjects};
use crate::customers::CustomerRegistry;
use crate::ledger::SharedLedger;

pub struct LendMediaCommand {
    ledger: SharedLedger,
    customers: Arc<dyn CustomerRegistry>,
    catalog: Arc<dyn Catalog>,
}

impl LendMediaCommand {
    pub fn new(ledger: SharedLedger, customers: Arc<dyn CustomerRegistry>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            ledger,
            customers,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LendMediaCommandRequest {
    customer_id: String,
    medium_ids: Vec<String>,
    date: Option<String>,
}

impl LendMediaCommandRequest {
    pub fn new(customer_id: &str, medium_ids: Vec<String>, date: Option<&str>) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            medium_ids,
            date: date.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LendMediaCommandResponse {
    loans: Vec<LoanRecord>,
}

impl LendMediaCommandResponse {
    pub fn new(loans: Vec<LoanRecord>) -> Self {
        Self {
            loans,
        }
    }

    pub fn loans(&self) -> &[LoanRecord] {
        &self.loans
    }
}

#[async_trait]
impl Command<LendMediaCommandRequest, LendMediaCommandResponse> for LendMediaCommand {
    async fn execute(&self, req: LendMediaCommandRequest) -> Result<LendMediaCommandResponse, CommandError> {
        let (customer, media) = resolve_subjects(self.customers.as_ref(), self.catalog.as_ref(),
                                                 req.customer_id.as_str(), &req.medium_ids)?;
        let date = resolve_date(req.date.as_deref())?;
        let mut ledger = self.ledger.lock().await;
        ledger.lend_to(&customer, &media, date)?;
        let loans = media.iter()
            .map(|medium| ledger.loan_of(medium))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LendMediaCommandResponse::new(loans))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::Medium;
    use crate::catalog::registry::InMemoryCatalog;
    use crate::checkout::command::lend_media_cmd::{LendMediaCommand, LendMediaCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::MediumKind;
    use crate::customers::Customer;
    use crate::customers::registry::InMemoryCustomerRegistry;
    use crate::hold::command::reserve_media_cmd::{ReserveMediaCommand, ReserveMediaCommandRequest};
    use crate::ledger::factory::create_ledger;
    use crate::ledger::share_ledger;

    fn build_commands() -> (LendMediaCommand, ReserveMediaCommand) {
        let customers = Arc::new(InMemoryCustomerRegistry::new(vec![
            Customer::new("1", "ich", "du"), Customer::new("2", "paul", "panter")]));
        let catalog = Arc::new(InMemoryCatalog::new(vec![
            Medium::new("CD1", "baz", MediumKind::Cd),
            Medium::new("DVD1", "bar", MediumKind::Dvd),
        ]).expect("should build catalog"));
        let ledger = share_ledger(create_ledger(&Configuration::new("test"), customers.clone(),
                                                catalog.clone(), vec![]).expect("should create ledger"));
        (LendMediaCommand::new(ledger.clone(), customers.clone(), catalog.clone()),
         ReserveMediaCommand::new(ledger, customers, catalog))
    }

    #[tokio::test]
    async fn test_should_run_lend_media() {
        let (lend_cmd, _) = build_commands();
        let res = lend_cmd.execute(LendMediaCommandRequest::new(
            "1", vec!["CD1".to_string(), "DVD1".to_string()], Some("2009-04-03"))).await.expect("should lend media");
        assert_eq!(2, res.loans().len());
        assert_eq!("CD1", res.loans()[0].medium().medium_id.as_str());
        assert_eq!("1", res.loans()[1].borrower().customer_id.as_str());
    }

    #[tokio::test]
    async fn test_should_not_lend_reserved_medium_to_other_customer() {
        let (lend_cmd, reserve_cmd) = build_commands();
        let _ = reserve_cmd.execute(ReserveMediaCommandRequest::new(
            "2", vec!["CD1".to_string()], None)).await.expect("should reserve media");
        let res = lend_cmd.execute(LendMediaCommandRequest::new(
            "1", vec!["CD1".to_string()], None)).await;
        assert!(matches!(res, Err(CommandError::Precondition { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_lend_for_unknown_ids() {
        let (lend_cmd, _) = build_commands();
        let res = lend_cmd.execute(LendMediaCommandRequest::new("9", vec!["CD1".to_string()], None)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = lend_cmd.execute(LendMediaCommandRequest::new("1", vec!["CD9".to_string()], None)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
        let res = lend_cmd.execute(LendMediaCommandRequest::new("1", vec!["CD1".to_string()], Some("today"))).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
