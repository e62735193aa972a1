use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::Catalog;
use crate::core::command::{Command, CommandError, resolve_date, resolve_media};
use crate::ledger::SharedLedger;

pub struct ReturnMediaCommand {
    ledger: SharedLedger,
    catalog: Arc<dyn Catalog>,
}

impl ReturnMediaCommand {
    pub fn new(ledger: SharedLedger, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            ledger,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnMediaCommandRequest {
    medium_ids: Vec<String>,
    date: Option<String>,
}

impl ReturnMediaCommandRequest {
    pub fn new(medium_ids: Vec<String>, date: Option<&str>) -> Self {
        Self {
            medium_ids,
            date: date.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnMediaCommandResponse {
    returned: Vec<String>,
}

impl ReturnMediaCommandResponse {
    pub fn new(returned: Vec<String>) -> Self {
        Self {
            returned,
        }
    }

    pub fn returned(&self) -> &[String] {
        &self.returned
    }
}

#[async_trait]
impl Command<ReturnMediaCommandRequest, ReturnMediaCommandResponse> for ReturnMediaCommand {
    async fn execute(&self, req: ReturnMediaCommandRequest) -> Result<ReturnMediaCommandResponse, CommandError> {
        let media = resolve_media(self.catalog.as_ref(), &req.medium_ids)?;
        let date = resolve_date(req.date.as_deref())?;
        self.ledger.lock().await.return_media(&media, date)?;
        Ok(ReturnMediaCommandResponse::new(req.medium_ids))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::Medium;
    use crate::catalog::registry::InMemoryCatalog;
    use crate::checkout::command::lend_media_cmd::{LendMediaCommand, LendMediaCommandRequest};
    use crate::checkout::command::return_media_cmd::{ReturnMediaCommand, ReturnMediaCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::MediumKind;
    use crate::customers::Customer;
    use crate::customers::registry::InMemoryCustomerRegistry;
    use crate::ledger::factory::create_ledger;
    use crate::ledger::{share_ledger, SharedLedger};

    fn build_ledger() -> (SharedLedger, LendMediaCommand, ReturnMediaCommand) {
        let customers = Arc::new(InMemoryCustomerRegistry::new(vec![Customer::new("1", "ich", "du")]));
        let catalog = Arc::new(InMemoryCatalog::new(vec![
            Medium::new("CD1", "baz", MediumKind::Cd),
            Medium::new("CD2", "bar", MediumKind::Cd),
        ]).expect("should build catalog"));
        let ledger = share_ledger(create_ledger(&Configuration::new("test"), customers.clone(),
                                                catalog.clone(), vec![]).expect("should create ledger"));
        (ledger.clone(), LendMediaCommand::new(ledger.clone(), customers, catalog.clone()),
         ReturnMediaCommand::new(ledger, catalog))
    }

    #[tokio::test]
    async fn test_should_run_return_media() {
        let (ledger, lend_cmd, return_cmd) = build_ledger();
        let _ = lend_cmd.execute(LendMediaCommandRequest::new(
            "1", vec!["CD1".to_string(), "CD2".to_string()], None)).await.expect("should lend media");
        let res = return_cmd.execute(ReturnMediaCommandRequest::new(
            vec!["CD2".to_string()], None)).await.expect("should return media");
        assert_eq!(vec!["CD2".to_string()], res.returned());
        assert_eq!(1, ledger.lock().await.loans().len());
    }

    #[tokio::test]
    async fn test_should_not_return_free_medium() {
        let (_, _, return_cmd) = build_ledger();
        let res = return_cmd.execute(ReturnMediaCommandRequest::new(vec!["CD1".to_string()], None)).await;
        assert!(matches!(res, Err(CommandError::Precondition { .. })));
    }
}
