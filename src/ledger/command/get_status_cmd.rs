use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::catalog::{Catalog, Medium};
use crate::core::command::{Command, CommandError, resolve_media};
use crate::core::library::MediumStatus;
use crate::customers::Customer;
use crate::ledger::SharedLedger;

pub struct GetMediumStatusCommand {
    ledger: SharedLedger,
    catalog: Arc<dyn Catalog>,
}

impl GetMediumStatusCommand {
    pub fn new(ledger: SharedLedger, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            ledger,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetMediumStatusCommandRequest {
    pub medium_id: String,
}

impl GetMediumStatusCommandRequest {
    pub fn new(medium_id: &str) -> Self {
        Self {
            medium_id: medium_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetMediumStatusCommandResponse {
    pub medium: Medium,
    pub status: MediumStatus,
    pub borrower: Option<Customer>,
    pub reservers: Vec<Customer>,
}

#[async_trait]
impl Command<GetMediumStatusCommandRequest, GetMediumStatusCommandResponse> for GetMediumStatusCommand {
    async fn execute(&self, req: GetMediumStatusCommandRequest) -> Result<GetMediumStatusCommandResponse, CommandError> {
        let medium = resolve_media(self.catalog.as_ref(), &[req.medium_id])?
            .into_iter().next()
            .ok_or_else(|| CommandError::NotFound { message: "no medium requested".to_string() })?;
        let ledger = self.ledger.lock().await;
        let status = ledger.status_of(&medium)?;
        debug!(medium = %medium.medium_id, status = %status, "medium status");
        let borrower = if ledger.is_loaned(&medium)? {
            Some(ledger.borrower_of(&medium)?)
        } else {
            None
        };
        let reservers = ledger.reservers_of(&medium)?;
        Ok(GetMediumStatusCommandResponse { medium, status, borrower, reservers })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::catalog::Medium;
    use crate::catalog::registry::InMemoryCatalog;
    use crate::checkout::domain::model::LoanRecord;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::{MediumKind, MediumStatus};
    use crate::customers::Customer;
    use crate::customers::registry::InMemoryCustomerRegistry;
    use crate::ledger::command::get_status_cmd::{GetMediumStatusCommand, GetMediumStatusCommandRequest};
    use crate::ledger::factory::create_ledger;
    use crate::ledger::share_ledger;

    #[tokio::test]
    async fn test_should_get_medium_status() {
        let borrower = Customer::new("1", "ich", "du");
        let reserver = Customer::new("2", "paul", "panter");
        let loaned = Medium::new("CD1", "baz", MediumKind::Cd);
        let free = Medium::new("CD2", "bar", MediumKind::Cd);
        let customers = Arc::new(InMemoryCustomerRegistry::new(vec![borrower.clone(), reserver.clone()]));
        let catalog = Arc::new(InMemoryCatalog::new(vec![loaned.clone(), free.clone()]).expect("should build catalog"));
        let date = NaiveDate::from_ymd_opt(2009, 4, 3).expect("valid date");
        let ledger = share_ledger(create_ledger(&Configuration::new("test"), customers, catalog.clone(),
                                                vec![LoanRecord::new(&borrower, &loaned, date)]).expect("should create ledger"));
        ledger.lock().await.reserve(&reserver, &[loaned.clone()], date).expect("should reserve");
        let cmd = GetMediumStatusCommand::new(ledger, catalog);

        let res = cmd.execute(GetMediumStatusCommandRequest::new("CD1")).await.expect("should get status");
        assert_eq!(MediumStatus::Loaned, res.status);
        assert_eq!(Some(borrower), res.borrower);
        assert_eq!(vec![reserver], res.reservers);

        let res = cmd.execute(GetMediumStatusCommandRequest::new("CD2")).await.expect("should get status");
        assert_eq!(MediumStatus::Available, res.status);
        assert_eq!(None, res.borrower);

        let res = cmd.execute(GetMediumStatusCommandRequest::new("CD9")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
