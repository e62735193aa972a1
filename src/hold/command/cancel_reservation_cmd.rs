use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::Catalog;
use crate::core::command::{Command, CommandError, resolve_date, resolve_subjects};
use crate::customers::CustomerRegistry;
use crate::ledger::SharedLedger;

pub struct CancelReservationCommand {
    ledger: SharedLedger,
    customers: Arc<dyn CustomerRegistry>,
    catalog: Arc<dyn Catalog>,
}

impl CancelReservationCommand {
    pub fn new(ledger: SharedLedger, customers: Arc<dyn CustomerRegistry>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            ledger,
            customers,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CancelReservationCommandRequest {
    customer_id: String,
    medium_ids: Vec<String>,
    date: Option<String>,
}

impl CancelReservationCommandRequest {
    pub fn new(customer_id: &str, medium_ids: Vec<String>, date: Option<&str>) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            medium_ids,
            date: date.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CancelReservationCommandResponse {
    customer_id: String,
    cancelled: Vec<String>,
}

impl CancelReservationCommandResponse {
    pub fn new(customer_id: String, cancelled: Vec<String>) -> Self {
        Self {
            customer_id,
            cancelled,
        }
    }

    pub fn cancelled(&self) -> &[String] {
        &self.cancelled
    }
}

#[async_trait]
impl Command<CancelReservationCommandRequest, CancelReservationCommandResponse> for CancelReservationCommand {
    async fn execute(&self, req: CancelReservationCommandRequest) -> Result<CancelReservationCommandResponse, CommandError> {
        let (customer, media) = resolve_subjects(self.customers.as_ref(), self.catalog.as_ref(),
                                                 req.customer_id.as_str(), &req.medium_ids)?;
        let date = resolve_date(req.date.as_deref())?;
        self.ledger.lock().await.cancel_reservations(&media, date, &customer)?;
        Ok(CancelReservationCommandResponse::new(req.customer_id, req.medium_ids))
    }
}
