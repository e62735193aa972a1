use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::Catalog;
use crate::core::command::{Command, CommandError, resolve_date, resolve_subjects};
use crate::customers::CustomerRegistry;
use crate::hold::domain::model::ReservationRecord;
use crate::ledger::SharedLedger;

pub struct ReserveMediaCommand {
    ledger: SharedLedger,
    customers: Arc<dyn CustomerRegistry>,
    catalog: Arc<dyn Catalog>,
}

impl ReserveMediaCommand {
    pub fn new(ledger: SharedLedger, customers: Arc<dyn CustomerRegistry>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            ledger,
            customers,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReserveMediaCommandRequest {
    customer_id: String,
    medium_ids: Vec<String>,
    date: Option<String>,
}

impl ReserveMediaCommandRequest {
    pub fn new(customer_id: &str, medium_ids: Vec<String>, date: Option<&str>) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            medium_ids,
            date: date.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReserveMediaCommandResponse {
    reservations: Vec<ReservationRecord>,
}

impl ReserveMediaCommandResponse {
    pub fn new(reservations: Vec<ReservationRecord>) -> Self {
        Self {
            reservations,
        }
    }

    pub fn reservations(&self) -> &[ReservationRecord] {
        &self.reservations
    }
}

#[async_trait]
impl Command<ReserveMediaCommandRequest, ReserveMediaCommandResponse> for ReserveMediaCommand {
    async fn execute(&self, req: ReserveMediaCommandRequest) -> Result<ReserveMediaCommandResponse, CommandError> {
        let (customer, media) = resolve_subjects(self.customers.as_ref(), self.catalog.as_ref(),
                                                 req.customer_id.as_str(), &req.medium_ids)?;
        let date = resolve_date(req.date.as_deref())?;
        let mut ledger = self.ledger.lock().await;
        ledger.reserve(&customer, &media, date)?;
        let reservations = media.iter()
            .map(|medium| ledger.reservation_of(&customer, medium))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ReserveMediaCommandResponse::new(reservations))
    }
}
