use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::checkout::domain::model::LoanRecord;
use crate::hold::domain::model::ReservationRecord;
use crate::utils::date::serializer;

// LedgerEventKind defines the kind of change the ledger reports to its recorder
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LedgerEventKind {
    LoanCreated,
    LoanReturned,
    ReservationCreated,
    ReservationRemoved,
}

impl LedgerEventKind {
    pub fn group(&self) -> &'static str {
        match self {
            LedgerEventKind::LoanCreated | LedgerEventKind::LoanReturned => "loans",
            LedgerEventKind::ReservationCreated | LedgerEventKind::ReservationRemoved => "reservations",
        }
    }
}

// LedgerEvent abstracts one discrete change of loan or reservation state
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub event_id: String,
    pub group: String,
    pub key: String,
    pub kind: LedgerEventKind,
    pub customer_id: String,
    #[serde(with = "serializer")]
    pub event_date: NaiveDate,
    pub json_data: String,
    pub created_at: NaiveDateTime,
}

impl LedgerEvent {
    pub fn loan_created(loan: &LoanRecord) -> serde_json::Result<Self> {
        Self::from_loan(LedgerEventKind::LoanCreated, loan, loan.loaned_at())
    }

    // returned events carry the return date, the record keeps its loan date
    pub fn loan_returned(loan: &LoanRecord, returned_at: NaiveDate) -> serde_json::Result<Self> {
        Self::from_loan(LedgerEventKind::LoanReturned, loan, returned_at)
    }

    pub fn reservation_created(reservation: &ReservationRecord) -> serde_json::Result<Self> {
        Self::from_reservation(LedgerEventKind::ReservationCreated, reservation, reservation.reserved_at())
    }

    pub fn reservation_removed(reservation: &ReservationRecord, removed_at: NaiveDate) -> serde_json::Result<Self> {
        Self::from_reservation(LedgerEventKind::ReservationRemoved, reservation, removed_at)
    }

    fn from_loan(kind: LedgerEventKind, loan: &LoanRecord, event_date: NaiveDate) -> serde_json::Result<Self> {
        let json = serde_json::to_string(loan)?;
        Ok(Self::build(kind, loan.medium().medium_id.as_str(),
                       loan.borrower().customer_id.as_str(), event_date, json))
    }

    fn from_reservation(kind: LedgerEventKind, reservation: &ReservationRecord, event_date: NaiveDate) -> serde_json::Result<Self> {
        let json = serde_json::to_string(reservation)?;
        Ok(Self::build(kind, reservation.medium().medium_id.as_str(),
                       reservation.reserver().customer_id.as_str(), event_date, json))
    }

    fn build(kind: LedgerEventKind, key: &str, customer_id: &str, event_date: NaiveDate, json: String) -> LedgerEvent {
        LedgerEvent {
            event_id: Uuid::new_v4().to_string(),
            group: kind.group().to_string(),
            key: key.to_string(),
            kind,
            customer_id: customer_id.to_string(),
            event_date,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        }
    }
}
