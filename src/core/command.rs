use async_trait::async_trait;
use chrono::NaiveDate;
use crate::catalog::{Catalog, Medium};
use crate::core::library::{LibraryError, LibraryResult};
use crate::customers::{Customer, CustomerRegistry};
use crate::utils::date::{parse_date, today};

#[derive(Debug)]
pub enum CommandError {
    Precondition {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Recording {
        message: String,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::PreconditionViolated { message, reason_code } => {
                CommandError::Precondition { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Recording { message, retryable } => {
                CommandError::Recording { message, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

// Looks up the customer and media a request names by id, keeping the order of the ids.
pub(crate) fn resolve_subjects(customers: &dyn CustomerRegistry, catalog: &dyn Catalog,
                               customer_id: &str, medium_ids: &[String]) -> LibraryResult<(Customer, Vec<Medium>)> {
    let customer = customers.find_customer_by_id(customer_id).ok_or_else(
        || LibraryError::not_found(format!("customer {} is not registered", customer_id).as_str()))?;
    Ok((customer, resolve_media(catalog, medium_ids)?))
}

pub(crate) fn resolve_media(catalog: &dyn Catalog, medium_ids: &[String]) -> LibraryResult<Vec<Medium>> {
    medium_ids.iter()
        .map(|id| catalog.find_medium_by_id(id).ok_or_else(
            || LibraryError::not_found(format!("medium {} is not in stock", id).as_str())))
        .collect()
}

// requests may omit the date, which then means today
pub(crate) fn resolve_date(date: Option<&str>) -> LibraryResult<NaiveDate> {
    match date {
        Some(date) => Ok(parse_date(date)?),
        None => Ok(today()),
    }
}
