use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::Catalog;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::customers::CustomerRegistry;
use crate::ledger::SharedLedger;

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub ledger: SharedLedger,
    pub customers: Arc<dyn CustomerRegistry>,
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(config: Configuration, ledger: SharedLedger,
               customers: Arc<dyn CustomerRegistry>, catalog: Arc<dyn Catalog>) -> AppState {
        AppState {
            config,
            ledger,
            customers,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Precondition { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Recording { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
