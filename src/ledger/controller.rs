use axum::{
    extract::{Path, State},
    response::Json,
};
use crate::core::command::Command;
use crate::core::controller::{AppState, ServerError};
use crate::ledger::command::get_status_cmd::{GetMediumStatusCommand, GetMediumStatusCommandRequest, GetMediumStatusCommandResponse};

pub async fn medium_status(
    State(state): State<AppState>,
    Path(medium_id): Path<String>) -> Result<Json<GetMediumStatusCommandResponse>, ServerError> {
    let req = GetMediumStatusCommandRequest { medium_id };
    let res = GetMediumStatusCommand::new(state.ledger, state.catalog).execute(req).await?;
    Ok(Json(res))
}
