use axum::{
    extract::State,
    response::Json,
};
use serde_json::{Value};
use crate::checkout::command::lend_media_cmd::{LendMediaCommand, LendMediaCommandRequest, LendMediaCommandResponse};
use crate::checkout::command::return_media_cmd::{ReturnMediaCommand, ReturnMediaCommandRequest, ReturnMediaCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub async fn lend_media(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LendMediaCommandResponse>, ServerError> {
    let req: LendMediaCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = LendMediaCommand::new(state.ledger, state.customers, state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn return_media(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnMediaCommandResponse>, ServerError> {
    let req: ReturnMediaCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReturnMediaCommand::new(state.ledger, state.catalog).execute(req).await?;
    Ok(Json(res))
}
