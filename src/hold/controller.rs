use axum::{
    extract::State,
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::hold::command::cancel_reservation_cmd::{CancelReservationCommand, CancelReservationCommandRequest, CancelReservationCommandResponse};
use crate::hold::command::reserve_media_cmd::{ReserveMediaCommand, ReserveMediaCommandRequest, ReserveMediaCommandResponse};

pub async fn reserve_media(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReserveMediaCommandResponse>, ServerError> {
    let req: ReserveMediaCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ReserveMediaCommand::new(state.ledger, state.customers, state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub async fn cancel_reservation(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CancelReservationCommandResponse>, ServerError> {
    let req: CancelReservationCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = CancelReservationCommand::new(state.ledger, state.customers, state.catalog).execute(req).await?;
    Ok(Json(res))
}
