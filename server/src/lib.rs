// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine::{Clock, ParkingEngine, ParkingError, SystemClock};
use gethostname::gethostname;
use model::base_types::{Fee, Hours, SlotIdx};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One engine for all requests; park and unpark are serialized by the lock.
pub type SharedEngine = Arc<Mutex<ParkingEngine>>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParkRequest {
    pub vehicle_type: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkResponse {
    pub slot: SlotIdx,
    pub entry_point: String,
    pub entry_time: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UnparkRequest {
    pub slot: SlotIdx,
    pub hours: Option<Hours>, // None: bill the time since parking
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnparkResponse {
    pub slot: SlotIdx,
    pub slot_size: String,
    pub vehicle_type: String,
    pub hours: Hours,
    pub fee: Fee,
    pub message: String,
}

pub struct ApiError(ParkingError);

impl From<ParkingError> for ApiError {
    fn from(error: ParkingError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ParkingError::NoSlotAvailable { .. } => StatusCode::CONFLICT,
            ParkingError::SlotNotOccupied(_) => StatusCode::NOT_FOUND,
            ParkingError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(status = status.as_u16(), "{}", self.0);
        (
            status,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

pub fn app(engine: ParkingEngine) -> axum::Router {
    let shared_engine: SharedEngine = Arc::new(Mutex::new(engine));
    axum::Router::new()
        .fallback(axum::routing::get(|| async {
            "No route! Use /health, /status, /park or /unpark."
        }))
        .route("/health", axum::routing::get(healthy))
        .route("/status", axum::routing::get(status))
        .route("/park", axum::routing::post(park))
        .route("/unpark", axum::routing::post(unpark))
        .with_state(shared_engine)
}

fn lock(engine: &SharedEngine) -> MutexGuard<'_, ParkingEngine> {
    engine.lock().unwrap_or_else(|e| e.into_inner())
}

pub async fn healthy() -> &'static str {
    info!("Healthy");
    "Healthy"
}

pub async fn park(
    State(engine): State<SharedEngine>,
    Json(request): Json<ParkRequest>,
) -> Result<Json<ParkResponse>, ApiError> {
    let mut engine = lock(&engine);
    let slot = engine.park_code(&request.vehicle_type)?;
    let ticket = engine
        .ticket(slot)
        .ok_or(ParkingError::SlotNotOccupied(slot))?;
    let entry_point = engine
        .layout()
        .get_entry_point_id(ticket.entry_point())
        .unwrap_or_default()
        .to_string();
    Ok(Json(ParkResponse {
        slot,
        entry_point,
        entry_time: ticket.entry_time().as_iso(),
    }))
}

pub async fn unpark(
    State(engine): State<SharedEngine>,
    Json(request): Json<UnparkRequest>,
) -> Result<Json<UnparkResponse>, ApiError> {
    let mut engine = lock(&engine);
    let receipt = match request.hours {
        Some(hours) => engine.unpark_after(request.slot, hours)?,
        None => engine.unpark(request.slot)?,
    };
    Ok(Json(UnparkResponse {
        slot: receipt.slot,
        slot_size: receipt.slot_size.code().to_string(),
        vehicle_type: receipt.vehicle_type.code().to_string(),
        hours: receipt.hours,
        fee: receipt.fee,
        message: receipt.to_string(),
    }))
}

pub async fn status(State(engine): State<SharedEngine>) -> Json<serde_json::Value> {
    let engine = lock(&engine);
    let occupied: Vec<serde_json::Value> = engine
        .occupied_slots()
        .filter_map(|slot| engine.ticket(slot).map(|ticket| (slot, ticket)))
        .map(|(slot, ticket)| {
            serde_json::json!({
                "slot": slot,
                "vehicleType": ticket.vehicle_type().code(),
                "entryPoint": engine.layout().get_entry_point_id(ticket.entry_point()),
                "entryTime": ticket.entry_time().as_iso(),
            })
        })
        .collect();
    let free: Vec<SlotIdx> = engine.free_slots().collect();
    Json(serde_json::json!({
        "info": {
            "timestamp(UTC)": SystemClock.now().as_iso(),
            "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
        },
        "freeSlots": free,
        "occupiedSlots": occupied,
    }))
}
