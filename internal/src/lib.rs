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


use engine::{Clock, ManualClock, ParkingEngine, ParkingError, SystemClock};
use model::base_types::{Fee, Hours, SlotIdx};
use model::json_serialisation::load_parking_instance_from_json;
use model::ConfigurationError;
use rapid_time::{DateTime, Duration};
use serde::Deserialize;
use tracing::{info, warn};

use std::time as stdtime;

/// A replay never moves its clock beyond this point in time.
const LATEST_REPLAY_TIME: &str = "9999-12-31T23:59:59";

#[derive(Deserialize, Debug)]
#[serde(tag = "action", rename_all = "camelCase")]
enum JsonEvent {
    Park {
        #[serde(rename = "vehicleType")]
        vehicle_type: String,
    },
    Unpark {
        slot: SlotIdx,
        hours: Option<Hours>, // None: bill the time on the clock
    },
    Wait {
        minutes: u64,
    },
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonEvents {
    #[serde(default)]
    events: Vec<JsonEvent>,
}

/// Replays the events of the instance, starting now.
pub fn run(input_data: serde_json::Value) -> Result<serde_json::Value, ParkingError> {
    run_from(input_data, SystemClock.now())
}

/// Replays the events of the instance on a clock that starts at `start` and only moves by
/// "wait" events.
pub fn run_from(
    input_data: serde_json::Value,
    start: DateTime,
) -> Result<serde_json::Value, ParkingError> {
    let start_time = stdtime::Instant::now();
    let json_events: JsonEvents = serde_json::from_value(input_data.clone())
        .map_err(|e| ConfigurationError::MalformedInstance(e.to_string()))?;
    let (layout, fee_schedule) = load_parking_instance_from_json(input_data)?;

    let clock = ManualClock::starting_at(start);
    let mut engine = ParkingEngine::new(layout, fee_schedule, clock.clone())?;
    info!(
        "*** Instance with {} slots and {} events loaded ***",
        engine.layout().number_of_slots(),
        json_events.events.len()
    );

    let mut total_fees: Fee = 0;
    let mut records = Vec::new();
    for event in json_events.events {
        let record = match event {
            JsonEvent::Park { vehicle_type } => park(&mut engine, &vehicle_type),
            JsonEvent::Unpark { slot, hours } => {
                let result = match hours {
                    Some(hours) => engine.unpark_after(slot, hours),
                    None => engine.unpark(slot),
                };
                match result {
                    Ok(receipt) => {
                        total_fees = total_fees.saturating_add(receipt.fee);
                        serde_json::json!({
                            "action": "unpark",
                            "slot": slot,
                            "slotSize": receipt.slot_size.code(),
                            "vehicleType": receipt.vehicle_type.code(),
                            "hours": receipt.hours,
                            "fee": receipt.fee,
                            "message": receipt.to_string(),
                        })
                    }
                    Err(e) => {
                        warn!("{}", e);
                        serde_json::json!({
                            "action": "unpark",
                            "slot": slot,
                            "error": e.to_string(),
                        })
                    }
                }
            }
            JsonEvent::Wait { minutes } => {
                wait(&clock, minutes)?;
                serde_json::json!({
                    "action": "wait",
                    "minutes": minutes,
                    "now": clock.now().as_iso(),
                })
            }
        };
        records.push(record);
    }

    let occupied: Vec<SlotIdx> = engine.occupied_slots().collect();
    let runtime_duration = start_time.elapsed();
    Ok(serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "timestamp(UTC)": SystemClock.now().as_iso(),
        },
        "events": records,
        "occupiedSlots": occupied,
        "totalFees": total_fees,
    }))
}

fn wait(clock: &ManualClock, minutes: u64) -> Result<(), ConfigurationError> {
    let latest = DateTime::new(LATEST_REPLAY_TIME);
    let now = clock.now();
    let remaining_seconds = if now < latest {
        (latest - now).in_sec().unwrap_or(0)
    } else {
        0
    };
    match minutes.checked_mul(60) {
        Some(seconds) if seconds <= remaining_seconds => {
            clock.advance(Duration::from_seconds(seconds));
            Ok(())
        }
        _ => Err(ConfigurationError::MalformedInstance(format!(
            "waiting {} minutes from {} goes beyond {}",
            minutes,
            now.as_iso(),
            LATEST_REPLAY_TIME
        ))),
    }
}

fn park(engine: &mut ParkingEngine, vehicle_type: &str) -> serde_json::Value {
    match engine.park_code(vehicle_type) {
        Ok(slot) => {
            let ticket = engine.ticket(slot);
            serde_json::json!({
                "action": "park",
                "vehicleType": vehicle_type,
                "slot": slot,
                "entryPoint": ticket.and_then(|t| engine.layout().get_entry_point_id(t.entry_point())),
                "entryTime": ticket.map(|t| t.entry_time().as_iso()),
            })
        }
        Err(e) => {
            warn!("{}", e);
            serde_json::json!({
                "action": "park",
                "vehicleType": vehicle_type,
                "error": e.to_string(),
            })
        }
    }
}
