
use serde::{Deserialize, Serialize};

use crate::base_types::{Distance, SlotSize};
use crate::config::{ConfigHourlyRates, FeeSchedule};
use crate::error::ConfigurationError;
use crate::layout::Layout;

type Integer = u64;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonSlot {
    size: String,
    distances: Vec<Integer>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonHourlyRates {
    #[serde(rename = "S")]
    small: Option<Integer>,
    #[serde(rename = "M")]
    medium: Option<Integer>,
    #[serde(rename = "L")]
    large: Option<Integer>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonParameters {
    flat_rate: Option<Integer>,
    flat_rate_hours: Option<Integer>,
    hourly_rates: Option<JsonHourlyRates>,
    block_hours: Option<Integer>,
    block_rate: Option<Integer>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    entry_points: Vec<String>,
    slots: Vec<JsonSlot>,
    parameters: Option<JsonParameters>,
}

/// Reads a parking facility instance. Unknown fields (e.g. a list of events for a replay) are
/// ignored.
pub fn load_parking_instance_from_json(
    input_data: serde_json::Value,
) -> Result<(Layout, FeeSchedule), ConfigurationError> {
    let json_input: JsonInput = serde_json::from_value(input_data)
        .map_err(|e| ConfigurationError::MalformedInstance(e.to_string()))?;
    let layout = create_layout(&json_input)?;
    let fee_schedule = create_fee_schedule(&json_input);
    Ok((layout, fee_schedule))
}

fn create_layout(json_input: &JsonInput) -> Result<Layout, ConfigurationError> {
    let slot_sizes = json_input
        .slots
        .iter()
        .map(|slot| slot.size.parse::<SlotSize>())
        .collect::<Result<Vec<SlotSize>, ConfigurationError>>()?;

    let distances: Vec<Vec<Distance>> = json_input
        .slots
        .iter()
        .map(|slot| slot.distances.clone())
        .collect();

    Layout::new(json_input.entry_points.clone(), distances, slot_sizes)
}

fn create_fee_schedule(json_input: &JsonInput) -> FeeSchedule {
    let default = FeeSchedule::default();
    let parameters = match &json_input.parameters {
        Some(p) => p,
        None => return default,
    };

    let hourly_rates = match &parameters.hourly_rates {
        Some(rates) => ConfigHourlyRates {
            small: rates.small.unwrap_or(default.hourly_rates.small),
            medium: rates.medium.unwrap_or(default.hourly_rates.medium),
            large: rates.large.unwrap_or(default.hourly_rates.large),
        },
        None => default.hourly_rates.clone(),
    };

    FeeSchedule {
        flat_rate: parameters.flat_rate.unwrap_or(default.flat_rate),
        flat_rate_hours: parameters.flat_rate_hours.unwrap_or(default.flat_rate_hours),
        hourly_rates,
        block_hours: parameters.block_hours.unwrap_or(default.block_hours),
        block_rate: parameters.block_rate.unwrap_or(default.block_rate),
    }
}
