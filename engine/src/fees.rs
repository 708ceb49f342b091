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

#[cfg(test)]
mod tests;

use model::base_types::{Fee, Hours, SlotSize};
use model::config::FeeSchedule;
use model::ConfigurationError;
use rapid_time::Duration;

const SECONDS_PER_HOUR: u64 = 3600;

/// Fee for parking `hours` (already rounded up) in a slot of the given size.
///
/// Every full block (24h by default) costs the block rate. The remaining hours are charged with
/// the flat rate plus the hourly rate for each hour beyond the flat-rate hours. A remainder of
/// zero after at least one full block costs nothing, so exactly 24h costs exactly one block.
pub fn fee_for(schedule: &FeeSchedule, size: SlotSize, hours: Hours) -> Fee {
    let blocks = hours / schedule.block_hours;
    let remainder = hours % schedule.block_hours;

    let remainder_fee = if remainder == 0 && blocks > 0 {
        0
    } else {
        fee_within_block(schedule, size, remainder)
    };

    blocks
        .saturating_mul(schedule.block_rate)
        .saturating_add(remainder_fee)
}

/// flat rate plus the hourly overage, without any block discount.
fn fee_within_block(schedule: &FeeSchedule, size: SlotSize, hours: Hours) -> Fee {
    let exceeding_hours = hours.saturating_sub(schedule.flat_rate_hours);
    schedule
        .flat_rate
        .saturating_add(exceeding_hours.saturating_mul(schedule.hourly_rate(size)))
}

/// Elapsed time rounded up to whole hours; a started hour is charged fully.
/// An infinite duration is billed as `Hours::MAX`.
pub fn billable_hours(elapsed: Duration) -> Hours {
    elapsed
        .in_sec()
        .map(|seconds| seconds.div_ceil(SECONDS_PER_HOUR))
        .unwrap_or(Hours::MAX)
}

/// A schedule is only accepted if the fee never decreases with the parking time, i.e. the last
/// hour before a block is complete must not cost more than the block itself.
pub fn check_fee_schedule(schedule: &FeeSchedule) -> Result<(), ConfigurationError> {
    if schedule.block_hours == 0 {
        return Err(ConfigurationError::InvalidFeeSchedule(String::from(
            "block hours must be positive",
        )));
    }
    if schedule.flat_rate_hours >= schedule.block_hours {
        return Err(ConfigurationError::InvalidFeeSchedule(format!(
            "flat rate hours ({}) must be less than block hours ({})",
            schedule.flat_rate_hours, schedule.block_hours
        )));
    }
    for size in SlotSize::ALL {
        let last_hour_fee = fee_within_block(schedule, size, schedule.block_hours - 1);
        if last_hour_fee > schedule.block_rate {
            return Err(ConfigurationError::InvalidFeeSchedule(format!(
                "{} hours in a {} slot cost {} which exceeds the block rate {}",
                schedule.block_hours - 1,
                size,
                last_hour_fee,
                schedule.block_rate
            )));
        }
    }
    Ok(())
}
