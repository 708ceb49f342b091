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

use super::*;

#[test]
fn flat_rate_covers_first_three_hours() {
    let schedule = FeeSchedule::default();
    for size in SlotSize::ALL {
        assert_eq!(fee_for(&schedule, size, 0), 40);
        assert_eq!(fee_for(&schedule, size, 1), 40);
        assert_eq!(fee_for(&schedule, size, 3), 40);
    }
}

#[test]
fn hourly_rate_depends_on_slot_size() {
    let schedule = FeeSchedule::default();
    assert_eq!(fee_for(&schedule, SlotSize::Small, 5), 80);
    assert_eq!(fee_for(&schedule, SlotSize::Medium, 8), 340);
    assert_eq!(fee_for(&schedule, SlotSize::Large, 4), 140);
    assert_eq!(fee_for(&schedule, SlotSize::Large, 23), 2040);
}

#[test]
fn full_blocks_are_charged_with_block_rate() {
    let schedule = FeeSchedule::default();
    assert_eq!(fee_for(&schedule, SlotSize::Large, 24), 5000);
    assert_eq!(fee_for(&schedule, SlotSize::Large, 25), 5040);
    assert_eq!(fee_for(&schedule, SlotSize::Small, 48), 10000);
    assert_eq!(fee_for(&schedule, SlotSize::Medium, 24 + 5), 5000 + 40 + 2 * 60);
    assert_eq!(fee_for(&schedule, SlotSize::Small, 3 * 24 + 3), 15040);
}

#[test]
fn fee_never_decreases_with_time() {
    let schedule = FeeSchedule::default();
    for size in SlotSize::ALL {
        let mut previous = 0;
        for hours in 0..24 * 5 {
            let fee = fee_for(&schedule, size, hours);
            assert!(
                fee >= previous,
                "fee for {} hours in {} slot is {} but for one hour less it is {}",
                hours,
                size,
                fee,
                previous
            );
            previous = fee;
        }
    }
}

#[test]
fn huge_durations_saturate() {
    let schedule = FeeSchedule::default();
    assert_eq!(fee_for(&schedule, SlotSize::Large, Hours::MAX), Fee::MAX);
}

#[test]
fn partial_hours_are_rounded_up() {
    assert_eq!(billable_hours(Duration::from_seconds(0)), 0);
    assert_eq!(billable_hours(Duration::from_seconds(1)), 1);
    assert_eq!(billable_hours(Duration::from_seconds(3600)), 1);
    assert_eq!(billable_hours(Duration::from_seconds(3601)), 2);
    assert_eq!(billable_hours(Duration::from_seconds(25 * 3600 - 59)), 25);
}

#[test]
fn billable_hours_of_long_stays() {
    // 50 years
    let seconds = 50 * 365 * 24 * 3600 + 1;
    assert_eq!(
        billable_hours(Duration::from_seconds(seconds)),
        50 * 365 * 24 + 1
    );
    assert_eq!(
        billable_hours(Duration::from_seconds(u64::MAX)),
        u64::MAX / 3600 + 1
    );
    assert_eq!(billable_hours(Duration::Infinity), Hours::MAX);
}

#[test]
fn default_schedule_is_valid() {
    assert_eq!(check_fee_schedule(&FeeSchedule::default()), Ok(()));
}

#[test]
fn expensive_hours_are_rejected() {
    let mut schedule = FeeSchedule::default();
    schedule.hourly_rates.large = 300; // 40 + 20 * 300 > 5000
    assert!(matches!(
        check_fee_schedule(&schedule),
        Err(ConfigurationError::InvalidFeeSchedule(_))
    ));
}

#[test]
fn degenerate_blocks_are_rejected() {
    let mut schedule = FeeSchedule::default();
    schedule.block_hours = 0;
    assert!(check_fee_schedule(&schedule).is_err());

    let mut schedule = FeeSchedule::default();
    schedule.flat_rate_hours = 24;
    assert!(check_fee_schedule(&schedule).is_err());
}
