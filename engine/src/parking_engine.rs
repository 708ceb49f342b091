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


use model::base_types::{Distance, EntryPointIdx, Hours, SlotIdx, VehicleType};
use model::config::FeeSchedule;
use model::layout::Layout;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::compatibility::compatible;
use crate::error::ParkingError;
use crate::fees::{billable_hours, check_fee_schedule, fee_for};
use crate::occupancy::{Occupancy, Ticket};
use crate::receipt::Receipt;

/// A parking facility with its current occupancy.
///
/// Arriving vehicles get the free compatible slot that is closest to any entry point. Departing
/// vehicles are billed by the fee schedule. Every method either succeeds completely or returns
/// an error without changing the occupancy.
///
/// The engine is not synchronized; callers that share it between threads must put it behind a
/// single lock.
pub struct ParkingEngine {
    layout: Layout,
    fee_schedule: FeeSchedule,
    occupancy: Occupancy,
    clock: Box<dyn Clock>,
}

// static functions
impl ParkingEngine {
    pub fn new(
        layout: Layout,
        fee_schedule: FeeSchedule,
        clock: impl Clock + 'static,
    ) -> Result<ParkingEngine, ParkingError> {
        check_fee_schedule(&fee_schedule)?;
        info!(
            slots = layout.number_of_slots(),
            entry_points = layout.number_of_entry_points(),
            "parking engine initialized"
        );
        Ok(ParkingEngine {
            layout,
            fee_schedule,
            occupancy: Occupancy::new(),
            clock: Box::new(clock),
        })
    }

    pub fn with_system_clock(
        layout: Layout,
        fee_schedule: FeeSchedule,
    ) -> Result<ParkingEngine, ParkingError> {
        ParkingEngine::new(layout, fee_schedule, SystemClock)
    }
}

// methods
impl ParkingEngine {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_free(&self, slot: SlotIdx) -> bool {
        slot.idx() < self.layout.number_of_slots() && !self.occupancy.is_occupied(slot)
    }

    pub fn free_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        self.layout
            .slots()
            .map(|s| s.idx())
            .filter(move |&s| !self.occupancy.is_occupied(s))
    }

    pub fn occupied_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        self.occupancy.occupied_slots()
    }

    pub fn ticket(&self, slot: SlotIdx) -> Option<&Ticket> {
        self.occupancy.ticket(slot)
    }

    /// The free slot compatible with `vehicle_type` that has the smallest distance to some entry
    /// point, together with that entry point and the distance.
    /// Ties are broken by the first (slot, entry point) pair in index order.
    pub fn nearest_free_slot(
        &self,
        vehicle_type: VehicleType,
    ) -> Option<(SlotIdx, EntryPointIdx, Distance)> {
        self.layout
            .slots()
            .filter(|slot| !self.occupancy.is_occupied(slot.idx()))
            .filter(|slot| compatible(slot.size(), vehicle_type))
            .flat_map(|slot| {
                slot.distances()
                    .map(move |(entry_point, distance)| (slot.idx(), entry_point, distance))
            })
            .min_by_key(|&(_, _, distance)| distance)
    }

    pub fn park(&mut self, vehicle_type: VehicleType) -> Result<SlotIdx, ParkingError> {
        let (slot, entry_point, distance) = self
            .nearest_free_slot(vehicle_type)
            .ok_or_else(|| ParkingError::NoSlotAvailable {
                vehicle_type: vehicle_type.to_string(),
            })?;
        debug!(%slot, %entry_point, distance, "nearest compatible slot found");

        let ticket = Ticket::new(vehicle_type, entry_point, self.clock.now());
        info!(%slot, "parked {}", ticket);
        let newly_occupied = self.occupancy.occupy(slot, ticket);
        debug_assert!(newly_occupied, "slot {} was chosen although occupied", slot);
        Ok(slot)
    }

    /// Parks a vehicle given by its code ("S", "M", "L"). There is no slot for an unknown code.
    pub fn park_code(&mut self, vehicle_code: &str) -> Result<SlotIdx, ParkingError> {
        match vehicle_code.parse::<VehicleType>() {
            Ok(vehicle_type) => self.park(vehicle_type),
            Err(_) => Err(ParkingError::NoSlotAvailable {
                vehicle_type: vehicle_code.to_string(),
            }),
        }
    }

    /// Frees the slot and bills the time since the vehicle parked, rounded up to whole hours.
    pub fn unpark(&mut self, slot: SlotIdx) -> Result<Receipt, ParkingError> {
        let entry_time = self
            .occupancy
            .ticket(slot)
            .ok_or(ParkingError::SlotNotOccupied(slot))?
            .entry_time();
        let now = self.clock.now();
        let hours = if now > entry_time {
            billable_hours(now - entry_time)
        } else {
            0
        };
        self.unpark_after(slot, hours)
    }

    /// Frees the slot and bills the given number of hours instead of the recorded time.
    pub fn unpark_after(&mut self, slot: SlotIdx, hours: Hours) -> Result<Receipt, ParkingError> {
        let slot_size = self
            .layout
            .size_of(slot)
            .ok_or(ParkingError::SlotNotOccupied(slot))?;
        let ticket = self
            .occupancy
            .release(slot)
            .ok_or(ParkingError::SlotNotOccupied(slot))?;

        let receipt = Receipt {
            slot,
            slot_size,
            vehicle_type: ticket.vehicle_type(),
            hours,
            fee: fee_for(&self.fee_schedule, slot_size, hours),
        };
        info!(%slot, hours, fee = receipt.fee, "unparked vehicle {}", receipt.vehicle_type);
        Ok(receipt)
    }
}
