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

use std::collections::BTreeMap;
use std::fmt;

use model::base_types::{EntryPointIdx, SlotIdx, VehicleType};
use rapid_time::DateTime;

/// What is known about a parked vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    vehicle_type: VehicleType,
    entry_point: EntryPointIdx, // entry point the slot was chosen for
    entry_time: DateTime,
}

/// The occupied slots, each with its ticket. A slot is a key iff a vehicle stands on it.
/// Keys are sorted, so iteration is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    tickets: BTreeMap<SlotIdx, Ticket>,
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Ticket //////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Ticket {
    pub fn new(
        vehicle_type: VehicleType,
        entry_point: EntryPointIdx,
        entry_time: DateTime,
    ) -> Ticket {
        Ticket {
            vehicle_type,
            entry_point,
            entry_time,
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn entry_point(&self) -> EntryPointIdx {
        self.entry_point
    }

    pub fn entry_time(&self) -> DateTime {
        self.entry_time
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "vehicle {} (entry point {}; since {})",
            self.vehicle_type,
            self.entry_point,
            self.entry_time.as_iso()
        )
    }
}

/////////////////////////////////////////////////////////////////////
////////////////////////////// Occupancy ////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Occupancy {
    pub fn new() -> Occupancy {
        Occupancy::default()
    }

    pub fn is_occupied(&self, slot: SlotIdx) -> bool {
        self.tickets.contains_key(&slot)
    }

    pub fn ticket(&self, slot: SlotIdx) -> Option<&Ticket> {
        self.tickets.get(&slot)
    }

    /// returns false (and changes nothing) if the slot is already occupied.
    pub fn occupy(&mut self, slot: SlotIdx, ticket: Ticket) -> bool {
        if self.is_occupied(slot) {
            return false;
        }
        self.tickets.insert(slot, ticket);
        true
    }

    pub fn release(&mut self, slot: SlotIdx) -> Option<Ticket> {
        self.tickets.remove(&slot)
    }

    pub fn occupied_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        self.tickets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
