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

use std::fmt;

use model::base_types::{Fee, Hours, SlotIdx, SlotSize, VehicleType};

/// Outcome of a departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    pub slot: SlotIdx,
    pub slot_size: SlotSize,
    pub vehicle_type: VehicleType,
    pub hours: Hours,
    pub fee: Fee,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Vehicle {} unparked from slot {} ({}) after {}h. Total fee: {}",
            self.vehicle_type, self.slot, self.slot_size, self.hours, self.fee
        )
    }
}
