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

use model::base_types::{SlotSize, VehicleType};

/// Small vehicles fit everywhere, medium vehicles need a medium or large slot, large vehicles need
/// a large slot.
pub fn compatible(slot_size: SlotSize, vehicle_type: VehicleType) -> bool {
    match vehicle_type {
        VehicleType::Small => true,
        VehicleType::Medium => slot_size != SlotSize::Small,
        VehicleType::Large => slot_size == SlotSize::Large,
    }
}
