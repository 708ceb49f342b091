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

use model::base_types::SlotIdx;
use model::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// fatal, the engine could not be built.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// recoverable, the caller may retry after some vehicle left.
    #[error("no available slot for vehicle type '{vehicle_type}'")]
    NoSlotAvailable { vehicle_type: String },

    /// the slot is out of range or currently free.
    #[error("slot {0} is not occupied")]
    SlotNotOccupied(SlotIdx),
}
