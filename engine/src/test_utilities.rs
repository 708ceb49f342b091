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

use model::base_types::SlotSize;
use model::config::FeeSchedule;
use model::layout::Layout;
use rapid_time::DateTime;

use crate::clock::ManualClock;
use crate::ParkingEngine;

pub(crate) struct TestData {
    pub(crate) layout: Layout,
    pub(crate) engine: ParkingEngine,
    pub(crate) clock: ManualClock,
}

/// Three entry points and five slots:
///
/// | slot | size | north | east | south |
/// |------|------|-------|------|-------|
/// | 0    | S    | 1     | 4    | 5     |
/// | 1    | L    | 3     | 2    | 3     |
/// | 2    | M    | 6     | 6    | 2     |
/// | 3    | M    | 2     | 7    | 7     |
/// | 4    | S    | 9     | 1    | 8     |
pub(crate) fn init_test_data() -> TestData {
    let layout = Layout::new(
        vec![
            String::from("north"),
            String::from("east"),
            String::from("south"),
        ],
        vec![
            vec![1, 4, 5],
            vec![3, 2, 3],
            vec![6, 6, 2],
            vec![2, 7, 7],
            vec![9, 1, 8],
        ],
        vec![
            SlotSize::Small,
            SlotSize::Large,
            SlotSize::Medium,
            SlotSize::Medium,
            SlotSize::Small,
        ],
    )
    .unwrap();
    let clock = ManualClock::starting_at(DateTime::new("2024-01-01T08:00"));
    let engine = ParkingEngine::new(layout.clone(), FeeSchedule::default(), clock.clone()).unwrap();
    TestData {
        layout,
        engine,
        clock,
    }
}
