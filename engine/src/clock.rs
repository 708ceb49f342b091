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

use std::sync::{Arc, Mutex};
use std::time as stdtime;

use rapid_time::{DateTime, Duration};

/// Source of the wall-clock time that is written on a ticket when a vehicle parks and read again
/// when it leaves.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime;
}

/// UTC time of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        let seconds_since_epoch = stdtime::SystemTime::now()
            .duration_since(stdtime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        DateTime::new("1970-01-01T00:00:00") + Duration::from_seconds(seconds_since_epoch)
    }
}

/// A clock that only moves when told to. Clones share the same time, so a handle can be kept
/// after the clock was moved into an engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime>>,
}

impl ManualClock {
    pub fn starting_at(start: DateTime) -> ManualClock {
        ManualClock {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = *now + duration;
    }

    pub fn set(&self, time: DateTime) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
