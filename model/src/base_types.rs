use derive_more::Display;
use derive_more::From;
use serde::{Deserialize, Serialize};

pub mod sizes;

pub use sizes::{SlotSize, VehicleType};

pub type Idx = u32;

#[derive(
    Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SlotIdx(pub Idx);

impl SlotIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

#[derive(
    Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntryPointIdx(pub Idx);

impl EntryPointIdx {
    pub fn idx(&self) -> usize {
        self.0 as usize
    }
}

pub type Distance = u64;
pub type Fee = u64;
pub type Hours = u64;
