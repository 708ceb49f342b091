#[cfg(test)]
mod tests;

use std::collections::HashSet;

use crate::base_types::{Distance, EntryPointIdx, Idx, SlotIdx, SlotSize};
use crate::error::ConfigurationError;

pub const MINIMAL_NUMBER_OF_ENTRY_POINTS: usize = 3;

/// The static part of a parking facility: its entry points and its slots.
/// Each slot stores its size and its distance to every entry point, i.e. the slots form the rows
/// of a (number of slots) x (number of entry points) distance matrix.
/// The indices of entry points and slots equal their position in the respective vector.
///
/// A Layout can only be created through Layout::new, which checks that the matrix is rectangular
/// and that there are enough entry points. Hence, all SlotIdx and EntryPointIdx handed out by a
/// Layout are valid for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    entry_points: Vec<EntryPoint>,
    slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    idx: EntryPointIdx,
    id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    idx: SlotIdx,
    size: SlotSize,
    distances: Vec<Distance>, // indexed by EntryPointIdx
}

/////////////////////////////////////////////////////////////////////
/////////////////////////////// Layout //////////////////////////////
/////////////////////////////////////////////////////////////////////

// static functions
impl Layout {
    pub fn new(
        entry_point_ids: Vec<String>,
        distances: Vec<Vec<Distance>>,
        slot_sizes: Vec<SlotSize>,
    ) -> Result<Layout, ConfigurationError> {
        if entry_point_ids.len() < MINIMAL_NUMBER_OF_ENTRY_POINTS {
            return Err(ConfigurationError::TooFewEntryPoints {
                found: entry_point_ids.len(),
                minimum: MINIMAL_NUMBER_OF_ENTRY_POINTS,
            });
        }

        {
            let mut seen: HashSet<&String> = HashSet::new();
            if let Some(id) = entry_point_ids.iter().find(|id| !seen.insert(*id)) {
                return Err(ConfigurationError::DuplicateEntryPoint(id.clone()));
            }
        }

        if distances.len() != slot_sizes.len() {
            return Err(ConfigurationError::SlotCountMismatch {
                rows: distances.len(),
                slots: slot_sizes.len(),
            });
        }

        if let Some((slot, row)) = distances
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != entry_point_ids.len())
        {
            return Err(ConfigurationError::DistanceRowMismatch {
                slot,
                found: row.len(),
                expected: entry_point_ids.len(),
            });
        }

        let entry_points = entry_point_ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                Ok(EntryPoint {
                    idx: EntryPointIdx(position_to_idx(i)?),
                    id,
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let slots = distances
            .into_iter()
            .zip(slot_sizes)
            .enumerate()
            .map(|(i, (distances, size))| {
                Ok(Slot {
                    idx: SlotIdx(position_to_idx(i)?),
                    size,
                    distances,
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        Ok(Layout {
            entry_points,
            slots,
        })
    }
}

// methods
impl Layout {
    pub fn number_of_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn number_of_entry_points(&self) -> usize {
        self.entry_points.len()
    }

    pub fn slot(&self, slot: SlotIdx) -> Option<&Slot> {
        self.slots.get(slot.idx())
    }

    pub fn entry_point(&self, entry_point: EntryPointIdx) -> Option<&EntryPoint> {
        self.entry_points.get(entry_point.idx())
    }

    /// all slots in index order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter()
    }

    pub fn entry_points(&self) -> impl Iterator<Item = &EntryPoint> + '_ {
        self.entry_points.iter()
    }

    pub fn size_of(&self, slot: SlotIdx) -> Option<SlotSize> {
        self.slot(slot).map(|s| s.size)
    }

    pub fn get_entry_point_id(&self, entry_point: EntryPointIdx) -> Option<&str> {
        self.entry_point(entry_point).map(|e| e.id())
    }
}

/////////////////////////////////////////////////////////////////////
///////////////////////////// EntryPoint ////////////////////////////
/////////////////////////////////////////////////////////////////////

impl EntryPoint {
    pub fn idx(&self) -> EntryPointIdx {
        self.idx
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/////////////////////////////////////////////////////////////////////
//////////////////////////////// Slot ///////////////////////////////
/////////////////////////////////////////////////////////////////////

impl Slot {
    pub fn idx(&self) -> SlotIdx {
        self.idx
    }

    pub fn size(&self) -> SlotSize {
        self.size
    }

    /// distances to all entry points, paired with the entry point they belong to (in index order).
    pub fn distances(&self) -> impl Iterator<Item = (EntryPointIdx, Distance)> + '_ {
        // the row width equals the number of entry points, so every position fits into an Idx
        self.distances
            .iter()
            .enumerate()
            .map(|(i, d)| (EntryPointIdx(i as Idx), *d))
    }
}

fn position_to_idx(position: usize) -> Result<Idx, ConfigurationError> {
    Idx::try_from(position).map_err(|_| ConfigurationError::IndexOutOfRange(position))
}
