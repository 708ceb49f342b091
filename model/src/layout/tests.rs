use super::*;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn create_valid_layout() {
    // ACT
    let layout = Layout::new(
        ids(&["north", "east", "south"]),
        vec![vec![1, 4, 5], vec![3, 2, 3]],
        vec![SlotSize::Small, SlotSize::Large],
    )
    .unwrap();

    // ASSERT
    assert_eq!(layout.number_of_slots(), 2);
    assert_eq!(layout.number_of_entry_points(), 3);
    assert_eq!(layout.size_of(SlotIdx(1)), Some(SlotSize::Large));
    assert!(layout.slot(SlotIdx(2)).is_none());
    assert!(layout.entry_point(EntryPointIdx(3)).is_none());
    assert_eq!(layout.get_entry_point_id(EntryPointIdx(1)), Some("east"));
    assert_eq!(
        layout
            .slot(SlotIdx(1))
            .unwrap()
            .distances()
            .collect::<Vec<_>>(),
        vec![
            (EntryPointIdx(0), 3),
            (EntryPointIdx(1), 2),
            (EntryPointIdx(2), 3)
        ]
    );
}

#[test]
fn layout_without_slots_is_allowed() {
    let layout = Layout::new(ids(&["a", "b", "c"]), vec![], vec![]).unwrap();
    assert_eq!(layout.number_of_slots(), 0);
}

#[test]
fn two_entry_points_are_rejected() {
    assert_eq!(
        Layout::new(ids(&["a", "b"]), vec![vec![1, 2]], vec![SlotSize::Small]),
        Err(ConfigurationError::TooFewEntryPoints {
            found: 2,
            minimum: 3
        })
    );
}

#[test]
fn duplicate_entry_points_are_rejected() {
    assert_eq!(
        Layout::new(
            ids(&["a", "b", "a"]),
            vec![vec![1, 2, 3]],
            vec![SlotSize::Small]
        ),
        Err(ConfigurationError::DuplicateEntryPoint(String::from("a")))
    );
}

#[test]
fn mismatching_slot_count_is_rejected() {
    assert_eq!(
        Layout::new(
            ids(&["a", "b", "c"]),
            vec![vec![1, 2, 3]],
            vec![SlotSize::Small, SlotSize::Medium]
        ),
        Err(ConfigurationError::SlotCountMismatch { rows: 1, slots: 2 })
    );
}

#[test]
fn ragged_distance_table_is_rejected() {
    assert_eq!(
        Layout::new(
            ids(&["a", "b", "c"]),
            vec![vec![1, 2, 3], vec![1, 2]],
            vec![SlotSize::Small, SlotSize::Medium]
        ),
        Err(ConfigurationError::DistanceRowMismatch {
            slot: 1,
            found: 2,
            expected: 3
        })
    );
}

#[test]
fn positions_within_the_index_range_are_converted() {
    assert_eq!(position_to_idx(0), Ok(0));
    assert_eq!(position_to_idx(Idx::MAX as usize), Ok(Idx::MAX));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn positions_beyond_the_index_range_are_rejected() {
    assert_eq!(
        position_to_idx(Idx::MAX as usize + 1),
        Err(ConfigurationError::IndexOutOfRange(Idx::MAX as usize + 1))
    );
}
