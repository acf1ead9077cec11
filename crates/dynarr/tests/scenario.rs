use dynarr::{ArrayError, DynamicArray};

fn pushed(n: i32) -> DynamicArray<i32> {
    let mut arr = DynamicArray::new();
    for i in 0..n {
        arr.push(i);
    }
    arr
}

#[test]
fn eight_appends_match_literal_sequence() {
    let mut arr = pushed(8);
    let literal = DynamicArray::from([0, 1, 2, 3, 4, 5, 6, 7]);

    assert!(arr.iter().eq(literal.iter()));
    assert_eq!(arr.len(), 8);
    assert_eq!(arr.capacity(), 9);
    assert!(!arr.is_empty());
    assert_eq!(arr[2], 2);

    arr.push(100);
    assert_eq!(arr.back(), Some(&100));
    arr.remove_last();
    assert_ne!(arr.back(), Some(&100));
    arr.clear();
    assert!(arr.is_empty());
}

#[test]
fn literal_construction_sizes_capacity_to_length() {
    let arr = DynamicArray::from([0, 1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(arr.len(), 8);
    assert_eq!(arr.capacity(), arr.len());
    for i in 0..8 {
        assert_eq!(arr.at(i), Ok(&(i as i32)));
    }
}

#[test]
fn growth_steps_from_default_capacity() {
    let mut arr = DynamicArray::new();
    let mut growths = vec![arr.capacity()];
    for i in 0..8 {
        arr.push(i);
        if *growths.last().unwrap() != arr.capacity() {
            growths.push(arr.capacity());
        }
    }
    assert_eq!(growths, vec![2, 3, 4, 6, 9]);
}

#[test]
fn twenty_element_walkthrough() {
    let mut arr = pushed(20);
    assert_eq!(arr.len(), 20);
    assert_eq!(arr.front(), Some(&0));
    assert_eq!(arr.back(), Some(&19));
    assert_eq!(arr.at(2), Ok(&2));

    *arr.at_mut(2).unwrap() = 22;
    assert_eq!(arr.at(2), Ok(&22));
    assert_eq!(arr.capacity(), 28);

    arr.remove(2).unwrap();
    assert_eq!(arr.len(), 19);
    assert_eq!(arr.at(2), Ok(&3));

    arr.insert(2, 2).unwrap();
    assert_eq!(arr.len(), 20);
    assert!(arr.iter().copied().eq(0..20));

    arr.remove_last();
    assert_eq!(arr.len(), 19);

    arr.emplace_with(|| 19);
    assert_eq!(arr.len(), 20);
    assert_eq!(arr.back(), Some(&19));

    arr.shrink_to_fit();
    assert_eq!(arr.len(), 20);
    assert_eq!(arr.capacity(), 20);
}

#[test]
fn checked_operations_reject_bad_indices() {
    let mut arr = pushed(4);
    assert_eq!(arr.at(4), Err(ArrayError::OutOfRange { index: 4, len: 4 }));
    assert_eq!(
        arr.remove(4),
        Err(ArrayError::OutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        arr.insert(5, 0),
        Err(ArrayError::OutOfRange { index: 5, len: 4 })
    );
    assert!(arr.insert(4, 4).is_ok());
    assert_eq!(arr.back(), Some(&4));
}

#[test]
fn empty_after_either_clear() {
    let mut soft = pushed(5);
    soft.soft_clear();
    assert!(soft.is_empty());
    assert!(soft.capacity() > 0);

    let mut hard = pushed(5);
    hard.hard_clear();
    assert!(hard.is_empty());
    assert_eq!(hard.capacity(), 0);
}

#[test]
fn shrink_to_fit_twice_is_stable() {
    let mut arr = pushed(11);
    arr.shrink_to_fit();
    let first = arr.capacity();
    arr.shrink_to_fit();
    assert_eq!(first, arr.len());
    assert_eq!(arr.capacity(), first);
}

#[test]
fn copies_are_independent() {
    let mut original = pushed(6);
    let mut copy = original.clone();

    *copy.at_mut(0).unwrap() = 100;
    copy.push(6);
    assert_eq!(original, [0, 1, 2, 3, 4, 5]);

    original.remove(5).unwrap();
    *original.at_mut(1).unwrap() = -1;
    assert_eq!(copy, [100, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn transfer_leaves_source_usable() {
    let mut src = pushed(3);
    let dst = src.take();
    assert_eq!(dst, [0, 1, 2]);
    assert!(src.is_empty());
    assert_eq!(src.capacity(), 0);
    drop(src);
    assert_eq!(dst.len(), 3);
}

#[test]
fn spaced_listing_matches_console_format() {
    let arr = pushed(5);
    assert_eq!(format!("{}\n", arr.spaced()), "0 1 2 3 4\n");
}
