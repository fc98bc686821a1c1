use crate::combination::{Combination, Group};

#[test]
fn test_group_single_digit_letters() {
    let group = Group::from_digits("1", 0, 1);
    assert!(group.is_ok());
    if let Ok(group) = group {
        assert_eq!(group.value(), 1);
        assert_eq!(group.letter(), 'A');
    }

    let group = Group::from_digits("9", 0, 1);
    assert!(group.is_ok());
    if let Ok(group) = group {
        assert_eq!(group.value(), 9);
        assert_eq!(group.letter(), 'I');
    }
}

#[test]
fn test_group_two_digit_letters() {
    let group = Group::from_digits("10", 0, 2);
    assert!(group.is_ok());
    if let Ok(group) = group {
        assert_eq!(group.value(), 10);
        assert_eq!(group.letter(), 'J');
    }

    let group = Group::from_digits("26", 0, 2);
    assert!(group.is_ok());
    if let Ok(group) = group {
        assert_eq!(group.value(), 26);
        assert_eq!(group.letter(), 'Z');
    }
}

#[test]
fn test_group_rejects_unmapped_values() {
    assert!(Group::from_digits("0", 0, 1).is_err());
    assert!(Group::from_digits("05", 0, 2).is_err());
    assert!(Group::from_digits("27", 0, 2).is_err());
    assert!(Group::from_digits("99", 0, 2).is_err());
}

#[test]
fn test_group_rejects_invalid_ranges() {
    assert!(Group::from_digits("123", 0, 0).is_err());
    assert!(Group::from_digits("123", 2, 1).is_err());
    assert!(Group::from_digits("123", 0, 4).is_err());
}

#[test]
fn test_combination_from_groups() {
    let groups = [
        Group::from_digits("1212", 0, 1),
        Group::from_digits("1212", 1, 2),
        Group::from_digits("1212", 2, 4),
    ];
    assert!(groups.iter().all(Result::is_ok));

    let groups: Vec<Group> = groups.into_iter().flatten().collect();
    let combination = Combination::from_groups(&groups);
    assert_eq!(combination.letters, "ABL");
    assert_eq!(combination.numbers, "1 2 12");
}

#[test]
fn test_combination_display() {
    let groups = [
        Group::from_digits("111", 0, 1),
        Group::from_digits("111", 1, 3),
    ];
    assert!(groups.iter().all(Result::is_ok));

    let groups: Vec<Group> = groups.into_iter().flatten().collect();
    let combination = Combination::from_groups(&groups);
    assert_eq!(format!("{}", combination), "AK (1 11)");
}

#[test]
fn test_group_display() {
    let group = Group::from_digits("13", 0, 2);
    assert!(group.is_ok());
    if let Ok(group) = group {
        assert_eq!(format!("{}", group), "M");
    }
}
