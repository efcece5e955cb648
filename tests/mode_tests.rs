use kvsort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn keys<V>(sorted: &Container<V>) -> Vec<String> {
    sorted.keys().map(ToString::to_string).collect()
}

fn is_sort_failure<T>(result: Result<T, SortError>) -> bool {
    matches!(result, Err(SortError::SortFailure { .. }))
}

#[test]
fn test_numeric_strings() {
    let sorter = Sorter::new([(1, "10"), (2, "9"), (3, "2.5")]);
    let maintain = sorter.by_value().maintain_keys();

    assert_eq!(keys(&maintain.sort(OrderingMode::Regular).unwrap()), ["3", "2", "1"]);
    assert_eq!(keys(&maintain.sort(OrderingMode::Numeric).unwrap()), ["3", "2", "1"]);
    assert_eq!(keys(&maintain.sort(OrderingMode::String).unwrap()), ["1", "3", "2"]);
    assert_eq!(
        keys(&maintain.sort_reverse(OrderingMode::Numeric).unwrap()),
        ["1", "2", "3"]
    );
}

#[test]
fn test_numeric_mode_needs_numbers() {
    let sorter = Sorter::new([("a", 1), ("b", 2)]);
    assert!(is_sort_failure(sorter.by_key().sort(OrderingMode::Numeric)));

    let sorter = Sorter::new([(1, "3"), (2, "three")]);
    assert!(is_sort_failure(
        sorter.by_value().discard_key().sort(OrderingMode::Numeric)
    ));
}

#[test]
fn test_nan_is_not_comparable() {
    let sorter = Sorter::new([("a", 1.0), ("b", f64::NAN), ("c", 0.5)]);
    let maintain = sorter.by_value().maintain_keys();

    assert!(is_sort_failure(maintain.sort(OrderingMode::Regular)));
    assert!(is_sort_failure(maintain.sort_reverse(OrderingMode::Numeric)));
    // The textual view still orders.
    assert_eq!(
        keys(&maintain.sort(OrderingMode::String).unwrap()),
        ["c", "a", "b"]
    );
}

#[test]
fn test_panicking_comparator_fails_the_sort() {
    let sorter = Sorter::new([("a", 1), ("b", 2), ("c", 3)]);
    let result = sorter
        .by_key()
        .custom_sort(|_, _| panic!("compare function gave up"));
    assert!(is_sort_failure(result));
}

#[test]
fn test_integer_keys_under_string_mode() {
    let sorter = Sorter::new((1..=10).map(|i| (i, i * 10)));
    let by_key = sorter.by_key();

    assert_eq!(
        keys(&by_key.sort(OrderingMode::Regular).unwrap()),
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
    );
    assert_eq!(
        keys(&by_key.sort(OrderingMode::String).unwrap()),
        ["1", "10", "2", "3", "4", "5", "6", "7", "8", "9"]
    );
    assert_eq!(
        keys(&by_key.sort(OrderingMode::Natural).unwrap()),
        ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
    );
}

#[test]
fn test_mixed_keys_regular() {
    let sorter = Sorter::new([
        (Key::from("b"), 0),
        (Key::Int(10), 0),
        (Key::from("9.5"), 0),
        (Key::Int(2), 0),
    ]);
    let sorted = sorter.by_key().sort(OrderingMode::Regular).unwrap();
    assert_eq!(keys(&sorted), ["2", "9.5", "10", "b"]);
}

#[test]
fn test_case_insensitive_modes() {
    let sorter = Sorter::new([(1, "b"), (2, "A"), (3, "a"), (4, "B")]);
    let maintain = sorter.by_value().maintain_keys();

    assert_eq!(
        keys(&maintain.sort(OrderingMode::String).unwrap()),
        ["2", "4", "3", "1"]
    );
    assert_eq!(
        keys(&maintain.sort(OrderingMode::StringCaseInsensitive).unwrap()),
        ["2", "3", "1", "4"]
    );
    assert_eq!(
        keys(&maintain.sort_reverse(OrderingMode::StringCaseInsensitive).unwrap()),
        ["1", "4", "2", "3"]
    );
    assert_eq!(
        keys(&maintain.sort(OrderingMode::NaturalCaseInsensitive).unwrap()),
        ["2", "3", "1", "4"]
    );
}

#[test]
fn test_optional_values() {
    let sorter = Sorter::new([("a", Some(3)), ("b", None), ("c", Some(1))]);
    let maintain = sorter.by_value().maintain_keys();

    assert_eq!(keys(&maintain.sort(OrderingMode::Regular).unwrap()), ["b", "c", "a"]);
    assert_eq!(keys(&maintain.sort(OrderingMode::Numeric).unwrap()), ["b", "c", "a"]);
}

const ALPHABET: &[u8] = b"\0aab";

fn random_strings(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..14);
            (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn indexed(input: &[String]) -> Vec<(i64, String)> {
    (0..).zip(input.iter().cloned()).collect()
}

fn check_string_mode(input: Vec<String>) {
    let sorter = Sorter::new(indexed(&input));
    let maintain = sorter.by_value().maintain_keys();

    // std's stable sort is the reference, in both directions.
    let mut ascending = indexed(&input);
    ascending.sort_by(|a, b| a.1.as_bytes().cmp(b.1.as_bytes()));
    let mut descending = indexed(&input);
    descending.sort_by(|a, b| b.1.as_bytes().cmp(a.1.as_bytes()));

    let expected = |pairs: &[(i64, String)]| -> Vec<String> {
        pairs.iter().map(|(i, _)| i.to_string()).collect()
    };

    let sorted = maintain.sort(OrderingMode::String).unwrap();
    assert_eq!(keys(&sorted), expected(&ascending));

    let sorted = maintain.sort_reverse(OrderingMode::String).unwrap();
    assert_eq!(keys(&sorted), expected(&descending));
}

#[test]
fn test_fuzz_string_mode_small() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let count = rng.random_range(0..200);
        check_string_mode(random_strings(&mut rng, count));
    }
}

#[test]
fn test_fuzz_string_mode_bucketed() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let count = rng.random_range(2000..5000);
        check_string_mode(random_strings(&mut rng, count));
    }
}

#[test]
fn test_string_mode_long_common_prefix() {
    let prefix = "a".repeat(100);
    let input = vec![
        format!("{prefix}c"),
        format!("{prefix}a"),
        prefix.clone(),
        format!("{prefix}b"),
    ];
    let sorter = Sorter::new(indexed(&input));
    let sorted = sorter
        .by_value()
        .maintain_keys()
        .sort(OrderingMode::String)
        .unwrap();
    assert_eq!(keys(&sorted), ["2", "1", "3", "0"]);
}

const LOOSE_STRINGS: [&str; 10] = ["1e1", "9", "1f", "10", "9a", " 5", "abc", "2", "1.5", "x1"];

#[test]
fn test_regular_mode_on_mixed_strings() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let count = rng.random_range(20..200);
        let input: Vec<String> = (0..count)
            .map(|_| LOOSE_STRINGS[rng.random_range(0..LOOSE_STRINGS.len())].to_string())
            .collect();
        let sorter = Sorter::new(indexed(&input));

        for sorted in [
            sorter.sort(OrderingMode::Regular).unwrap(),
            sorter.sort_reverse(OrderingMode::Regular).unwrap(),
            sorter.by_value().discard_key().sort(OrderingMode::Regular).unwrap(),
        ] {
            let mut values: Vec<&String> = sorted.values().collect();
            let mut expected: Vec<&String> = input.iter().collect();
            values.sort();
            expected.sort();
            assert_eq!(values, expected);
        }
    }
}

#[test]
fn test_regular_mode_keeps_numeric_runs_ordered() {
    // Only numeric strings: the comparison is a total order again.
    let input: Vec<String> = ["10", "9", "1e1", " 5", "2", "1.5", "9", "2.0"]
        .iter()
        .cycle()
        .take(40)
        .map(ToString::to_string)
        .collect();
    let sorter = Sorter::new(indexed(&input));
    let sorted = sorter.sort(OrderingMode::Regular).unwrap();

    let numbers: Vec<f64> = sorted
        .values()
        .map(|value| value.trim().parse::<f64>().unwrap())
        .collect();
    assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_non_transitive_comparator_still_sorts() {
    let sorter = Sorter::new((0..60).map(|i: i64| (i, i % 3)));

    // Rock, paper, scissors.
    let beats = |a: &i64, b: &i64| match (a + 3 - b) % 3 {
        0 => std::cmp::Ordering::Equal,
        1 => std::cmp::Ordering::Greater,
        _ => std::cmp::Ordering::Less,
    };

    let sorted = sorter.by_value().maintain_keys().custom_sort(beats).unwrap();
    assert_eq!(sorted.len(), 60);

    let sorted = sorter.by_value().discard_key().custom_sort(beats).unwrap();
    assert!(sorted.keys().zip(0..).all(|(key, i)| *key == Key::Int(i)));
}
