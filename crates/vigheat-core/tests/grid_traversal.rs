use std::collections::BTreeSet;

use vigheat_core::grid::defaults::{default_grid, DEFAULT_SOURCE_TEXT};
use vigheat_core::grid::grid::{parse_key_lengths, parse_text_lengths};
use vigheat_core::validate::{normalize_plaintext, validate_grid, validate_plaintext};
use vigheat_core::{EvalGrid, TextLength};

#[test]
fn default_grid_is_valid_and_has_42_cases() {
    let g = default_grid();
    validate_grid(&g).unwrap();
    assert_eq!(g.source_chars(), 85);
    assert_eq!(g.text_lengths_ascending(), vec![15, 25, 40, 55, 70, 85]);
    assert_eq!(g.key_lengths_ascending(), vec![2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(g.case_count(), 42);
}

#[test]
fn traversal_visits_every_pair_once_in_reverse_order() {
    let g = default_grid();
    let t = g.traversal();
    assert_eq!(t.len(), 42);

    let unique: BTreeSet<_> = t.iter().copied().collect();
    assert_eq!(unique.len(), 42);

    assert_eq!(t[0], (85, 8));
    assert_eq!(t[1], (85, 7));
    assert_eq!(t[6], (85, 2));
    assert_eq!(t[7], (70, 8));
    assert_eq!(*t.last().unwrap(), (15, 2));
}

#[test]
fn sample_is_a_char_prefix() {
    let g = default_grid();
    assert_eq!(g.sample(15), "bright clouds g");
    assert_eq!(g.sample(85), DEFAULT_SOURCE_TEXT);
    assert_eq!(g.sample(500), DEFAULT_SOURCE_TEXT);
}

#[test]
fn uppercase_source_is_rejected() {
    let mut g = default_grid();
    g.source_text = "Bright clouds".into();
    let err = validate_grid(&g).unwrap_err().to_string();
    assert!(err.contains("lowercase"), "{err}");
}

#[test]
fn non_ascii_letters_are_rejected_even_after_normalizing() {
    assert!(validate_plaintext("caf\u{e9}").is_err());
    assert!(validate_plaintext(&normalize_plaintext("CAF\u{c9}")).is_err());
    assert!(validate_plaintext(&normalize_plaintext("Hello, World")).is_ok());
}

#[test]
fn duplicate_lengths_are_rejected() {
    let mut g = default_grid();
    g.key_lengths = vec![2, 3, 3];
    assert!(validate_grid(&g).is_err());

    // 85 is also what "full" resolves to.
    let mut g = default_grid();
    g.text_lengths.push(TextLength::Chars(85));
    assert!(validate_grid(&g).is_err());
}

#[test]
fn zero_and_empty_axes_are_rejected() {
    let mut g = default_grid();
    g.key_lengths = vec![0, 2];
    assert!(validate_grid(&g).is_err());

    let mut g = default_grid();
    g.text_lengths = vec![];
    assert!(validate_grid(&g).is_err());

    let g = EvalGrid {
        source_text: String::new(),
        ..default_grid()
    };
    assert!(validate_grid(&g).is_err());
}

#[test]
fn parses_axis_lists() {
    assert_eq!(
        parse_text_lengths("10, 20,full").unwrap(),
        vec![TextLength::Chars(10), TextLength::Chars(20), TextLength::Full]
    );
    assert!(parse_text_lengths("10,x").is_err());

    assert_eq!(parse_key_lengths("2..=5").unwrap(), vec![2, 3, 4, 5]);
    assert_eq!(parse_key_lengths("4,2").unwrap(), vec![4, 2]);
    assert!(parse_key_lengths("5..=2").is_err());
}

#[test]
fn declared_order_does_not_change_traversal() {
    let g = EvalGrid {
        source_text: "abcdefghij".into(),
        text_lengths: vec![TextLength::Full, TextLength::Chars(3)],
        key_lengths: vec![3, 1, 2],
    };
    validate_grid(&g).unwrap();
    assert_eq!(
        g.traversal(),
        vec![(10, 3), (10, 2), (10, 1), (3, 3), (3, 2), (3, 1)]
    );
}
