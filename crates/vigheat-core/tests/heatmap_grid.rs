use vigheat_core::grid::defaults::default_grid;
use vigheat_core::heatmap::color::{coolwarm, label_color, COOL, MID, WARM};
use vigheat_core::heatmap::text;
use vigheat_core::{Accuracy, HeatmapGrid, ResultEntry, ResultTable};

fn entry(tl: usize, kl: usize, acc: f64) -> ResultEntry {
    ResultEntry {
        text_len: tl,
        key_len: kl,
        key: "a".repeat(kl),
        ciphertext: String::new(),
        accuracy: Accuracy::new(acc).unwrap(),
    }
}

#[test]
fn rows_and_columns_ascending_missing_is_zero() {
    let t = ResultTable::from_entries([entry(85, 8, 90.0), entry(15, 2, 10.0)]).unwrap();
    let h = HeatmapGrid::from_grid(&t, &default_grid());

    assert_eq!(h.rows(), 6);
    assert_eq!(h.cols(), 7);
    assert_eq!(h.text_lengths, vec![15, 25, 40, 55, 70, 85]);
    assert_eq!(h.key_lengths, vec![2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(h.get(0, 0), Some(10.0));
    assert_eq!(h.get(5, 6), Some(90.0));
    assert_eq!(h.get(2, 3), Some(0.0));
    assert_eq!(h.get(6, 0), None);
    assert_eq!(h.get(0, 7), None);
    assert_eq!(h.value_range(), (0.0, 90.0));
}

#[test]
fn axes_from_table() {
    let t = ResultTable::from_entries([entry(40, 3, 1.0), entry(10, 5, 2.0), entry(40, 5, 3.0)]).unwrap();
    let h = HeatmapGrid::from_table(&t);
    assert_eq!(h.text_lengths, vec![10, 40]);
    assert_eq!(h.key_lengths, vec![3, 5]);
    assert_eq!(h.cells, vec![vec![0.0, 2.0], vec![1.0, 3.0]]);
}

#[test]
fn duplicate_pair_is_an_error() {
    assert!(ResultTable::from_entries([entry(10, 2, 1.0), entry(10, 2, 5.0)]).is_err());
}

#[test]
fn flat_grid_normalizes_to_middle() {
    let t = ResultTable::from_entries([entry(10, 2, 50.0), entry(10, 3, 50.0)]).unwrap();
    let h = HeatmapGrid::from_table(&t);
    assert_eq!(h.normalized(50.0), 0.5);
}

#[test]
fn text_render_has_title_axes_and_one_decimal_cells() {
    let t = ResultTable::from_entries([entry(15, 2, 42.5), entry(15, 3, 7.0)]).unwrap();
    let s = text::render(&HeatmapGrid::from_table(&t));
    assert!(s.starts_with("Vigenere Decryption Accuracy Heatmap"));
    assert!(s.contains("Key Length"));
    assert!(s.contains("Text Length"));
    assert!(s.contains("42.5"));
    assert!(s.contains("7.0"));
}

#[test]
fn text_render_lays_out_one_line_per_row() {
    let t = ResultTable::from_entries([entry(15, 2, 1.0), entry(25, 2, 2.0)]).unwrap();
    let s = text::render(&HeatmapGrid::from_table(&t));
    // title, axis label, header, rule, two rows
    assert_eq!(s.lines().count(), 6);
    assert!(s.lines().nth(4).unwrap().trim_end().ends_with("1.0"));
    assert!(s.lines().nth(5).unwrap().trim_end().ends_with("2.0"));
}

#[test]
fn coolwarm_endpoints_and_midpoint() {
    assert_eq!(coolwarm(0.0), COOL);
    assert_eq!(coolwarm(0.5), MID);
    assert_eq!(coolwarm(1.0), WARM);
    assert_eq!(coolwarm(-3.0), COOL);
    assert_eq!(coolwarm(f64::NAN), MID);
    assert_eq!(label_color(MID), (0, 0, 0));
    assert_eq!(label_color(WARM), (255, 255, 255));
}
