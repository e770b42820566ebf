use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vigheat_core::error::VigError;
use vigheat_core::grid::defaults::default_grid;
use vigheat_core::session::case::plan;
use vigheat_core::session::driver::run_session;
use vigheat_core::session::prompt::{ConsolePrompt, ScriptedScores};
use vigheat_core::{decrypt, Accuracy, EvalGrid, Key, TextLength};

fn scores(n: usize) -> ScriptedScores {
    ScriptedScores::new((0..n).map(|i| Accuracy::new(i as f64).unwrap()))
}

#[test]
fn session_fills_every_pair_exactly_once() {
    let g = default_grid();
    let mut rng = StdRng::seed_from_u64(3);
    let mut src = scores(42);

    let table = run_session(&g, &mut rng, &mut src).unwrap();
    assert_eq!(table.len(), 42);
    assert_eq!(src.remaining(), 0);

    for tl in g.text_lengths_ascending() {
        for kl in g.key_lengths_ascending() {
            assert!(table.get(tl, kl).is_some(), "missing ({tl},{kl})");
        }
    }

    // First score goes to the first visited pair.
    assert_eq!(table.get(85, 8).unwrap().value(), 0.0);
    assert_eq!(table.get(15, 2).unwrap().value(), 41.0);
}

#[test]
fn recorded_ciphertexts_decrypt_to_source_prefix() {
    let g = default_grid();
    let mut rng = StdRng::seed_from_u64(11);
    let table = run_session(&g, &mut rng, &mut scores(42)).unwrap();

    for e in table.entries() {
        assert_eq!(e.key.len(), e.key_len);
        let k = Key::new(&e.key).unwrap();
        assert_eq!(decrypt(&e.ciphertext, &k), g.sample(e.text_len));
    }
}

#[test]
fn same_seed_same_plan() {
    let g = default_grid();
    let a = plan(&g, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = plan(&g, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 42);
}

#[test]
fn console_session_prints_case_blocks() {
    let g = EvalGrid {
        source_text: "attack at dawn".into(),
        text_lengths: vec![TextLength::Chars(6), TextLength::Full],
        key_lengths: vec![2, 3],
    };
    let input = "10\nbad\n20\n30\n200\n40\n";
    let mut prompt = ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut rng = StdRng::seed_from_u64(5);

    let table = run_session(&g, &mut rng, &mut prompt).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.get(14, 3).unwrap().value(), 10.0);
    assert_eq!(table.get(14, 2).unwrap().value(), 20.0);
    assert_eq!(table.get(6, 3).unwrap().value(), 30.0);
    assert_eq!(table.get(6, 2).unwrap().value(), 40.0);

    let (_, out) = prompt.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(" -- Test Case: Text Length = 14, Key Length = 3"));
    assert!(out.contains(" -- Test Case: Text Length = 6, Key Length = 2"));
    assert_eq!(out.matches("Encrypted Text: ").count(), 4);
    assert!(out.contains("wrong input"));
}

#[test]
fn running_out_of_scores_cancels_session() {
    let g = default_grid();
    let mut rng = StdRng::seed_from_u64(1);
    let err = run_session(&g, &mut rng, &mut scores(10)).unwrap_err();
    assert!(matches!(err, VigError::Cancelled));
}

#[test]
fn invalid_grid_is_rejected_before_prompting() {
    let mut g = default_grid();
    g.source_text = "Upper".into();
    let mut src = scores(42);
    assert!(run_session(&g, &mut StdRng::seed_from_u64(1), &mut src).is_err());
    assert_eq!(src.remaining(), 42);
}
