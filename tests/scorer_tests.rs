use keyfit::corpus::analyze;
use keyfit::layouts::Layout;
use keyfit::scorer::{engine, score_catalog};
use rstest::rstest;
use strum::IntoEnumIterator;

#[test]
fn test_aaa_under_norman_qwerty_dvorak() {
    let freqs = analyze("aaa");
    assert_eq!(freqs.count('a'), 3);
    assert_eq!(freqs.total(), 3);
    // 'a' sits in the 1.5 tier of all three.
    for layout in [Layout::Norman, Layout::Qwerty, Layout::Dvorak] {
        let result = engine::score(&freqs, layout.effort_table());
        assert_eq!(result.total, 4.5);
        assert_eq!(result.unscored, 0);
    }
}

#[test]
fn test_qz_under_norman() {
    // Both land in Norman's 4.0 tier.
    let freqs = analyze("qz");
    let result = engine::score(&freqs, Layout::Norman.effort_table());
    assert_eq!(result.total, 8.0);
    assert_eq!(result.unscored, 0);
}

#[test]
fn test_empty_text_scores_zero_everywhere() {
    let freqs = analyze("");
    let results = score_catalog(&freqs);
    assert_eq!(results.len(), 11);
    for (_, score) in results {
        assert_eq!(score.total, 0.0);
        assert_eq!(score.unscored, 0);
    }
}

#[test]
fn test_catalog_results_in_order() {
    let freqs = analyze("etaoin shrdlu");
    let names: Vec<String> = score_catalog(&freqs)
        .iter()
        .map(|(l, _)| l.to_string())
        .collect();
    assert_eq!(
        names,
        [
            "QWERTY", "Asset", "Capewell", "Colemak", "Colemacs", "Dvorak", "Klausler",
            "Minimak", "Norman", "QGMLWY", "Workman",
        ]
    );
}

// 'a' is tier 1.5 on most of the catalog and tier 1.0 on the rest.
#[rstest]
#[case(Layout::Qwerty, 4.5)]
#[case(Layout::Asset, 4.5)]
#[case(Layout::Capewell, 3.0)]
#[case(Layout::Colemak, 4.5)]
#[case(Layout::Colemacs, 3.0)]
#[case(Layout::Dvorak, 4.5)]
#[case(Layout::Klausler, 3.0)]
#[case(Layout::Minimak, 4.5)]
#[case(Layout::Norman, 4.5)]
#[case(Layout::Qgmlwy, 3.0)]
#[case(Layout::Workman, 4.5)]
fn test_aaa_across_catalog(#[case] layout: Layout, #[case] expected: f64) {
    let freqs = analyze("aaa");
    let result = engine::score(&freqs, layout.effort_table());
    assert_eq!(result.total, expected);
}

#[test]
fn test_mixed_case_scores_match_lowercase() {
    let upper = analyze("AAA");
    let lower = analyze("aaa");
    for layout in Layout::iter() {
        assert_eq!(
            engine::score(&upper, layout.effort_table()),
            engine::score(&lower, layout.effort_table())
        );
    }
}

#[test]
fn test_unscored_chars_leave_total_untouched() {
    // ' ' has no tier in any table; everything else here does on QWERTY.
    let freqs = analyze("ok, go.");
    let result = engine::score(&freqs, Layout::Qwerty.effort_table());
    assert_eq!(result.total, 15.0);
    assert_eq!(result.unscored, 1);
}

#[test]
fn test_dvorak_gap_scores_zero() {
    let freqs = analyze("x");
    let dvorak = engine::score(&freqs, Layout::Dvorak.effort_table());
    assert_eq!(dvorak.total, 0.0);
    assert_eq!(dvorak.unscored, 1);

    let qwerty = engine::score(&freqs, Layout::Qwerty.effort_table());
    assert_eq!(qwerty.total, 4.0);
    assert_eq!(qwerty.unscored, 0);
}

#[test]
fn test_pipeline_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog.";
    let first = score_catalog(&analyze(text));
    let second = score_catalog(&analyze(text));
    assert_eq!(first, second);
}
