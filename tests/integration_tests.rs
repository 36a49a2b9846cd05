use linediff::{
    edit_distance, histogram_diff, lines, myers_diff, patience_diff, prepare, similarity,
    Algorithm, DiffConfiguration, DiffResult, Differ, EditOperation, Error, Line, Patcher,
};
use similar::{capture_diff_slices, Algorithm as SimilarAlgorithm, DiffTag};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Helper function to get the path to the fixtures directory
fn fixtures_path() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    Path::new(&manifest_dir).join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_path().join("code").join(name)).unwrap()
}

/// Replay an edit script over `source` the way a presentation layer would.
fn apply(source: &[Line], script: &[EditOperation]) -> Vec<Line> {
    let mut cursor = 0;
    let mut out = Vec::new();
    for op in script {
        match op {
            EditOperation::Keep(line) => {
                assert_eq!(&source[cursor], line, "keep out of sync at {cursor}");
                out.push(line.clone());
                cursor += 1;
            }
            EditOperation::Delete(line) => {
                assert_eq!(&source[cursor], line, "delete out of sync at {cursor}");
                cursor += 1;
            }
            EditOperation::Insert(line) => out.push(line.clone()),
        }
    }
    assert_eq!(cursor, source.len(), "script did not consume the source");
    out
}

/// Brute-force LCS length, the reference for minimality.
fn lcs_len(a: &[Line], b: &[Line]) -> usize {
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table[a.len()][b.len()]
}

fn random_lines(rng: &mut fastrand::Rng, max_len: usize, alphabet: &[&str]) -> Vec<Line> {
    let len = rng.usize(0..=max_len);
    (0..len)
        .map(|_| Line::from(alphabet[rng.usize(0..alphabet.len())]))
        .collect()
}

// Mixes one-, two-, three- and four-byte chars.
const CHARS: &[char] = &['a', 'b', 'é', 'ß', '中', '文', '🦀', '\u{301}'];

fn random_string(rng: &mut fastrand::Rng, max_len: usize) -> String {
    let len = rng.usize(0..=max_len);
    (0..len).map(|_| CHARS[rng.usize(0..CHARS.len())]).collect()
}

fn all_algorithms(source: &[Line], target: &[Line]) -> [DiffResult; 3] {
    [
        myers_diff(source, target),
        patience_diff(source, target),
        histogram_diff(source, target),
    ]
}

#[test]
fn test_scenario_identical() {
    let s = lines(["a", "b", "c"]);
    let result = myers_diff(&s, &s);
    assert_eq!(result.distance, 0);
    assert_eq!(
        result.edit_script,
        vec![
            EditOperation::Keep("a".into()),
            EditOperation::Keep("b".into()),
            EditOperation::Keep("c".into())
        ]
    );
    assert_eq!(result.similarity, 1.0);
}

#[test]
fn test_scenario_single_replacement() {
    let s = lines(["a", "b", "c"]);
    let t = lines(["a", "x", "c"]);
    let result = myers_diff(&s, &t);
    assert_eq!(result.distance, 2);
    assert!(result
        .edit_script
        .contains(&EditOperation::Delete("b".into())));
    assert!(result
        .edit_script
        .contains(&EditOperation::Insert("x".into())));
    assert_eq!(apply(&s, &result.edit_script), t);
}

#[test]
fn test_scenario_insert_into_empty() {
    let result = myers_diff(&[], &lines(["a", "b"]));
    assert_eq!(result.distance, 2);
    assert_eq!(
        result.edit_script,
        vec![
            EditOperation::Insert("a".into()),
            EditOperation::Insert("b".into())
        ]
    );
}

#[test]
fn test_scenario_edit_distances() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("abc", ""), 3);
}

#[test]
fn test_scenario_similarity() {
    let value = similarity(&lines(["a", "b"]), &lines(["a", "b", "c"]));
    assert!((value - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_identity_property() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        let s = random_lines(&mut rng, 12, &["a", "b", "c", "d"]);
        for result in all_algorithms(&s, &s) {
            assert!(result
                .edit_script
                .iter()
                .all(|op| matches!(op, EditOperation::Keep(_))));
            assert_eq!(result.distance, 0);
            assert_eq!(result.similarity, 1.0);
        }
    }
}

#[test]
fn test_round_trip_property() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..500 {
        let s = random_lines(&mut rng, 15, &["a", "b", "c", "}", ""]);
        let t = random_lines(&mut rng, 15, &["a", "b", "c", "}", ""]);
        for result in all_algorithms(&s, &t) {
            assert_eq!(apply(&s, &result.edit_script), t, "{}", result.algorithm);
            let summary = result.summary();
            assert_eq!(summary.changes(), result.distance);
            assert_eq!(summary.unchanged + summary.deletions, s.len());
            assert_eq!(summary.unchanged + summary.additions, t.len());

            let patcher = Patcher::new(&result.edit_script);
            assert_eq!(patcher.apply(&t, true).unwrap(), s);
        }
    }
}

#[test]
fn test_numbered_lines_point_into_inputs() {
    let mut rng = fastrand::Rng::with_seed(21);
    for _ in 0..300 {
        let s = random_lines(&mut rng, 12, &["a", "b", "c", ""]);
        let t = random_lines(&mut rng, 12, &["a", "b", "c", ""]);
        for result in all_algorithms(&s, &t) {
            for added in result.additions() {
                assert_eq!(t[added.line_number - 1], added.line);
            }
            for deleted in result.deletions() {
                assert_eq!(s[deleted.line_number - 1], deleted.line);
            }
            let kept = result.unchanged();
            for line in &kept {
                assert_eq!(s[line.line_number - 1], line.line);
            }
            let summary = result.summary();
            assert_eq!(result.additions().len(), summary.additions);
            assert_eq!(result.deletions().len(), summary.deletions);
            assert_eq!(kept.len(), summary.unchanged);
        }
    }
}

#[test]
fn test_myers_is_minimal() {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..500 {
        let s = random_lines(&mut rng, 10, &["a", "b", "c"]);
        let t = random_lines(&mut rng, 10, &["a", "b", "c"]);
        let result = myers_diff(&s, &t);
        let minimal = s.len() + t.len() - 2 * lcs_len(&s, &t);
        assert_eq!(result.distance, minimal, "{s:?} -> {t:?}");
        assert!(result.is_minimal());

        for heuristic in [patience_diff(&s, &t), histogram_diff(&s, &t)] {
            assert!(heuristic.distance >= minimal);
            assert!(!heuristic.is_minimal());
        }
    }
}

#[test]
fn test_myers_never_worse_than_similar() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..200 {
        let s = random_lines(&mut rng, 30, &["fn", "let", "}", "{", "return", ""]);
        let t = random_lines(&mut rng, 30, &["fn", "let", "}", "{", "return", ""]);
        let reference: usize = capture_diff_slices(SimilarAlgorithm::Myers, &s, &t)
            .iter()
            .map(|op| match op.tag() {
                DiffTag::Equal => 0,
                DiffTag::Delete => op.old_range().len(),
                DiffTag::Insert => op.new_range().len(),
                DiffTag::Replace => op.old_range().len() + op.new_range().len(),
            })
            .sum();
        assert!(myers_diff(&s, &t).distance <= reference);
    }
}

#[test]
fn test_myers_is_deterministic() {
    let s = lines(["a", "b", "a", "c", "b"]);
    let t = lines(["b", "a", "c", "a", "b"]);
    let first = myers_diff(&s, &t);
    for _ in 0..10 {
        assert_eq!(myers_diff(&s, &t), first);
    }
}

#[test]
fn test_edit_distance_properties() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..300 {
        let a = random_string(&mut rng, 12);
        let b = random_string(&mut rng, 12);
        let c = random_string(&mut rng, 12);

        let ab = edit_distance(&a, &b);
        assert_eq!(ab, edit_distance(&b, &a));
        assert_eq!(ab, levenshtein::levenshtein(&a, &b));
        assert_eq!(ab == 0, a == b);
        assert!(ab <= a.chars().count().max(b.chars().count()));
        assert!(edit_distance(&a, &c) <= ab + edit_distance(&b, &c));
    }
}

#[test]
fn test_similarity_bounds() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..300 {
        let s = random_lines(&mut rng, 10, &["a", "b", "c"]);
        let t = random_lines(&mut rng, 10, &["a", "b", "c"]);
        let value = similarity(&s, &t);
        assert!((0.0..=1.0).contains(&value));
        assert_eq!(similarity(&s, &s), 1.0);
        if !t.is_empty() {
            assert_eq!(similarity(&[], &t), 0.0);
        }
    }
}

#[test]
fn test_fixture_pairs_with_every_algorithm() {
    let pairs = [
        ("tokenizer_before.rs", "tokenizer_after.rs"),
        ("settings_before.toml", "settings_after.toml"),
    ];
    for (before, after) in pairs {
        let old = load_fixture(before);
        let new = load_fixture(after);
        let mut myers_distance = None;
        for algorithm in [Algorithm::Myers, Algorithm::Patience, Algorithm::Histogram] {
            let config = DiffConfiguration::default().algorithm(algorithm);
            let result = Differ::new(config.clone()).diff(&old, &new).unwrap();
            let source = prepare(&old, &config);
            let target = prepare(&new, &config);
            assert_eq!(apply(&source, &result.edit_script), target);

            let myers = *myers_distance.get_or_insert(result.distance);
            assert!(result.distance >= myers);
            assert!(!result.hunks(config.context_lines).is_empty());
        }
    }
}

#[test]
fn test_settings_fixture_hunks() {
    let old = load_fixture("settings_before.toml");
    let new = load_fixture("settings_after.toml");
    let result = Differ::default().diff(&old, &new).unwrap();
    let summary = result.summary();
    assert_eq!(summary.additions, 7);
    assert_eq!(summary.deletions, 7);

    // server+logging and eviction+features merge; cache stays on its own.
    let hunks = result.hunks(1);
    assert_eq!(hunks.len(), 3);
    for hunk in &hunks {
        assert!(hunk.to_string().starts_with("@@ -"));
    }
}

#[test]
fn test_limit_exceeded_returns_no_result() {
    let old = load_fixture("tokenizer_before.rs");
    let new = load_fixture("settings_after.toml");
    let config = DiffConfiguration::default().max_distance(Some(10));
    match Differ::new(config).diff(&old, &new) {
        Err(Error::LimitExceeded { limit }) => assert_eq!(limit, 10),
        other => panic!("expected limit error, got {other:?}"),
    }
}

#[test]
fn test_unknown_algorithm_is_a_configuration_error() {
    let err = DiffConfiguration::with_algorithm_name("quantum").unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert_eq!(err.to_string(), "Invalid algorithm 'quantum'");
}
