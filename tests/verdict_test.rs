// tests/verdict_test.rs
//
// Verdict reduction properties over generated detection sequences.

use injurycheckr::cli::format_interop;
use injurycheckr::{reduce, Detection, Verdict};

/// Every sequence of length <= 4 over classes {0, 1, 2, 3}
fn all_sequences() -> Vec<Vec<u32>> {
    let mut sequences = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..4 {
        let mut next = Vec::new();
        for seq in &frontier {
            for class in 0..4u32 {
                let mut extended: Vec<u32> = seq.clone();
                extended.push(class);
                next.push(extended);
            }
        }
        sequences.extend(next.iter().cloned());
        frontier = next;
    }
    sequences
}

fn detections(classes: &[u32]) -> Vec<Detection> {
    classes
        .iter()
        .enumerate()
        .map(|(i, c)| Detection::unboxed(*c, 0.1 + 0.2 * i as f32))
        .collect()
}

#[test]
fn test_verdict_is_determined_by_class_presence() {
    for classes in all_sequences() {
        let verdict = reduce(&detections(&classes));
        let expected = if classes.contains(&0) {
            Verdict::MajorInjury
        } else if classes.contains(&1) {
            Verdict::MinorInjury
        } else {
            Verdict::NoInjury
        };
        assert_eq!(verdict, expected, "classes {:?}", classes);
    }
}

#[test]
fn test_verdict_ignores_order() {
    for classes in all_sequences() {
        let mut reversed = classes.clone();
        reversed.reverse();
        let mut sorted = classes.clone();
        sorted.sort_unstable();
        let verdict = reduce(&detections(&classes));
        assert_eq!(verdict, reduce(&detections(&reversed)));
        assert_eq!(verdict, reduce(&detections(&sorted)));
    }
}

#[test]
fn test_reduce_matches_fold_of_combine() {
    for classes in all_sequences() {
        let dets = detections(&classes);
        let folded = dets
            .iter()
            .map(|d| reduce(std::slice::from_ref(d)))
            .fold(Verdict::NoInjury, Verdict::combine);
        assert_eq!(reduce(&dets), folded);
    }
}

#[test]
fn test_documented_scenarios() {
    let cases: Vec<(Vec<Detection>, Verdict, &str)> = vec![
        (vec![], Verdict::NoInjury, r#"{"injuryResult": "no injury detected"}"#),
        (
            vec![Detection::unboxed(1, 0.8)],
            Verdict::MinorInjury,
            r#"{"injuryResult": "minor injury"}"#,
        ),
        (
            vec![Detection::unboxed(1, 0.9), Detection::unboxed(0, 0.5)],
            Verdict::MajorInjury,
            r#"{"injuryResult": "major injury"}"#,
        ),
        (
            vec![Detection::unboxed(2, 0.99)],
            Verdict::NoInjury,
            r#"{"injuryResult": "no injury detected"}"#,
        ),
    ];

    for (dets, verdict, json) in cases {
        assert_eq!(reduce(&dets), verdict);
        assert_eq!(format_interop(reduce(&dets)).unwrap(), json);
    }
}
