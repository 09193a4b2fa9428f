use minibag::prelude::*;
use minibag::tree::{
    ClassCounter,
    LR,
    Splitter,
    best_label,
    class_counts,
    find_best_split,
    gini,
    partition,
};


fn fruit_meta() -> Metadata {
    Metadata::new(vec![
        Attribute::categorical("Color")
            .categories(&["Green", "Yellow", "Red"]),
        Attribute::numeric("Diameter"),
    ])
    .label_names(&["Apple", "Grape"])
}


fn fruit_rows() -> Vec<Row> {
    vec![
        vec![0, 3, 0],
        vec![1, 3, 0],
        vec![2, 1, 1],
        vec![2, 1, 1],
    ]
}


fn counter(pairs: &[(i64, usize)]) -> ClassCounter {
    pairs.iter().copied().collect()
}


#[test]
fn gini_is_zero_iff_pure() {
    assert_eq!(gini(&counter(&[(5, 7)]), 7), 0.0);
    assert_eq!(gini(&ClassCounter::new(), 0), 0.0);

    let mixed = gini(&counter(&[(0, 2), (1, 2)]), 4);
    assert!((mixed - 0.5).abs() < 1e-12);
}


#[test]
fn gini_respects_its_upper_bound() {
    // k equiprobable classes attain the maximum 1 - 1/k.
    let uniform3 = gini(&counter(&[(0, 5), (1, 5), (2, 5)]), 15);
    assert!((uniform3 - (1.0 - 1.0 / 3.0)).abs() < 1e-12);

    let skewed = gini(&counter(&[(0, 9), (1, 1)]), 10);
    assert!(skewed > 0.0);
    assert!(skewed <= 1.0 - 1.0 / 2.0);
}


#[test]
fn class_counts_tallies_the_trailing_label() {
    let counts = class_counts(&fruit_rows());
    assert_eq!(counts, counter(&[(0, 2), (1, 2)]));
    assert_eq!(counts.values().sum::<usize>(), fruit_rows().len());
}


#[test]
fn best_label_breaks_ties_toward_the_smallest_code() {
    assert_eq!(best_label(&counter(&[(0, 1), (1, 1)])), Some(0));
    assert_eq!(best_label(&counter(&[(1, 3), (2, 5)])), Some(2));
    assert_eq!(best_label(&ClassCounter::new()), None);
}


#[test]
fn partition_covers_every_row_exactly_once() {
    let meta = fruit_meta();
    let rows = fruit_rows();
    let rule = Splitter::new(0, 2, &meta).unwrap();

    let (left, right) = partition(rows.clone(), &rule);

    assert_eq!(left.len() + right.len(), rows.len());
    assert!(left.iter().all(|row| rule.split(row) == LR::Left));
    assert!(right.iter().all(|row| rule.split(row) == LR::Right));

    let mut recombined = [&left[..], &right[..]].concat();
    recombined.sort();
    let mut original = rows;
    original.sort();
    assert_eq!(recombined, original);
}


#[test]
fn fruit_best_split_is_color_equals_red() {
    let meta = fruit_meta();
    let rows = fruit_rows();

    let best = find_best_split(&rows, &meta).unwrap().unwrap();

    assert_eq!(best.rule.column(), 0);
    assert_eq!(best.rule.threshold(), 2);
    assert_eq!(best.rule.feature_type(), FeatureType::Categorical);
    assert_eq!(best.rule.describe(&meta), "Color == Red");
    assert!((best.gain - 0.5).abs() < 1e-12);
}


#[test]
fn numeric_threshold_is_the_next_distinct_value() {
    let meta = Metadata::new(vec![Attribute::numeric("x")]);
    let rows = vec![
        vec![1, 0],
        vec![3, 1],
    ];

    let best = find_best_split(&rows, &meta).unwrap().unwrap();

    assert_eq!(best.rule.column(), 0);
    assert_eq!(best.rule.threshold(), 3);
    assert_eq!(best.rule.feature_type(), FeatureType::Numeric);
    assert!((best.gain - 0.5).abs() < 1e-12);

    // `x >= 3` sends the larger row left, the smaller right.
    assert_eq!(best.rule.split(&[3, 1]), LR::Left);
    assert_eq!(best.rule.split(&[1, 0]), LR::Right);
}


#[test]
fn pure_and_degenerate_row_sets_do_not_split() {
    let meta = fruit_meta();

    // A pure node gains nothing from any split.
    let pure = vec![
        vec![0, 1, 0],
        vec![1, 2, 0],
    ];
    assert!(find_best_split(&pure, &meta).unwrap().is_none());

    // Neither does an empty row set.
    assert!(find_best_split(&[], &meta).unwrap().is_none());

    // Nor a mixed-label set whose features are all constant.
    let constant = vec![
        vec![2, 1, 0],
        vec![2, 1, 1],
    ];
    assert!(find_best_split(&constant, &meta).unwrap().is_none());
}


#[test]
fn splitter_rejects_columns_outside_the_schema() {
    let meta = fruit_meta();

    let err = Splitter::new(5, 0, &meta).unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidColumnIndex { column: 5, n_feature: 2 },
    ));
}
