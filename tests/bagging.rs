use minibag::prelude::*;
use minibag::research;


fn fruit_sample() -> Sample {
    let meta = Metadata::new(vec![
        Attribute::categorical("Color")
            .categories(&["Green", "Yellow", "Red"]),
        Attribute::numeric("Diameter"),
    ])
    .label_names(&["Apple", "Grape"]);

    let rows = vec![
        vec![0, 3, 0],
        vec![1, 3, 0],
        vec![2, 1, 1],
        vec![2, 1, 1],
    ];

    Sample::new(meta, rows).unwrap()
}


#[test]
fn same_seed_builds_identical_ensembles() {
    let sample = fruit_sample();

    let first = Bagging::init()
        .ensemble_size(5)
        .seed(42)
        .fit(&sample)
        .unwrap();
    let second = Bagging::init()
        .ensemble_size(5)
        .seed(42)
        .fit(&sample)
        .unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(first.trees(), second.trees());
    for row in sample.rows() {
        assert_eq!(first.predict(row), second.predict(row));
        assert_eq!(first.votes(row), second.votes(row));
    }
}


#[test]
fn singleton_bootstrap_reproduces_the_single_tree() {
    // On a one-row training set every draw is the identity,
    // so a size-1 ensemble must contain exactly the directly
    // fitted tree.
    let meta = Metadata::new(vec![
        Attribute::categorical("Color")
            .categories(&["Green", "Yellow", "Red"]),
        Attribute::numeric("Diameter"),
    ])
    .label_names(&["Apple", "Grape"]);
    let sample = Sample::new(meta, vec![vec![2, 1, 1]]).unwrap();

    let direct = DecisionTree::init().fit(&sample).unwrap();
    let bagged = Bagging::init()
        .ensemble_size(1)
        .seed(7)
        .fit(&sample)
        .unwrap();

    assert_eq!(bagged.len(), 1);
    assert_eq!(&bagged.trees()[0], &direct);
    assert_eq!(bagged.predict(&[2, 1, 1]), Some(1));

    // The single draw covers the whole (one-row) training set,
    // so there is nothing out-of-bag to score.
    assert_eq!(bagged.oob_error(&sample), None);
}


#[test]
fn unanimous_sample_is_classified_perfectly() {
    // Every bootstrap draw of an all-identical sample is the sample
    // itself, so each tree is one pure leaf and the vote is unanimous.
    let meta = Metadata::new(vec![Attribute::numeric("x")])
        .label_names(&["neg", "pos"]);
    let rows = vec![
        vec![4, 1],
        vec![4, 1],
        vec![4, 1],
    ];
    let sample = Sample::new(meta, rows).unwrap();

    let model = Bagging::init()
        .ensemble_size(8)
        .seed(0)
        .fit(&sample)
        .unwrap();

    assert_eq!(model.accuracy(&sample), 1.0);
    assert_eq!(model.votes(&[4, 1]).get(&1), Some(&8));
}


#[test]
fn fruit_ensemble_reports_sane_numbers() {
    let sample = fruit_sample();

    let model = Bagging::init()
        .ensemble_size(25)
        .seed(3)
        .fit(&sample)
        .unwrap();

    assert_eq!(model.len(), 25);
    assert_eq!(model.seed(), 3);

    let accuracy = model.accuracy(&sample);
    assert!((0.0..=1.0).contains(&accuracy));

    for row in sample.rows() {
        let votes = model.votes(row);
        assert!(votes.values().sum::<usize>() <= model.len());
        assert!(model.predict(row).is_some());
    }

    if let Some(error) = model.oob_error(&sample) {
        assert!((0.0..=1.0).contains(&error));
    }

    research::evaluation_report("Bagging", &model, &sample, &sample);
}


#[test]
fn zero_trees_is_rejected() {
    let sample = fruit_sample();

    let err = Bagging::init()
        .ensemble_size(0)
        .fit(&sample)
        .unwrap_err();

    assert!(matches!(err, ModelError::InvalidEnsembleSize));
}
