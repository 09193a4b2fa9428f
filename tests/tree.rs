use minibag::prelude::*;


// Toy fruit table.
//
//  Color   Diameter  Fruit
//  Green      3      Apple
//  Yellow     3      Apple
//  Red        1      Grape
//  Red        1      Grape
//
// `Color == Red` already separates the classes perfectly,
// so the grown tree is a single branch over two pure leaves.
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


// Toy example  (o/x are the pos/neg examples)
//
// 130|                     |
//    |                   5 |
//    |                  x  |
//    |                     |         6
//    |                     |        x
// 100|       4             |________________________ 95
//    |      x              |             1
//    |                     |            o
//    |                     |
//    |                     |   0
//  50|                     |  o
//    |                     |                 2
//    |                     |                o
//    |            3        |
//    |           x         |
//    |_____________________|____________________
//   0            50        | 100           150
//                          |
//                         90
//
fn grid_sample() -> Sample {
    let meta = Metadata::new(vec![
        Attribute::numeric("x"),
        Attribute::numeric("y"),
    ])
    .label_names(&["neg", "pos"]);

    let rows = vec![
        vec![100,  50, 1],
        vec![140,  80, 1],
        vec![150,  30, 1],
        vec![ 50,  10, 0],
        vec![ 30,  90, 0],
        vec![ 80, 130, 0],
        vec![120, 110, 0],
    ];

    Sample::new(meta, rows).unwrap()
}


#[test]
fn fruit_tree_separates_perfectly() {
    let sample = fruit_sample();
    let tree = DecisionTree::init().fit(&sample).unwrap();

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaves(), 2);
    assert_eq!(tree.accuracy(&sample), 1.0);

    // Every training row reaches a pure leaf counting its own label.
    for (i, row) in sample.rows().iter().enumerate() {
        let counts = tree.classify(row);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&sample.label_of(i)), Some(&2));
        assert_eq!(tree.predict(row), Some(sample.label_of(i)));
    }
}


#[test]
fn fruit_tree_text_dump() {
    let sample = fruit_sample();
    let tree = DecisionTree::init().fit(&sample).unwrap();

    let expected = "\
Color == Red
--> True:
   Predict: {Grape: 2}
--> False:
   Predict: {Apple: 2}
";
    assert_eq!(tree.to_text(sample.meta()), expected);
}


#[test]
fn grid_tree_separates_perfectly() {
    let sample = grid_sample();
    let tree = DecisionTree::init().fit(&sample).unwrap();

    let (n_sample, _) = sample.shape();
    assert!(tree.depth() <= n_sample);
    assert_eq!(tree.accuracy(&sample), 1.0);

    for (i, row) in sample.rows().iter().enumerate() {
        let counts = tree.classify(row);
        assert!(*counts.get(&sample.label_of(i)).unwrap() >= 1);
    }
}


#[test]
fn parallel_growth_matches_sequential() {
    let sample = grid_sample();

    let forked = DecisionTree::init().fit(&sample).unwrap();
    let sequential = DecisionTree::init()
        .parallel(false)
        .fit(&sample)
        .unwrap();

    assert_eq!(forked, sequential);
}


#[test]
fn constant_features_give_a_single_leaf() {
    let meta = Metadata::new(vec![Attribute::numeric("x")]);
    let rows = vec![
        vec![1, 0],
        vec![1, 1],
    ];
    let sample = Sample::new(meta, rows).unwrap();

    let tree = DecisionTree::init().fit(&sample).unwrap();

    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.leaves(), 1);
    // Both labels tie at one count each; the smaller code wins.
    assert_eq!(tree.predict(&[1, 0]), Some(0));
}


#[test]
fn empty_sample_gives_a_degenerate_leaf() {
    let meta = Metadata::new(vec![Attribute::numeric("x")]);
    let sample = Sample::new(meta, Vec::new()).unwrap();

    let tree = DecisionTree::init().fit(&sample).unwrap();

    assert_eq!(tree.leaves(), 1);
    assert!(tree.classify(&[0, 0]).is_empty());
    assert_eq!(tree.predict(&[0, 0]), None);
    assert_eq!(tree.accuracy(&sample), 1.0);
}


#[test]
fn fitted_tree_survives_serialization() {
    let sample = fruit_sample();
    let tree = DecisionTree::init().fit(&sample).unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let restored: DecisionTreeClassifier =
        serde_json::from_str(&json).unwrap();

    assert_eq!(tree, restored);
    for row in sample.rows() {
        assert_eq!(tree.predict(row), restored.predict(row));
    }
}
