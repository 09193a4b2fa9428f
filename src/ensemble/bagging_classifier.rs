//! Defines the fitted bagging ensemble.
use fixedbitset::FixedBitSet;

use crate::classifier::Classifier;
use crate::sample::Sample;
use crate::tree::{ClassCounter, DecisionTreeClassifier, best_label};


/// Majority-vote aggregate of bootstrap-fitted trees.
/// The ensemble owns its trees outright, in build order, together
/// with the in-bag row set of every tree and the seed the draws were
/// generated from.
#[derive(Debug, Clone)]
pub struct BaggingClassifier {
    trees: Vec<DecisionTreeClassifier>,
    in_bag: Vec<FixedBitSet>,
    seed: u64,
}


impl BaggingClassifier {
    /// Assemble a fitted ensemble from its parts.
    #[inline]
    pub(super) fn from_raw(
        trees: Vec<DecisionTreeClassifier>,
        in_bag: Vec<FixedBitSet>,
        seed: u64,
    ) -> Self
    {
        Self { trees, in_bag, seed }
    }


    /// Number of trees in this ensemble.
    pub fn len(&self) -> usize {
        self.trees.len()
    }


    /// Returns `true` if the ensemble holds no tree.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }


    /// The fitted trees, in build order.
    pub fn trees(&self) -> &[DecisionTreeClassifier] {
        &self.trees[..]
    }


    /// The seed the bootstrap draws were generated from.
    pub fn seed(&self) -> u64 {
        self.seed
    }


    /// The distribution of the member trees' votes on `row`.
    /// A tree abstains only when it was fitted on zero rows.
    pub fn votes(&self, row: &[i64]) -> ClassCounter {
        let mut votes = ClassCounter::new();
        for tree in &self.trees {
            if let Some(label) = tree.predict(row) {
                *votes.entry(label).or_insert(0) += 1;
            }
        }
        votes
    }


    /// Out-of-bag error: every training row is predicted by the vote
    /// of the trees whose bootstrap draw missed it, and the error rate
    /// of those predictions is returned.
    /// `None` when no row is out-of-bag for any tree, e.g. for an
    /// ensemble whose every draw covered the whole training set.
    pub fn oob_error(&self, train: &Sample) -> Option<f64> {
        let mut scored = 0_usize;
        let mut wrong = 0_usize;
        for (i, row) in train.rows().iter().enumerate() {
            let mut votes = ClassCounter::new();
            self.trees.iter()
                .zip(&self.in_bag)
                .filter(|(_, bag)| !bag.contains(i))
                .for_each(|(tree, _)| {
                    if let Some(label) = tree.predict(row) {
                        *votes.entry(label).or_insert(0) += 1;
                    }
                });

            if let Some(prediction) = best_label(&votes) {
                scored += 1;
                if prediction != train.label_of(i) {
                    wrong += 1;
                }
            }
        }

        (scored > 0).then(|| wrong as f64 / scored as f64)
    }
}


impl Classifier for BaggingClassifier {
    /// The mode of the member trees' predictions;
    /// the smallest label code wins vote ties.
    #[inline]
    fn predict(&self, row: &[i64]) -> Option<i64> {
        best_label(&self.votes(row))
    }
}
