//! Provides the bootstrap-aggregation ("bagging") trainer.
use fixedbitset::FixedBitSet;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::error::{ModelError, Result};
use crate::sample::Sample;
use crate::tree::DecisionTree;
use super::bagging_classifier::BaggingClassifier;


/// The ensemble size set as default.
const DEFAULT_ENSEMBLE_SIZE: usize = 10;


/// Trains a [`BaggingClassifier`]:
/// `ensemble_size` bootstrap samples are drawn from the training set
/// (`N` uniform draws with replacement each, `N` = training-set size),
/// one tree is grown per sample, and the trees predict by majority
/// vote.
///
/// The whole build is a pure function of the seed: every bootstrap
/// index comes from one sequential pass over a single seeded
/// generator, taken before any tree is grown, so the trees may then be
/// fitted in parallel without touching the generator.
///
/// # Example
/// The following code shows a small example
/// for running [`Bagging`].
/// ```no_run
/// use minibag::prelude::*;
///
/// // Read the training sample from a CSV file.
/// // We use the column named `class` as the label.
/// let sample = SampleReader::new()
///     .file("/path/to/data.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// // Train an ensemble of 50 trees.
/// let model = Bagging::init()
///     .ensemble_size(50)
///     .seed(1234)
///     .fit(&sample)
///     .unwrap();
///
/// println!("accuracy: {}", model.accuracy(&sample));
/// ```
pub struct Bagging {
    ensemble_size: usize,
    seed: u64,
}


impl Bagging {
    /// Initialize [`Bagging`] with the default ensemble size
    /// and seed `0`.
    #[inline]
    pub fn init() -> Self {
        Self {
            ensemble_size: DEFAULT_ENSEMBLE_SIZE,
            seed: 0,
        }
    }


    /// Set the number of trees. Default is `10`.
    pub fn ensemble_size(mut self, size: usize) -> Self {
        self.ensemble_size = size;
        self
    }


    /// Set the seed of the bootstrap draws.
    /// Two builds over the same sample and seed produce identical
    /// ensembles. Default is `0`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Draw the bootstrap samples and grow one tree per sample.
    /// Fails when `ensemble_size` is zero, and whenever any single
    /// tree fails to build; one failed tree aborts the whole ensemble.
    pub fn fit(&self, sample: &Sample) -> Result<BaggingClassifier> {
        if self.ensemble_size == 0 {
            return Err(ModelError::InvalidEnsembleSize);
        }

        let n_sample = sample.shape().0;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let draws = (0..self.ensemble_size)
            .map(|_| {
                (0..n_sample)
                    .map(|_| rng.gen_range(0..n_sample))
                    .collect::<Vec<usize>>()
            })
            .collect::<Vec<_>>();

        let learner = DecisionTree::init();
        let trees = draws.par_iter()
            .map(|indices| learner.fit(&sample.bootstrap(indices)))
            .collect::<Result<Vec<_>>>()?;

        let in_bag = draws.iter()
            .map(|indices| {
                let mut bits = FixedBitSet::with_capacity(n_sample);
                for &i in indices {
                    bits.insert(i);
                }
                bits
            })
            .collect::<Vec<_>>();

        Ok(BaggingClassifier::from_raw(trees, in_bag, self.seed))
    }
}
