//! The core library for the `Classifier` trait.
use crate::sample::Sample;


/// A trait that defines the behavior of fitted classifiers.
/// You only need to implement the `predict` method.
pub trait Classifier {
    /// Predicts the label code of the given encoded row.
    /// The row may carry its label in the trailing slot;
    /// only feature columns are read.
    /// Returns `None` when the model cannot commit to a label,
    /// which only happens for a model fitted on zero rows.
    fn predict(&self, row: &[i64]) -> Option<i64>;


    /// Predicts the label codes of every row of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<Option<i64>> {
        sample.rows()
            .iter()
            .map(|row| self.predict(row))
            .collect::<Vec<_>>()
    }


    /// The fraction of rows of `sample` whose prediction equals the
    /// stored label, in `[0, 1]`. An abstaining prediction counts as a
    /// miss. An empty sample reads as perfectly classified.
    fn accuracy(&self, sample: &Sample) -> f64 {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return 1.0; }

        let correct = (0..n_sample)
            .filter(|&i| {
                self.predict(&sample.rows()[i]) == Some(sample.label_of(i))
            })
            .count();

        correct as f64 / n_sample as f64
    }
}
