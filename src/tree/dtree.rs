//! Defines the decision tree learner and the classifier it produces.
use serde::{Serialize, Deserialize};

use crate::classifier::Classifier;
use crate::error::Result;
use crate::sample::{Metadata, Row, Sample};
use super::criterion::{self, ClassCounter, best_label, class_counts};
use super::node::Node;


/// Recursion depth up to which the two sides of a split are grown as a
/// fork-join pair. Below the cutoff the build turns sequential, so one
/// tree forks at most `2^FORK_DEPTH` task pairs no matter how deep it
/// grows; rayon's worker pool bounds the threads actually running.
const FORK_DEPTH: usize = 6;


/// Grows a [`DecisionTreeClassifier`] on a sample by recursive
/// partitioning. At every node the feature/threshold pair minimizing
/// the weighted Gini impurity of the two sides is chosen; a node turns
/// into a leaf when it is pure or no feature yields a positive gain.
/// There is no depth limit and no pruning.
///
/// # Example
/// The following code shows a small example
/// for running [`DecisionTree`].
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
/// // Grow a tree and print its text dump.
/// let tree = DecisionTree::init()
///     .fit(&sample)
///     .unwrap();
/// println!("{}", tree.to_text(sample.meta()));
///
/// // Training accuracy.
/// println!("accuracy: {}", tree.accuracy(&sample));
/// ```
pub struct DecisionTree {
    parallel: bool,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// Parallel growth is enabled by default.
    #[inline]
    pub fn init() -> Self {
        Self { parallel: true }
    }


    /// Grow the two sides of every split as a fork-join pair (`true`,
    /// the default) or strictly sequentially (`false`).
    /// The resulting tree is identical either way; the flag only
    /// trades build time for thread usage.
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Grow a tree on `sample`.
    /// An empty sample yields a single degenerate leaf whose counter
    /// is empty; any schema error aborts the whole build.
    pub fn fit(&self, sample: &Sample) -> Result<DecisionTreeClassifier> {
        let rows = sample.rows().to_vec();
        let root = self.grow(rows, sample.meta(), 0)?;

        Ok(DecisionTreeClassifier::from(root))
    }


    /// Grow the sub-tree over `rows`.
    /// The row set is consumed: `partition` moves every row into one
    /// of the two children, so the parent holds nothing while the
    /// children grow.
    fn grow(&self, rows: Vec<Row>, meta: &Metadata, depth: usize)
        -> Result<Node>
    {
        let split = match criterion::find_best_split(&rows[..], meta)? {
            Some(split) => split,
            None => return Ok(Node::leaf(class_counts(&rows[..]))),
        };

        let (left_rows, right_rows) =
            criterion::partition(rows, &split.rule);

        // The two row sets are disjoint, so the recursions share
        // nothing mutable; joining them is the only synchronization.
        let (left, right) = if self.parallel && depth < FORK_DEPTH {
            rayon::join(
                || self.grow(left_rows, meta, depth + 1),
                || self.grow(right_rows, meta, depth + 1),
            )
        } else {
            (
                self.grow(left_rows, meta, depth + 1),
                self.grow(right_rows, meta, depth + 1),
            )
        };

        Ok(Node::branch(split.rule, left?, right?))
    }
}


/// Decision tree classifier.
/// This struct is just a wrapper of [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTreeClassifier {
    /// Route `row` to its leaf and return the class distribution
    /// stored there.
    #[inline]
    pub fn classify(&self, row: &[i64]) -> &ClassCounter {
        self.root.classify(row)
    }


    /// The root node of this tree.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Number of leaves of this tree.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// The longest root-to-leaf path of this tree, in edges.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Render the tree as an indented text dump.
    /// Branch lines show `<name> <op> <value>` followed by the two
    /// sub-trees under `--> True:` / `--> False:` headers; leaf lines
    /// show `Predict: {label: count, ...}`.
    pub fn to_text(&self, meta: &Metadata) -> String {
        let mut out = String::new();
        self.root.write_text(meta, "", &mut out);
        out
    }
}


impl Classifier for DecisionTreeClassifier {
    /// The label with the maximum count in the reached leaf;
    /// the smallest label code wins ties.
    #[inline]
    fn predict(&self, row: &[i64]) -> Option<i64> {
        best_label(self.classify(row))
    }
}
