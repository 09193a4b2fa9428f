//! Impurity calculations and the split search for decision trees.
use rayon::prelude::*;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::sample::{FeatureType, Metadata, Row};
use super::split_rule::{LR, Splitter};


/// Mapping from label code to occurrence count.
/// The sum of the counts equals the size of the row set it was
/// tallied from, and zero-count entries are removed.
/// A `BTreeMap` keeps every iteration, and with it every floating-point
/// accumulation and tie resolution, independent of hash state, so
/// identical inputs always grow identical trees.
pub type ClassCounter = BTreeMap<i64, usize>;


/// The best split found for a row set:
/// the impurity reduction it achieves and the rule realizing it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSplit {
    /// Impurity reduction relative to the unsplit row set.
    /// Always strictly positive.
    pub gain: f64,
    /// The rule realizing `gain`.
    pub rule: Splitter,
}


/// Tally the label of every row. Labels sit in the trailing slot.
#[inline]
pub fn class_counts(rows: &[Row]) -> ClassCounter {
    let mut counter = ClassCounter::new();
    for row in rows {
        let label = row[row.len() - 1];
        *counter.entry(label).or_insert(0) += 1;
    }
    counter
}


/// Returns the Gini impurity `1 - sum((c / n)^2)` of a counter
/// tallied over `n` rows.
/// An empty row set reads as pure: `gini(_, 0) == 0`.
#[inline]
pub fn gini(counter: &ClassCounter, n: usize) -> f64 {
    if n == 0 { return 0.0; }
    let n = n as f64;

    let correct = counter.values()
        .map(|&count| (count as f64 / n).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// The label with the maximum count;
/// the smallest label code wins ties.
/// Returns `None` iff the counter is empty.
#[inline]
pub fn best_label(counter: &ClassCounter) -> Option<i64> {
    let mut best: Option<(i64, usize)> = None;
    for (&label, &count) in counter {
        match best {
            Some((_, c)) if count <= c => {},
            _ => { best = Some((label, count)); },
        }
    }
    best.map(|(label, _)| label)
}


/// Split `rows` into the rows satisfying `rule` and the rest.
/// Stable: both sides keep the input order,
/// and every row lands on exactly one side.
#[inline]
pub fn partition(rows: Vec<Row>, rule: &Splitter) -> (Vec<Row>, Vec<Row>) {
    rows.into_iter()
        .partition(|row| rule.split(row) == LR::Left)
}


/// Find the feature/threshold pair maximizing the Gini gain over
/// `rows`.
///
/// Every feature column is scanned: numeric columns by one incremental
/// sweep over the indirectly sorted column, categorical columns per
/// distinct category. The search keeps a candidate only when it beats
/// the best gain seen so far strictly, so ties resolve to the lowest
/// column index; within a column, to the earliest candidate of its
/// scan (ascending category code, or the first changing position of
/// the sorted sweep).
///
/// Returns `Ok(None)` when no split improves on the unsplit impurity:
/// the row set is empty, pure, or constant on every feature.
/// This is the do-not-split signal for the tree builder.
pub fn find_best_split(rows: &[Row], meta: &Metadata)
    -> Result<Option<BestSplit>>
{
    let n = rows.len();
    if n == 0 { return Ok(None); }

    let parent = gini(&class_counts(rows), n);

    // Candidates are searched feature-wise in parallel, then reduced
    // sequentially in schema order to keep the tie-break fixed.
    let candidates = meta.attributes()
        .par_iter()
        .enumerate()
        .map(|(column, attribute)| {
            let best = match attribute.feature_type() {
                FeatureType::Numeric
                    => best_numeric_threshold(rows, column),
                FeatureType::Categorical
                    => best_category(rows, column),
            };
            (column, best)
        })
        .collect::<Vec<_>>();

    let mut best_gain = 0.0;
    let mut best_rule = None;
    for (column, candidate) in candidates {
        let Some((threshold, loss)) = candidate else { continue; };

        let gain = parent - loss;
        if gain > best_gain {
            best_gain = gain;
            best_rule = Some(Splitter::new(column, threshold, meta)?);
        }
    }

    Ok(best_rule.map(|rule| BestSplit { gain: best_gain, rule }))
}


/// Best `>=` threshold on a numeric column.
///
/// One pass over the indirectly sorted column moves rows from the `>=`
/// (left) side to the `<` (right) side, updating both counters by
/// decrement/increment. A threshold is considered only where the
/// sorted value changes, and the candidate is the larger of the two
/// values at the change point, so both sides are always populated.
fn best_numeric_threshold(rows: &[Row], column: usize)
    -> Option<(i64, f64)>
{
    let n = rows.len();
    let mut index = (0..n).collect::<Vec<usize>>();
    index.sort_by_key(|&i| rows[i][column]);

    // The `>=` side holds every row before the sweep starts.
    let mut left = class_counts(rows);
    let mut right = ClassCounter::new();
    let mut n_left = n;

    let mut best: Option<(i64, f64)> = None;
    for (position, &i) in index.iter().enumerate() {
        let label = rows[i][rows[i].len() - 1];

        n_left -= 1;
        if let Some(count) = left.get_mut(&label) {
            *count -= 1;
            if *count == 0 { left.remove(&label); }
        }
        *right.entry(label).or_insert(0) += 1;

        let next = match index.get(position + 1) {
            Some(&next) => next,
            None => break,
        };
        if rows[i][column] == rows[next][column] { continue; }

        let n_right = n - n_left;
        let loss = gini(&left, n_left) * (n_left as f64 / n as f64)
            + gini(&right, n_right) * (n_right as f64 / n as f64);

        match best {
            Some((_, smallest)) if loss >= smallest => {},
            _ => { best = Some((rows[next][column], loss)); },
        }
    }
    best
}


/// Best `==` category on a categorical column.
///
/// One pass builds the equals-side counter of every distinct category;
/// the not-equals side is the total minus it. Categories are scanned
/// in ascending code order.
fn best_category(rows: &[Row], column: usize) -> Option<(i64, f64)> {
    let n = rows.len();
    let total = class_counts(rows);

    let mut per_category: BTreeMap<i64, ClassCounter> = BTreeMap::new();
    for row in rows {
        let label = row[row.len() - 1];
        *per_category.entry(row[column])
            .or_default()
            .entry(label)
            .or_insert(0) += 1;
    }

    let mut best: Option<(i64, f64)> = None;
    for (&category, equal) in &per_category {
        let n_equal = equal.values().sum::<usize>();
        let n_rest = n - n_equal;

        let mut rest = total.clone();
        for (label, count) in equal {
            if let Some(c) = rest.get_mut(label) {
                *c -= count;
                if *c == 0 { rest.remove(label); }
            }
        }

        let loss = gini(equal, n_equal) * (n_equal as f64 / n as f64)
            + gini(&rest, n_rest) * (n_rest as f64 / n as f64);

        match best {
            Some((_, smallest)) if loss >= smallest => {},
            _ => { best = Some((category, loss)); },
        }
    }
    best
}
