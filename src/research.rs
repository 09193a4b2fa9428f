//! Console reporting for fitted models.
use colored::Colorize;

use crate::classifier::Classifier;
use crate::sample::Sample;


const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Print a train/test accuracy table for `model` to the console.
pub fn evaluation_report<C>(
    name: &str,
    model: &C,
    train: &Sample,
    test: &Sample,
)
    where C: Classifier,
{
    let train_acc = format!("{:.5}", model.accuracy(train));
    let test_acc = format!("{:.5}", model.accuracy(test));

    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "EVALUATION".bold(), "",
    );

    println!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        {:=^FULL_WIDTH$}\n",
        "Model".bold(),
        name.bold().green(),
        "Train Acc.".bold(),
        train_acc.as_str().bold().yellow(),
        "Test Acc.".bold(),
        test_acc.as_str().bold().yellow(),
        "".bold(),
    );
}
