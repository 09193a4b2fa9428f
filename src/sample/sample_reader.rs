//! Defines a struct that reads a data file into a [`Sample`].
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ModelError, Result};
use super::attribute::Attribute;
use super::sample_struct::{Metadata, Row, Sample};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a comma-separated file to [`Sample`],
/// encoding every column to integers on the way in:
/// a column whose every value parses as an integer becomes a numeric
/// feature; any other column becomes a categorical feature whose codes
/// are assigned by first appearance. The target column is encoded the
/// same way and moved to the label slot of each row.
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minibag::SampleReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false`. Without a header, columns are named
    /// `Feat. [1]`, `Feat. [2]`, and so on.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Reads the file based on the arguments,
    /// and returns the encoded [`Sample`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Sample> {
        if self.file.is_none() {
            panic!("The file name is not set");
        }
        if self.target.is_none() {
            panic!(
                "Target (class) column is not specified. \
                 Use `SampleReader::target_feature`."
            );
        }
        let file = self.file.unwrap();
        let target = self.target.unwrap();

        let (names, columns) = read_cells(file.as_ref(), self.has_header)?;

        encode(names, columns, target.as_ref())
    }
}


/// Read the raw cells of a comma-separated file, column-major.
fn read_cells(file: &Path, has_header: bool)
    -> Result<(Vec<String>, Vec<Vec<String>>)>
{
    let file = File::open(file)?;
    let lines = BufReader::new(file).lines();

    let mut names = Vec::new();
    let mut columns: Vec<Vec<String>> = Vec::new();
    let mut n_sample = 0_usize;

    // For each line of the file
    for line in lines {
        let line = line?;
        if line.trim().is_empty() { continue; }

        let cells = line.split(',')
            .map(|cell| cell.trim().to_string())
            .collect::<Vec<_>>();

        // The first line is either the header or an unnamed row;
        // both fix the number of columns.
        if names.is_empty() {
            let n_column = cells.len();
            if has_header {
                names = cells;
                columns = vec![Vec::new(); n_column];
                continue;
            }
            names = (1..=n_column)
                .map(|i| format!("Feat. [{i}]"))
                .collect();
            columns = vec![Vec::new(); n_column];
        }

        if cells.len() != names.len() {
            return Err(ModelError::RowLengthMismatch {
                row: n_sample,
                expected: names.len(),
                got: cells.len(),
            });
        }

        for (column, cell) in columns.iter_mut().zip(cells) {
            column.push(cell);
        }
        n_sample += 1;
    }

    Ok((names, columns))
}


/// Encode the raw columns and assemble the rows,
/// moving the target column to the label slot.
fn encode(names: Vec<String>, columns: Vec<Vec<String>>, target: &str)
    -> Result<Sample>
{
    let target_column = names.iter()
        .position(|name| name == target)
        .expect("The target class does not exist");

    let n_sample = columns.first().map_or(0, |column| column.len());

    let mut attributes = Vec::new();
    let mut encoded: Vec<Vec<i64>> = Vec::new();
    for (column, cells) in columns.iter().enumerate() {
        if column == target_column { continue; }
        let name = &names[column];

        let numeric = cells.iter()
            .map(|cell| cell.parse::<i64>().ok())
            .collect::<Option<Vec<_>>>();

        match numeric {
            Some(values) => {
                attributes.push(Attribute::numeric(name));
                encoded.push(values);
            },
            None => {
                let mut attribute = Attribute::categorical(name);
                let values = cells.iter()
                    .map(|cell| attribute.intern(cell))
                    .collect();
                attributes.push(attribute);
                encoded.push(values);
            },
        }
    }

    let mut meta = Metadata::new(attributes);
    let labels = columns[target_column].iter()
        .map(|cell| meta.intern_label(cell))
        .collect::<Vec<_>>();

    let rows = (0..n_sample)
        .map(|i| {
            let mut row = encoded.iter()
                .map(|column| column[i])
                .collect::<Row>();
            row.push(labels[i]);
            row
        })
        .collect::<Vec<_>>();

    Sample::new(meta, rows)
}
