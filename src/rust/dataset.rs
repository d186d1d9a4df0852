use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use crate::{Class, TrainingExample};

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Labeled sentences read from a tab-separated file.
///
/// Each line holds `sentence<TAB>label`, the label being a class name or its
/// numeric code (`0` service, `1` product, `2` ambience, `3` price). Malformed
/// lines are skipped and counted unless the dataset is read in strict mode.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    examples: Vec<TrainingExample>,
    skipped: usize,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P, strict: bool) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        info!("Loading dataset from {:?}", path);
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), strict)
    }

    pub fn from_reader<R: BufRead>(reader: R, strict: bool) -> Result<Self, DatasetError> {
        let mut dataset = Dataset::default();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;
            match Self::parse_line(&line) {
                Ok(example) => dataset.examples.push(example),
                Err(message) if strict => {
                    return Err(DatasetError::Parse {
                        line: line_number,
                        message,
                    })
                }
                Err(message) => {
                    warn!("Skipping dataset line {}: {}", line_number, message);
                    dataset.skipped += 1;
                }
            }
        }
        info!(
            "Loaded {} examples ({} lines skipped)",
            dataset.examples.len(),
            dataset.skipped
        );
        Ok(dataset)
    }

    fn parse_line(line: &str) -> Result<TrainingExample, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(format!("expected 2 tab-separated fields, found {}", fields.len()));
        }
        let class: Class = fields[1].parse().map_err(|e| format!("{}", e))?;
        Ok(TrainingExample::new(fields[0], class))
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.examples
    }

    /// Number of lines ignored because they could not be parsed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}
