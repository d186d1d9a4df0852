use std::collections::BTreeMap;

mod error;
mod class;
mod classifier;
mod decision;
mod tokenizer;
mod vocabulary;
pub mod builder;

pub use error::ClassifierError;
pub use class::{Class, ClassScores, UnknownClass};
pub use classifier::Classifier;
pub use decision::decide;
pub use tokenizer::{Tokenizer, DEFAULT_STOPWORDS, ENGLISH_STOPWORDS};
pub use vocabulary::{Vocabulary, WordStat};
pub use builder::{ClassifierBuilder, TrainingExample};

/// Information about the current state of a classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Number of classes the classifier scores
    pub num_classes: usize,
    /// Labels of the classes, in declaration order
    pub class_labels: Vec<String>,
    /// Training examples seen per class
    pub examples_per_class: BTreeMap<Class, usize>,
    /// Number of unique words in the vocabulary
    pub vocabulary_size: usize,
    /// Training tokens counted over all classes
    pub total_word_count: usize,
    /// Sum over classes of the distinct words seen in each
    pub total_distinct_word_count: usize,
}
