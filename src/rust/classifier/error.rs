use super::class::Class;

/// Represents the different types of errors that can occur in the text classifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    /// No training example has been seen, so class priors are undefined
    #[error("Classifier has no training data")]
    NoTrainingData,
    /// The sentence has tokens but training produced no vocabulary to smooth against
    #[error("Vocabulary is empty: no training sentence produced a token")]
    EmptyVocabulary,
    /// A class has no examples while every class is required
    #[error("No training examples for class '{0}'")]
    MissingClass(Class),
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
}
