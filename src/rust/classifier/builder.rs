use log::{info, warn};

use super::class::Class;
use super::classifier::Classifier;
use super::error::ClassifierError;
use super::tokenizer::Tokenizer;
use crate::ClassifierConfig;

/// A labeled training sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    sentence: String,
    class: Class,
}

impl TrainingExample {
    /// Creates a new training example
    ///
    /// # Example
    /// ```
    /// use review_bayes::{Class, TrainingExample};
    ///
    /// let example = TrainingExample::new("The waiter was rude", Class::Service);
    /// assert_eq!(example.class(), Class::Service);
    /// ```
    pub fn new(sentence: impl Into<String>, class: Class) -> Self {
        Self {
            sentence: sentence.into(),
            class,
        }
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn class(&self) -> Class {
        self.class
    }
}

impl<S: Into<String>> From<(S, Class)> for TrainingExample {
    fn from((sentence, class): (S, Class)) -> Self {
        Self::new(sentence, class)
    }
}

/// A builder for constructing a trained Classifier with a fluent interface.
#[derive(Debug, Default)]
pub struct ClassifierBuilder {
    config: ClassifierConfig,
    tokenizer: Option<Tokenizer>,
    examples: Vec<TrainingExample>,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    ///
    /// # Example
    /// ```
    /// use review_bayes::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scoring and validation configuration
    ///
    /// # Example
    /// ```
    /// use review_bayes::{ClassifierBuilder, ClassifierConfig};
    ///
    /// let config = ClassifierConfig {
    ///     require_every_class: true,
    ///     ..ClassifierConfig::default()
    /// };
    /// let builder = ClassifierBuilder::new().with_config(config);
    /// ```
    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default English tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Uses a tokenizer that filters exactly `stopwords`
    pub fn with_stopwords<I, S>(self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_tokenizer(Tokenizer::with_stopwords(stopwords))
    }

    /// Adds one labeled sentence
    pub fn add_example(mut self, sentence: impl Into<String>, class: Class) -> Self {
        self.examples.push(TrainingExample::new(sentence, class));
        self
    }

    /// Adds a batch of labeled sentences, keeping their order
    ///
    /// # Example
    /// ```
    /// use review_bayes::{Class, ClassifierBuilder};
    ///
    /// let builder = ClassifierBuilder::new().add_examples(vec![
    ///     ("Friendly staff", Class::Service),
    ///     ("Fair prices", Class::Price),
    /// ]);
    /// ```
    pub fn add_examples<I>(mut self, examples: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TrainingExample>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Trains and returns the final Classifier instance
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The trained Classifier if successful, or an error if:
    ///   - No examples have been added
    ///   - `require_every_class` is set and some class has no example
    ///
    /// # Example
    /// ```
    /// # fn main() -> Result<(), review_bayes::ClassifierError> {
    /// use review_bayes::{Class, ClassifierBuilder};
    ///
    /// let classifier = ClassifierBuilder::new()
    ///     .add_example("Slow service", Class::Service)
    ///     .add_example("Tasty food", Class::Product)
    ///     .build()?;
    /// assert_eq!(classifier.example_count(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.examples.is_empty() {
            return Err(ClassifierError::BuildError(
                "At least one training example must be added".to_string(),
            ));
        }

        for class in Class::ALL {
            if self.examples.iter().any(|e| e.class() == class) {
                continue;
            }
            if self.config.require_every_class {
                return Err(ClassifierError::MissingClass(class));
            }
            warn!("No training examples for class '{}'; it will never be predicted", class);
        }

        let mut classifier =
            Classifier::with_config(self.config).with_tokenizer(self.tokenizer.unwrap_or_default());
        classifier.train(self.examples);
        info!("Classifier built with {} vocabulary words", classifier.vocabulary().len());
        Ok(classifier)
    }
}
