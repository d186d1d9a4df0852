use log::{debug, info};

use super::builder::{ClassifierBuilder, TrainingExample};
use super::class::{Class, ClassScores};
use super::error::ClassifierError;
use super::tokenizer::Tokenizer;
use super::vocabulary::Vocabulary;
use crate::ClassifierConfig;

/// A multinomial Naive Bayes classifier over the four review topics.
///
/// The classifier starts empty, accumulates word counts through
/// [`train`](Self::train), and is then queried through
/// [`classify`](Self::classify) or [`predict`](Self::predict). Training needs
/// `&mut self` and querying only `&self`, so a trained classifier can be
/// shared between threads behind an `Arc`.
///
/// ```rust
/// use review_bayes::{Class, Classifier, TrainingExample};
///
/// let mut classifier = Classifier::new();
/// classifier.train(vec![
///     TrainingExample::new("Slow service", Class::Service),
///     TrainingExample::new("Tasty food", Class::Product),
///     TrainingExample::new("Nice decor", Class::Ambience),
///     TrainingExample::new("Too expensive", Class::Price),
/// ]);
///
/// let (class, _scores) = classifier.predict("The waiter was slow")?;
/// assert_eq!(class, Class::Service);
/// # Ok::<(), review_bayes::ClassifierError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
    tokenizer: Tokenizer,
    examples: [Vec<TrainingExample>; Class::COUNT],
    vocabulary: Vocabulary,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates an untrained classifier with the default tokenizer and configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> ClassifierBuilder {
        ClassifierBuilder::new()
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Training examples of `class`, in the order they were trained.
    pub fn examples(&self, class: Class) -> &[TrainingExample] {
        &self.examples[class.index()]
    }

    /// Number of training examples over all classes.
    pub fn example_count(&self) -> usize {
        self.examples.iter().map(Vec::len).sum()
    }

    /// Adds labeled examples to the model.
    ///
    /// Counts accumulate across calls. Any sentence is accepted; one that
    /// tokenizes to nothing still counts towards its class prior.
    pub fn train<I>(&mut self, examples: I)
    where
        I: IntoIterator,
        I::Item: Into<TrainingExample>,
    {
        let before = self.example_count();
        for example in examples {
            self.train_one(example.into());
        }
        info!(
            "Trained on {} new examples ({} total); vocabulary has {} words",
            self.example_count() - before,
            self.example_count(),
            self.vocabulary.len()
        );
    }

    pub fn train_one(&mut self, example: TrainingExample) {
        let class = example.class();
        for token in self.tokenizer.tokenize(example.sentence()) {
            self.vocabulary.add_word(&token, class);
        }
        self.examples[class.index()].push(example);
    }

    /// Scores `sentence` against every class.
    ///
    /// Scores are for ranking only. Fails with
    /// [`ClassifierError::NoTrainingData`] before any training, and with
    /// [`ClassifierError::EmptyVocabulary`] when the sentence has tokens but
    /// no training sentence ever produced one. A sentence without tokens
    /// scores as the bare class priors. Long sentences may drive a score to
    /// `0.0` or `+inf`; both still rank correctly.
    pub fn classify(&self, sentence: &str) -> Result<ClassScores, ClassifierError> {
        let total_examples = self.example_count();
        if total_examples == 0 {
            return Err(ClassifierError::NoTrainingData);
        }

        let tokens = self.tokenizer.tokenize(sentence);
        if !tokens.is_empty() && self.vocabulary.is_empty() {
            return Err(ClassifierError::EmptyVocabulary);
        }

        let scores = ClassScores::from_fn(|class| self.score(&tokens, class, total_examples));

        debug!("Scores for {:?} (tokens {:?}): {:?}", sentence, tokens, scores);
        Ok(scores)
    }

    /// Classifies `sentence` and returns the winning class with all scores.
    pub fn predict(&self, sentence: &str) -> Result<(Class, ClassScores), ClassifierError> {
        let scores = self.classify(sentence)?;
        Ok((scores.decide(), scores))
    }

    /// Runs [`predict`](Self::predict) on each sentence, keeping input order.
    pub fn predict_all<I, S>(
        &self,
        sentences: I,
    ) -> Result<Vec<(Class, ClassScores)>, ClassifierError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        sentences
            .into_iter()
            .map(|sentence| self.predict(sentence.as_ref()))
            .collect()
    }

    /// Returns information about the classifier's current state
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_classes: Class::COUNT,
            class_labels: Class::ALL.iter().map(|c| c.label().to_string()).collect(),
            examples_per_class: Class::ALL
                .iter()
                .map(|&c| (c, self.examples(c).len()))
                .collect(),
            vocabulary_size: self.vocabulary.len(),
            total_word_count: self.vocabulary.grand_total_word_count(),
            total_distinct_word_count: self.vocabulary.total_distinct_word_count(),
        }
    }

    /// Prior times the per-token likelihoods, then divided once per token by
    /// the class-independent evidence term when that is enabled. Dropping the
    /// second loop leaves the ranking unchanged.
    fn score(&self, tokens: &[String], class: Class, total_examples: usize) -> f64 {
        let mut score = self.prior(class, total_examples);
        for token in tokens {
            score *= self.likelihood(token, class);
        }
        if self.config.evidence_normalization {
            for token in tokens {
                score /= self.evidence(token);
            }
        }
        score
    }

    fn prior(&self, class: Class, total_examples: usize) -> f64 {
        self.examples(class).len() as f64 / total_examples as f64
    }

    /// Add-one smoothed `P(word | class)`.
    fn likelihood(&self, word: &str, class: Class) -> f64 {
        let count = self.vocabulary.count(word, class);
        let denominator =
            self.vocabulary.total_word_count(class) + self.vocabulary.total_distinct_word_count();
        (count + 1) as f64 / denominator as f64
    }

    /// Add-one smoothed frequency of `word` over the whole corpus.
    fn evidence(&self, word: &str) -> f64 {
        let count = self.vocabulary.total_count(word);
        let denominator = self.vocabulary.grand_total_word_count()
            + self.vocabulary.total_distinct_word_count();
        (count + 1) as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn small_corpus() -> Vec<TrainingExample> {
        vec![
            TrainingExample::new("Slow service", Class::Service),
            TrainingExample::new("Tasty food", Class::Product),
            TrainingExample::new("Nice decor", Class::Ambience),
            TrainingExample::new("Too expensive", Class::Price),
        ]
    }

    fn trained(config: ClassifierConfig) -> Classifier {
        let mut classifier = Classifier::with_config(config);
        classifier.train(small_corpus());
        classifier
    }

    #[test]
    fn test_new_classifier_has_every_class_bucket() {
        let classifier = Classifier::new();
        for class in Class::ALL {
            assert!(classifier.examples(class).is_empty());
        }
        assert!(classifier.vocabulary().is_empty());
    }

    #[test]
    fn test_train_counts_tokens_per_class() {
        let classifier = trained(ClassifierConfig::default());
        let vocab = classifier.vocabulary();

        assert_eq!(vocab.count("slow", Class::Service), 1);
        assert_eq!(vocab.count("slow", Class::Price), 0);
        // "too" is a stopword.
        assert!(vocab.get("too").is_none());
        assert_eq!(vocab.total_word_count(Class::Price), 1);
        assert_eq!(vocab.total_distinct_word_count(), 7);
        assert_eq!(classifier.examples(Class::Product)[0].sentence(), "Tasty food");
    }

    #[test]
    fn test_unnormalized_scores_match_hand_computation() {
        let classifier = trained(ClassifierConfig {
            evidence_normalization: false,
            ..ClassifierConfig::default()
        });
        let scores = classifier.classify("The waiter was slow").unwrap();

        // tokens: waiter, slow; distinct total 7; service/product/ambience hold 2 words, price 1
        assert!((scores[Class::Service] - 0.25 * (1.0 / 9.0) * (2.0 / 9.0)).abs() < EPSILON);
        assert!((scores[Class::Product] - 0.25 * (1.0 / 9.0) * (1.0 / 9.0)).abs() < EPSILON);
        assert!((scores[Class::Ambience] - 0.25 * (1.0 / 9.0) * (1.0 / 9.0)).abs() < EPSILON);
        assert!((scores[Class::Price] - 0.25 * (1.0 / 8.0) * (1.0 / 8.0)).abs() < EPSILON);
    }

    #[test]
    fn test_evidence_normalization_rescales_uniformly() {
        let plain = trained(ClassifierConfig {
            evidence_normalization: false,
            ..ClassifierConfig::default()
        });
        let normalized = trained(ClassifierConfig::default());

        let a = plain.classify("The waiter was slow").unwrap();
        let b = normalized.classify("The waiter was slow").unwrap();

        // grand total 7 tokens + 7 distinct = 14; waiter unseen, slow seen once
        let evidence = (1.0 / 14.0) * (2.0 / 14.0);
        for class in Class::ALL {
            assert!((b[class] - a[class] / evidence).abs() < 1e-9);
        }
        assert_eq!(a.ranking(), b.ranking());
    }

    #[test]
    fn test_empty_tokenization_returns_priors() {
        let mut classifier = trained(ClassifierConfig::default());
        classifier.train_one(TrainingExample::new("Cheap", Class::Price));

        let scores = classifier.classify("!!! the ...").unwrap();
        assert!((scores[Class::Service] - 0.2).abs() < EPSILON);
        assert!((scores[Class::Price] - 0.4).abs() < EPSILON);
        assert_eq!(scores.decide(), Class::Price);
    }

    #[test]
    fn test_classify_before_training_fails() {
        let classifier = Classifier::new();
        assert_eq!(classifier.classify("anything"), Err(ClassifierError::NoTrainingData));
        assert_eq!(classifier.predict(""), Err(ClassifierError::NoTrainingData));
    }

    #[test]
    fn test_tokenless_training_data() {
        let mut classifier = Classifier::new();
        classifier.train(vec![("!!!", Class::Service), ("the", Class::Price)]);

        assert_eq!(classifier.classify("slow"), Err(ClassifierError::EmptyVocabulary));
        let (class, scores) = classifier.predict("...").unwrap();
        assert_eq!(class, Class::Service);
        assert!((scores[Class::Price] - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_long_sentence_over_skewed_corpus_still_scores() {
        let mut classifier = Classifier::new();
        classifier.train(vec![
            TrainingExample::new("slow ".repeat(1_000), Class::Service),
            TrainingExample::new("food ".repeat(100_000), Class::Product),
            TrainingExample::new("Nice decor", Class::Ambience),
            TrainingExample::new("Too expensive", Class::Price),
        ]);

        // Each "slow" multiplies the service score by roughly 100 once the
        // evidence term is divided out, so 200 of them overflow to +inf.
        let sentence = "slow ".repeat(200);
        let (class, scores) = classifier.predict(&sentence).unwrap();
        assert_eq!(class, Class::Service);
        assert_eq!(scores[Class::Service], f64::INFINITY);
        assert_eq!(scores[Class::Product], 0.0);
        assert!(scores[Class::Ambience].is_finite() && scores[Class::Ambience] > 0.0);
        assert!(scores.iter().all(|(_, score)| !score.is_nan()));

        let (short_class, short_scores) = classifier.predict(&"slow ".repeat(50)).unwrap();
        assert_eq!(short_class, Class::Service);
        assert!(short_scores[Class::Service].is_finite());
    }

    #[test]
    fn test_info_reports_state() {
        let classifier = trained(ClassifierConfig::default());
        let info = classifier.info();
        assert_eq!(info.num_classes, 4);
        assert_eq!(info.class_labels, vec!["service", "product", "ambience", "price"]);
        assert_eq!(info.examples_per_class[&Class::Ambience], 1);
        assert_eq!(info.vocabulary_size, 7);
        assert_eq!(info.total_word_count, 7);
        assert_eq!(info.total_distinct_word_count, 7);
    }
}
