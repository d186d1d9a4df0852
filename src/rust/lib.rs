//! A multinomial Naive Bayes classifier that assigns review sentences to one of
//! four topics: service, product, ambience or price.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use review_bayes::{Class, Classifier};
//!
//! let classifier = Classifier::builder()
//!     .add_example("Slow service", Class::Service)
//!     .add_example("Tasty food", Class::Product)
//!     .add_example("Nice decor", Class::Ambience)
//!     .add_example("Too expensive", Class::Price)
//!     .build()?;
//!
//! let (class, scores) = classifier.predict("The waiter was slow")?;
//! println!("Predicted class: {}", class);
//! assert_eq!(class, Class::Service);
//! assert!(scores[Class::Service] > scores[Class::Price]);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Training takes `&mut self`; classification only reads. A trained classifier
//! can be shared across threads using `Arc`:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use review_bayes::{Class, Classifier};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let classifier = Arc::new(Classifier::builder()
//!     .add_example("Friendly staff", Class::Service)
//!     .add_example("Fair prices", Class::Price)
//!     .build()?);
//!
//! let mut handles = vec![];
//! for _ in 0..3 {
//!     let classifier = Arc::clone(&classifier);
//!     handles.push(thread::spawn(move || {
//!         classifier.predict("staff was friendly").unwrap();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! # Ok(())
//! # }
//! ```

pub mod classifier;
mod config;
pub mod dataset;

pub use classifier::{
    decide, Class, ClassScores, Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo,
    Tokenizer, TrainingExample, UnknownClass, Vocabulary, WordStat,
};
pub use config::ClassifierConfig;
pub use dataset::{Dataset, DatasetError};

pub fn init_logger() {
    env_logger::init();
}
