use env_logger::{Builder, Env};
use review_bayes::{Class, Classifier, ClassifierConfig, ClassifierError, Dataset, DatasetError};
use std::fs;
use std::path::PathBuf;

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}

const TRIP_DATASET: &str = "The waiter ignored us for twenty minutes\t0\n\
                            Staff were friendly and attentive\t0\n\
                            The steak was perfectly cooked\t1\n\
                            Delicious desserts and fresh bread\t1\n\
                            Lovely terrace with a view of the river\t2\n\
                            Too noisy and the music was loud\t2\n\
                            Way overpriced for the portion size\t3\n\
                            Reasonable prices and good value\t3\n";

fn write_dataset(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("review-bayes-tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_train_from_dataset_file() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let path = write_dataset("trip.tsv", TRIP_DATASET);
    let dataset = Dataset::from_path(&path, true)?;
    assert_eq!(dataset.len(), 8);

    let classifier = Classifier::builder()
        .with_config(ClassifierConfig {
            require_every_class: true,
            ..ClassifierConfig::default()
        })
        .add_examples(dataset.into_examples())
        .build()?;

    let cases = [
        ("A very friendly waiter", Class::Service),
        ("The bread was delicious", Class::Product),
        ("Nice view from the terrace", Class::Ambience),
        ("Overpriced, poor value", Class::Price),
    ];
    for (sentence, expected) in cases {
        let (class, _) = classifier.predict(sentence)?;
        assert_eq!(class, expected, "sentence {:?}", sentence);
    }
    Ok(())
}

#[test]
fn test_lenient_dataset_skips_malformed_lines() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let path = write_dataset(
        "malformed.tsv",
        "good food\t1\nmissing label\nextra\tfields\t2\nbad label\tcadre\n",
    );
    let dataset = Dataset::from_path(&path, false)?;
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.skipped(), 3);

    let strict = Dataset::from_path(&path, true);
    assert!(matches!(strict, Err(DatasetError::Parse { line: 2, .. })));
    Ok(())
}

#[test]
fn test_dataset_missing_a_class() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let path = write_dataset("two-classes.tsv", "good food\t1\nrude staff\t0\n");
    let dataset = Dataset::from_path(&path, true)?;

    let result = Classifier::builder()
        .with_config(ClassifierConfig {
            require_every_class: true,
            ..ClassifierConfig::default()
        })
        .add_examples(dataset.examples().to_vec())
        .build();
    assert!(matches!(result, Err(ClassifierError::MissingClass(Class::Ambience))));

    let classifier = Classifier::builder().add_examples(dataset.into_examples()).build()?;
    let scores = classifier.classify("good music")?;
    assert_eq!(scores[Class::Ambience], 0.0);
    assert_eq!(scores[Class::Price], 0.0);
    Ok(())
}
