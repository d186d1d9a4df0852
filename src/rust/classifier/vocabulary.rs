use std::collections::HashMap;

use super::class::Class;

/// Per-class occurrence counts of a single vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordStat {
    counts: [usize; Class::COUNT],
}

impl WordStat {
    pub fn count(&self, class: Class) -> usize {
        self.counts[class.index()]
    }

    /// Occurrences of the word across every class.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Word counts accumulated during training.
///
/// Alongside the per-word table it keeps the per-class sums that the
/// probability estimate needs, so they are not recomputed for every token:
/// - the total number of tokens seen under each class;
/// - the number of distinct words seen at least once under each class.
///
/// Words are never removed and counts only grow.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: HashMap<String, WordStat>,
    word_counts: [usize; Class::COUNT],
    distinct_counts: [usize; Class::COUNT],
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word` under `class`.
    pub fn add_word(&mut self, word: &str, class: Class) {
        let stat = self.words.entry(word.to_string()).or_default();
        let slot = &mut stat.counts[class.index()];
        if *slot == 0 {
            self.distinct_counts[class.index()] += 1;
        }
        *slot += 1;
        self.word_counts[class.index()] += 1;
    }

    pub fn get(&self, word: &str) -> Option<&WordStat> {
        self.words.get(word)
    }

    /// Occurrences of `word` under `class`; zero for unseen words.
    pub fn count(&self, word: &str, class: Class) -> usize {
        self.words.get(word).map_or(0, |stat| stat.count(class))
    }

    /// Occurrences of `word` under any class; zero for unseen words.
    pub fn total_count(&self, word: &str) -> usize {
        self.words.get(word).map_or(0, WordStat::total)
    }

    /// Number of tokens seen under `class`.
    pub fn total_word_count(&self, class: Class) -> usize {
        self.word_counts[class.index()]
    }

    /// Number of tokens seen under every class.
    pub fn grand_total_word_count(&self) -> usize {
        self.word_counts.iter().sum()
    }

    /// Distinct words seen under `class`.
    pub fn distinct_word_count(&self, class: Class) -> usize {
        self.distinct_counts[class.index()]
    }

    /// Sum over classes of the distinct words seen under each. A word seen
    /// under two classes counts twice.
    pub fn total_distinct_word_count(&self) -> usize {
        self.distinct_counts.iter().sum()
    }

    /// Number of unique words, regardless of class.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.words.iter().map(|(word, stat)| (word.as_str(), stat))
    }
}
