use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::decision::decide;

/// The topics a review sentence can be about.
///
/// Declaration order matters: it is the iteration order of every per-class
/// table and the tie-break order used by [`decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Class {
    /// Staff, waiting times, friendliness
    Service,
    /// Food, drinks and the dishes themselves
    Product,
    /// Decor, noise, atmosphere
    Ambience,
    /// Value for money
    Price,
}

impl Class {
    /// Number of classes.
    pub const COUNT: usize = 4;

    /// Every class, in declaration order.
    pub const ALL: [Class; Class::COUNT] =
        [Class::Service, Class::Product, Class::Ambience, Class::Price];

    /// Position of the class in [`Class::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Class> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Class::Service => "service",
            Class::Product => "product",
            Class::Ambience => "ambience",
            Class::Price => "price",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Error returned when a string names no known class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown class label: {0:?}")]
pub struct UnknownClass(pub String);

impl FromStr for Class {
    type Err = UnknownClass;

    /// Accepts a label name (any case) or the numeric code used by
    /// tab-separated datasets: `0` service, `1` product, `2` ambience, `3` price.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<usize>() {
            return Class::from_index(code).ok_or_else(|| UnknownClass(s.to_string()));
        }
        Class::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// One score per class, as produced by [`Classifier::classify`].
///
/// Scores are only meaningful relative to each other; they are not
/// guaranteed to sum to one.
///
/// [`Classifier::classify`]: crate::Classifier::classify
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassScores([f64; Class::COUNT]);

impl ClassScores {
    pub fn new(scores: [f64; Class::COUNT]) -> Self {
        Self(scores)
    }

    /// Builds the table by evaluating `score` once per class, in declaration order.
    pub fn from_fn(mut score: impl FnMut(Class) -> f64) -> Self {
        let mut scores = [0.0; Class::COUNT];
        for class in Class::ALL {
            scores[class.index()] = score(class);
        }
        Self(scores)
    }

    pub fn get(&self, class: Class) -> f64 {
        self.0[class.index()]
    }

    /// Iterates `(class, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Class, f64)> + '_ {
        Class::ALL.into_iter().map(move |class| (class, self.get(class)))
    }

    /// The winning class, see [`decide`].
    pub fn decide(&self) -> Class {
        decide(self)
    }

    /// Classes sorted by descending score. Ties keep declaration order.
    pub fn ranking(&self) -> Vec<Class> {
        let mut classes = Class::ALL.to_vec();
        classes.sort_by(|a, b| {
            self.get(*b)
                .partial_cmp(&self.get(*a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        classes
    }

    /// Position of `class` in [`ranking`](Self::ranking), 0 being the best.
    pub fn rank_of(&self, class: Class) -> usize {
        self.ranking()
            .iter()
            .position(|c| *c == class)
            .unwrap_or(Class::COUNT)
    }

    pub fn to_map(&self) -> BTreeMap<Class, f64> {
        self.iter().collect()
    }
}

impl Index<Class> for ClassScores {
    type Output = f64;

    fn index(&self, class: Class) -> &f64 {
        &self.0[class.index()]
    }
}

impl Serialize for ClassScores {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
