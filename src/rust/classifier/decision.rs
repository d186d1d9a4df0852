use super::class::{Class, ClassScores};

/// Picks the class with the highest score.
///
/// Classes are visited in declaration order and the running maximum starts
/// at `0.0` on [`Class::Service`]; it is replaced only by a strictly greater
/// score. Exact ties therefore go to the earliest class, and a table with no
/// positive score (all zero, all negative, or all NaN) resolves to
/// `Class::Service`.
pub fn decide(scores: &ClassScores) -> Class {
    let mut best = Class::ALL[0];
    let mut max = 0.0;
    for (class, score) in scores.iter() {
        if score > max {
            max = score;
            best = class;
        }
    }
    best
}
