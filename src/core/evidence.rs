//! Supporting facts behind category scores.
//!
//! Extractors attach evidence to every score so the narrative generator can
//! justify what it says without re-deriving anything from the profile.
//! Evidence never reaches the presentation layer directly.

/// Direction a fact argues in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// One fact supporting (or undermining) a category score.
///
/// `weight` orders facts of the same polarity: bigger is more salient. The
/// "best fact" selection is a total order over (weight, fact text) so that
/// narrative output is deterministic for identical input.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub fact: String,
    pub polarity: Polarity,
    pub weight: f64,
}

impl Evidence {
    pub fn positive(fact: impl Into<String>, weight: f64) -> Self {
        Self {
            fact: fact.into(),
            polarity: Polarity::Positive,
            weight,
        }
    }

    pub fn negative(fact: impl Into<String>, weight: f64) -> Self {
        Self {
            fact: fact.into(),
            polarity: Polarity::Negative,
            weight,
        }
    }

    pub fn neutral(fact: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            polarity: Polarity::Neutral,
            weight: 0.0,
        }
    }
}

/// The single most salient fact of the given polarity, if any.
///
/// Ties on weight resolve to the lexicographically smallest fact text.
pub fn best_fact(evidence: &[Evidence], polarity: Polarity) -> Option<&Evidence> {
    evidence
        .iter()
        .filter(|e| e.polarity == polarity)
        .max_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.fact.cmp(&a.fact))
        })
}

/// One extractor's output: a bounded score plus its supporting facts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    /// Category score in [0, 100].
    pub score: u32,
    pub evidence: Vec<Evidence>,
}

impl Signal {
    pub fn new(score: u32, evidence: Vec<Evidence>) -> Self {
        Self { score, evidence }
    }

    /// Floor signal for categories with nothing to measure. Sparse data is
    /// never an error; it scores zero with a note saying why.
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        Self {
            score: 0,
            evidence: vec![Evidence::neutral(reason)],
        }
    }
}
