use std::fmt;

use crate::evaluator::{HandCategory, HandEvaluator};

/// C(52, 7): every 7-card hand from a 52-card deck.
pub const TOTAL_SEVEN_CARD_HANDS: usize = 133_784_560;

pub const NUM_CATEGORIES: usize = 10;

/// Closed-form frequency of each category over all 7-card hands, indexed by
/// [`HandCategory`] discriminant.
///
/// See: https://en.wikipedia.org/wiki/Poker_probability#Frequency_of_7-card_poker_hands
pub const REFERENCE_COUNTS: [usize; NUM_CATEGORIES] = [
    0,          // Invalid
    23_294_460, // No Pair
    58_627_800, // One Pair
    31_433_400, // Two Pair
    6_461_620,  // Three of a Kind
    6_180_020,  // Straight
    4_047_644,  // Flush
    3_473_184,  // Full House
    224_848,    // Four of a Kind
    41_584,     // Straight Flush
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    /// The enumeration visited the wrong number of hands.
    TotalMismatch { expected: usize, observed: usize },
    /// One category's count disagrees with the reference distribution.
    CategoryMismatch {
        category: HandCategory,
        expected: usize,
        observed: usize,
    },
    /// The classifier produced category indices outside [0, NUM_CATEGORIES).
    UnclassifiedRankings { count: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::TotalMismatch { expected, observed } => {
                write!(f, "enumerated {observed} hands, expected {expected}")
            }
            VerifyError::CategoryMismatch {
                category,
                expected,
                observed,
            } => write!(
                f,
                "{category:?}: counted {observed} hands, expected {expected}"
            ),
            VerifyError::UnclassifiedRankings { count } => {
                write!(f, "{count} rankings fell outside every category")
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// Per-category occurrence counts accumulated over one enumeration pass.
///
/// Classifier output outside the category range is tracked separately so a
/// broken classifier fails verification instead of corrupting a bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; NUM_CATEGORIES],
    unclassified: usize,
}

impl CategoryCounts {
    pub fn record(&mut self, category: usize) {
        match self.counts.get_mut(category) {
            Some(count) => *count += 1,
            None => self.unclassified += 1,
        }
    }

    pub fn count(&self, category: HandCategory) -> usize {
        self.counts[usize::from(category)]
    }

    /// Total hands recorded, including unclassifiable ones.
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unclassified
    }

    /// Compare against the closed-form 7-card distribution.
    ///
    /// Returns the first discrepancy found; any mismatch means either the
    /// evaluator or the enumeration/classification step is broken.
    pub fn check_against_reference(&self) -> Result<(), VerifyError> {
        if self.unclassified > 0 {
            return Err(VerifyError::UnclassifiedRankings {
                count: self.unclassified,
            });
        }
        let total = self.total();
        if total != TOTAL_SEVEN_CARD_HANDS {
            return Err(VerifyError::TotalMismatch {
                expected: TOTAL_SEVEN_CARD_HANDS,
                observed: total,
            });
        }
        for category in HandCategory::ALL {
            let expected = REFERENCE_COUNTS[usize::from(category)];
            let observed = self.count(category);
            if observed != expected {
                return Err(VerifyError::CategoryMismatch {
                    category,
                    expected,
                    observed,
                });
            }
        }
        Ok(())
    }
}

/// Visit every 7-combination of the 52-card deck exactly once, as ascending
/// index tuples.
pub fn enumerate_seven_card_hands(mut f: impl FnMut(&[usize; 7])) {
    for c0 in 0..46 {
        for c1 in (c0 + 1)..47 {
            for c2 in (c1 + 1)..48 {
                for c3 in (c2 + 1)..49 {
                    for c4 in (c3 + 1)..50 {
                        for c5 in (c4 + 1)..51 {
                            for c6 in (c5 + 1)..52 {
                                f(&[c0, c1, c2, c3, c4, c5, c6]);
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Run the exhaustive correctness oracle: evaluate every 7-card hand,
/// classify each ranking and compare the per-category counts against
/// [`REFERENCE_COUNTS`].
///
/// `convert` remaps card indices into the evaluator's numbering convention
/// before each call; `classify` maps a ranking value onto a category index.
/// This makes hundreds of millions of evaluator calls and is deliberately a
/// separate pass from benchmarking.
pub fn verify_evaluator<E: HandEvaluator>(
    evaluator: &E,
    convert: impl Fn(usize) -> usize,
    classify: impl Fn(usize) -> usize,
) -> Result<CategoryCounts, VerifyError> {
    let mut counts = CategoryCounts::default();
    enumerate_seven_card_hands(|cards| {
        let ranking = evaluator.evaluate_seven(cards.map(&convert));
        counts.record(classify(ranking));
    });
    counts.check_against_reference()?;
    Ok(counts)
}
