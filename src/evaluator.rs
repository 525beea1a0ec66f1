use std::fs;
use std::io;
use std::path::Path;

/// A card-hand ranking capability.
///
/// Implementations map a fixed-arity tuple of card identifiers to an integer
/// ranking where higher means stronger. The encoding of the ranking is
/// evaluator-defined; callers that need a coarse hand category supply their
/// own classification of the ranking value.
pub trait HandEvaluator {
    fn evaluate_five(&self, cards: [usize; 5]) -> usize;
    fn evaluate_six(&self, cards: [usize; 6]) -> usize;
    fn evaluate_seven(&self, cards: [usize; 7]) -> usize;
}

/// Number of 32-bit entries in a Two Plus Two ranking table.
pub const LUT_ENTRIES: usize = 32_487_834;

/// Shifts a 0-based card index into the 1-based numbering the Two Plus Two
/// table expects.
pub fn to_one_based(card: usize) -> usize {
    card + 1
}

/// Extracts the coarse hand category from a Two Plus Two ranking value.
///
/// Categories run from 0 (invalid) through 9 (straight flush); see
/// [`HandCategory`].
pub fn hand_type(ranking: usize) -> usize {
    ranking >> 12
}

/// Coarse hand classification buckets, in ascending order of strength.
///
/// The discriminants match the category field of a Two Plus Two ranking
/// (the bits above the 12-bit within-category rank). Keep them in sync with
/// the `TryFrom<usize>` implementation below.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandCategory {
    /// Never produced for a well-formed hand.
    Invalid = 0,
    NoPair = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::Invalid,
        HandCategory::NoPair,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];
}

impl From<HandCategory> for usize {
    fn from(value: HandCategory) -> Self {
        value as usize
    }
}

impl TryFrom<usize> for HandCategory {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        use HandCategory::*;
        Ok(match value {
            0 => Invalid,
            1 => NoPair,
            2 => OnePair,
            3 => TwoPair,
            4 => ThreeOfAKind,
            5 => Straight,
            6 => Flush,
            7 => FullHouse,
            8 => FourOfAKind,
            9 => StraightFlush,
            _ => return Err(()),
        })
    }
}

/// A Two Plus Two table-driven evaluator.
///
/// The backing table is a flat array of [`LUT_ENTRIES`] little-endian 32-bit
/// values. Evaluation starts at entry 53 and chases one successor per card
/// (cards numbered 1 through 52); after five or six cards one extra lookup
/// finishes the hand. How the table is generated is outside this crate.
#[derive(Debug)]
pub struct TwoPlusTwoEvaluator {
    lut: Vec<i32>,
}

impl TwoPlusTwoEvaluator {
    /// Load a ranking table from a file.
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] if the file does not hold
    /// exactly [`LUT_ENTRIES`] 32-bit entries. No partially-loaded evaluator
    /// is ever returned.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        if bytes.len() != LUT_ENTRIES * 4 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "ranking table holds {} bytes, expected {}",
                    bytes.len(),
                    LUT_ENTRIES * 4
                ),
            ));
        }

        let lut = bytes
            .chunks_exact(4)
            .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { lut })
    }

    fn step(&self, state: usize, card: usize) -> usize {
        self.lut[state + card] as usize
    }
}

impl HandEvaluator for TwoPlusTwoEvaluator {
    fn evaluate_five(&self, cards: [usize; 5]) -> usize {
        let mut p = 53;
        for card in cards {
            p = self.step(p, card);
        }
        self.lut[p] as usize
    }

    fn evaluate_six(&self, cards: [usize; 6]) -> usize {
        let mut p = 53;
        for card in cards {
            p = self.step(p, card);
        }
        self.lut[p] as usize
    }

    fn evaluate_seven(&self, cards: [usize; 7]) -> usize {
        let mut p = 53;
        for card in cards {
            p = self.step(p, card);
        }
        p
    }
}
