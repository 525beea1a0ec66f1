use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;

use crate::combinatorics::{choose, k_combination};

/// Size of the card universe hands are drawn from.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError {
    /// More distinct hands were requested than the combination space holds.
    /// Left unchecked the rejection loop below would never terminate.
    NotEnoughCombinations { requested: usize, available: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NotEnoughCombinations {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} distinct hands from a space of {available}"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Generate `num_hands` distinct hands of `cards_per_hand` cards, drawn
/// uniformly at random from the full combination space over [`DECK_SIZE`]
/// cards.
///
/// Positions are drawn by rejection into a uniqueness set, so the expected
/// cost is only acceptable while `num_hands` is small relative to the space;
/// realistic benchmark batches (10^6 hands out of ~1.3 * 10^8) are fine.
/// Each retained position is unranked into a strictly-decreasing combination
/// and `convert` is applied to every card index (identity, or a shift such as
/// [`crate::evaluator::to_one_based`]).
///
/// Hands are returned in ascending order of position, not generation order.
pub fn generate_hands<R: Rng>(
    cards_per_hand: usize,
    num_hands: usize,
    rng: &mut R,
    convert: impl Fn(usize) -> usize,
) -> Result<Vec<Vec<usize>>, SampleError> {
    let num_possible = choose(DECK_SIZE, cards_per_hand);
    if num_hands > num_possible {
        return Err(SampleError::NotEnoughCombinations {
            requested: num_hands,
            available: num_possible,
        });
    }
    if num_hands == 0 {
        return Ok(Vec::new());
    }

    let mut positions = BTreeSet::new();
    while positions.len() < num_hands {
        positions.insert(rng.gen_range(0..num_possible));
    }

    Ok(positions
        .into_iter()
        .map(|pos| {
            k_combination(cards_per_hand, pos)
                .into_iter()
                .map(&convert)
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, SampleError, generate_hands};
    use crate::combinatorics::{choose, rank_combination};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn returns_the_requested_number_of_distinct_hands() {
        let mut rng = StdRng::seed_from_u64(7);
        let hands = generate_hands(7, 500, &mut rng, |c| c).unwrap();
        assert_eq!(hands.len(), 500);

        let mut seen = HashSet::new();
        for hand in &hands {
            assert_eq!(hand.len(), 7);
            assert!(hand.windows(2).all(|w| w[0] > w[1]));
            assert!(hand.iter().all(|&c| c < DECK_SIZE));
            assert!(seen.insert(hand.clone()));
        }
    }

    #[test]
    fn returns_hands_in_ascending_position_order() {
        let mut rng = StdRng::seed_from_u64(11);
        let hands = generate_hands(5, 200, &mut rng, |c| c).unwrap();
        let positions: Vec<usize> = hands.iter().map(|h| rank_combination(h)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn applies_the_index_conversion() {
        let mut rng = StdRng::seed_from_u64(3);
        let hands = generate_hands(7, 50, &mut rng, |c| c + 1).unwrap();
        for hand in &hands {
            assert!(hand.iter().all(|&c| (1..=DECK_SIZE).contains(&c)));
        }
    }

    #[test]
    fn fails_fast_when_the_space_is_too_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let space = choose(DECK_SIZE, 2);
        let err = generate_hands(2, space + 1, &mut rng, |c| c).unwrap_err();
        assert_eq!(
            err,
            SampleError::NotEnoughCombinations {
                requested: space + 1,
                available: space,
            }
        );
    }

    #[test]
    fn can_exhaust_a_tiny_space() {
        let mut rng = StdRng::seed_from_u64(5);
        let hands = generate_hands(1, DECK_SIZE, &mut rng, |c| c).unwrap();
        let cards: Vec<usize> = hands.iter().map(|h| h[0]).collect();
        assert_eq!(cards, (0..DECK_SIZE).collect::<Vec<_>>());
    }

    #[test]
    fn zero_hands_is_an_empty_batch() {
        let mut rng = StdRng::seed_from_u64(2);
        assert!(generate_hands(7, 0, &mut rng, |c| c).unwrap().is_empty());
    }
}
