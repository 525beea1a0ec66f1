use handbench::evaluator::{HandCategory, HandEvaluator};
use handbench::verify::{
    TOTAL_SEVEN_CARD_HANDS, VerifyError, enumerate_seven_card_hands, verify_evaluator,
};

#[test]
#[ignore]
fn enumeration_visits_every_seven_card_hand() {
    let mut count = 0usize;
    let mut first = None;
    let mut last = [0usize; 7];
    enumerate_seven_card_hands(|cards| {
        if first.is_none() {
            first = Some(*cards);
        }
        last = *cards;
        count += 1;
    });
    assert_eq!(count, TOTAL_SEVEN_CARD_HANDS);
    assert_eq!(first, Some([0, 1, 2, 3, 4, 5, 6]));
    assert_eq!(last, [45, 46, 47, 48, 49, 50, 51]);
}

/// Ranks every hand as a bare No Pair, regardless of cards.
struct ConstantEvaluator;

impl HandEvaluator for ConstantEvaluator {
    fn evaluate_five(&self, _cards: [usize; 5]) -> usize {
        1 << 12
    }

    fn evaluate_six(&self, _cards: [usize; 6]) -> usize {
        1 << 12
    }

    fn evaluate_seven(&self, _cards: [usize; 7]) -> usize {
        1 << 12
    }
}

#[test]
#[ignore]
fn a_degenerate_evaluator_fails_verification_loudly() {
    let result = verify_evaluator(&ConstantEvaluator, |c| c + 1, |ranking| ranking >> 12);
    assert_eq!(
        result.unwrap_err(),
        VerifyError::CategoryMismatch {
            category: HandCategory::NoPair,
            expected: 23_294_460,
            observed: TOTAL_SEVEN_CARD_HANDS,
        }
    );
}
