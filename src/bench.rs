use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::evaluator::HandEvaluator;

/// Time one bulk evaluation pass over a pre-generated batch of 7-card hands.
///
/// The clock covers the evaluate loop only; hand generation and evaluator
/// construction happen before the caller gets here. Rankings go through
/// `black_box` so the loop cannot be optimized away.
pub fn time_batch_evaluation<E: HandEvaluator>(evaluator: &E, hands: &[[usize; 7]]) -> Duration {
    let start = Instant::now();
    for hand in hands {
        black_box(evaluator.evaluate_seven(*hand));
    }
    start.elapsed()
}

/// Throughput as whole hands per second: floor(num_hands * 10^6 / elapsed
/// microseconds).
///
/// Returns `None` when the elapsed time rounds to zero microseconds; callers
/// should retry with a larger batch rather than divide by zero.
pub fn hands_per_second(num_hands: usize, elapsed: Duration) -> Option<u64> {
    let micros = elapsed.as_micros();
    if micros == 0 {
        return None;
    }
    Some((num_hands as u128 * 1_000_000 / micros) as u64)
}
