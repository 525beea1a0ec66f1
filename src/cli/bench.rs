use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rand::{SeedableRng, rngs::StdRng};

use handbench::bench::{hands_per_second, time_batch_evaluation};
use handbench::evaluator::{TwoPlusTwoEvaluator, to_one_based};
use handbench::sampler::generate_hands;

pub(crate) fn run_bench(lut: &Path, num_hands: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("Sampling {num_hands} distinct 7-card hands...");
    let hands = generate_hands(7, num_hands, &mut rng, to_one_based)?;
    let hands: Vec<[usize; 7]> = hands
        .into_iter()
        .map(|hand| {
            hand.try_into()
                .map_err(|_| anyhow!("sampler produced a hand that is not 7 cards"))
        })
        .collect::<Result<_>>()?;

    let evaluator = TwoPlusTwoEvaluator::from_file(lut)
        .with_context(|| format!("failed to load ranking table from {}", lut.display()))?;

    let elapsed = time_batch_evaluation(&evaluator, &hands);
    let rate = hands_per_second(num_hands, elapsed)
        .ok_or_else(|| anyhow!("batch finished below timer resolution; use more hands"))?;

    println!("Evaluated {num_hands} hands in {elapsed:?}.");
    println!("{rate} hands/second");
    Ok(())
}
