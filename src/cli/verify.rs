use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use handbench::evaluator::{HandCategory, HandEvaluator, TwoPlusTwoEvaluator, hand_type, to_one_based};
use handbench::verify::{CategoryCounts, TOTAL_SEVEN_CARD_HANDS, enumerate_seven_card_hands};

const PROGRESS_CHUNK: usize = 1 << 20;

pub(crate) fn run_verify(lut: &Path) -> Result<()> {
    let evaluator = TwoPlusTwoEvaluator::from_file(lut)
        .with_context(|| format!("failed to load ranking table from {}", lut.display()))?;

    let bar = ProgressBar::new(TOTAL_SEVEN_CARD_HANDS as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} hands ({eta})")
            .expect("static progress template"),
    );

    let mut counts = CategoryCounts::default();
    let mut since_tick = 0usize;
    enumerate_seven_card_hands(|cards| {
        let ranking = evaluator.evaluate_seven(cards.map(to_one_based));
        counts.record(hand_type(ranking));
        since_tick += 1;
        if since_tick == PROGRESS_CHUNK {
            bar.inc(PROGRESS_CHUNK as u64);
            since_tick = 0;
        }
    });
    bar.finish_and_clear();

    let total = counts.total();
    println!("Enumerated {total} hands.");
    println!("Category counts:");
    for category in HandCategory::ALL {
        let count = counts.count(category);
        let percentage = (count as f64 / total as f64) * 100.0;
        println!("{category:?}: {count} ({percentage:.2}%)");
    }

    counts.check_against_reference()?;
    println!("All category counts match the reference distribution.");
    Ok(())
}
