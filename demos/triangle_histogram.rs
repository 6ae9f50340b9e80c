//! Draw from a few weight curves and print text histograms.
//!
//! A triangle peaking at the midpoint, a random generated curve, and a
//! discrete pick among labelled moods. Run with `RUST_LOG=blur=debug` to see
//! the generator's log lines.

use blur::{random_weight_list_with_rng, WeightCurve, WeightedOptions};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const DRAWS: usize = 10_000;
const BINS: usize = 20;
const BAR_WIDTH: usize = 50;

fn histogram(curve: &WeightCurve, rng: &mut ChaCha8Rng) -> Result<Vec<usize>, blur::SamplingError> {
    let ((x_min, x_max), _) = curve.bounds();
    let width = (x_max - x_min).max(f64::MIN_POSITIVE);
    let mut counts = vec![0usize; BINS];
    for _ in 0..DRAWS {
        let x = curve.sample_with_rng(false, rng)?;
        let bin = (((x - x_min) / width) * BINS as f64) as usize;
        counts[bin.min(BINS - 1)] += 1;
    }
    Ok(counts)
}

fn print_bars(counts: &[usize], label: impl Fn(usize) -> String) {
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);
    for (i, &c) in counts.iter().enumerate() {
        let bar = "#".repeat(c * BAR_WIDTH / peak);
        println!("  {:>8}  {bar} {c}", label(i));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let triangle = WeightCurve::new([(0.0, 0.0), (50.0, 100.0), (100.0, 0.0)])?;
    println!("triangle (0,0) (50,100) (100,0), {DRAWS} draws:");
    print_bars(&histogram(&triangle, &mut rng)?, |i| format!("{:.0}", i as f64 * 5.0));
    println!();

    let points = random_weight_list_with_rng(0.0, 1.0, 0.01, None, &mut rng)?;
    println!("generated curve over [0, 1]:");
    for p in &points {
        println!("  x={:.3}  w={:.0}", p.outcome, p.weight);
    }
    let generated = WeightCurve::new(points)?;
    print_bars(&histogram(&generated, &mut rng)?, |i| format!("{:.2}", i as f64 / BINS as f64));
    println!();

    let moods = WeightedOptions::new([("calm", 5.0), ("curious", 3.0), ("restless", 1.0), ("asleep", 0.0)])?;
    let labels = ["calm", "curious", "restless", "asleep"];
    let mut counts = [0usize; 4];
    for _ in 0..DRAWS {
        let mood = moods.sample_with_rng(&mut rng)?;
        if let Some(i) = labels.iter().position(|&l| l == mood) {
            counts[i] += 1;
        }
    }
    println!("moods 5:3:1:0, {DRAWS} draws:");
    print_bars(&counts, |i| labels[i].to_string());

    Ok(())
}
