use gameoflife::{Config, NiceInt, Variant};
use std::time::Instant;

const SIDE: i64 = 1 << 10;
const STEPS: usize = 100;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn main() {
    for variant in Variant::ALL {
        let timer = Instant::now();
        let mut engine = match Config::new(variant, SIDE, SIDE, FILL_RATE) {
            Ok(config) => config.with_seed(SEED).build(),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };
        engine.reset();
        println!("{:>16}: time to build engine: {:?}", variant, timer.elapsed());

        let timer = Instant::now();
        engine.update(STEPS);
        let elapsed = timer.elapsed();
        let cells_per_sec = (SIDE * SIDE) as f64 * STEPS as f64 / elapsed.as_secs_f64();
        println!(
            "{:>16}: {} steps in {:?} ({} cells/s), population {}",
            variant,
            STEPS,
            elapsed,
            NiceInt::from_f64(cells_per_sec),
            NiceInt::from_usize(engine.population()),
        );
    }
}
