//! Performance benchmark comparing serial, parallel and in-place stepping

use std::time::Instant;

use heat_life::domain::{Grid, HeatMap, RulePreset, StepOptions, step, step_into, step_parallel};
use rand::{SeedableRng, rngs::StdRng};

fn random_grid(size: usize) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    Grid::random(size, size, 0.3, &mut rng).expect("density is within range")
}

fn benchmark_serial(size: usize, iterations: u32, options: StepOptions) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid, options);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_parallel(size: usize, iterations: u32, options: StepOptions) -> f64 {
    let mut grid = random_grid(size);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = step_parallel(&grid, options);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_in_place(size: usize, iterations: u32, options: StepOptions) -> f64 {
    let mut grid = random_grid(size);
    let mut scratch = Grid::new(size, size);

    let start = Instant::now();
    for _ in 0..iterations {
        step_into(&grid, options, &mut scratch).expect("same dimensions");
        std::mem::swap(&mut grid, &mut scratch);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_heat(size: usize, iterations: u32) -> f64 {
    let grid = random_grid(size);
    let mut heat = HeatMap::from_grid(&grid, 10.0).expect("positive max heat");

    let start = Instant::now();
    for _ in 0..iterations {
        heat = heat.update(&grid, 1.0, 10.0).expect("matching heat map");
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Heat Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    for rule in RulePreset::all() {
        println!("Rule: {} ({})", rule.name(), rule.table().notation());
        println!(
            "{:>10} {:>12} {:>12} {:>12} {:>12} {:>10}",
            "Size", "Serial", "Parallel", "InPlace", "Heat", "Speedup"
        );
        println!("{:-<74}", "");

        for size in sizes {
            for wrap in [true, false] {
                let options = StepOptions::new(rule, wrap);
                let serial_ms = benchmark_serial(size, iterations, options);
                let parallel_ms = benchmark_parallel(size, iterations, options);
                let in_place_ms = benchmark_in_place(size, iterations, options);
                let heat_ms = benchmark_heat(size, iterations);

                println!(
                    "{:>10} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>9.1}x",
                    format!("{}x{}{}", size, size, if wrap { "" } else { "b" }),
                    serial_ms,
                    parallel_ms,
                    in_place_ms,
                    heat_ms,
                    serial_ms / parallel_ms.max(f64::EPSILON)
                );
            }
        }
        println!();
    }
}
