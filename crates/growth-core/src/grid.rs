// File: crates/growth-core/src/grid.rs
// Summary: Evenly spaced positions for gridlines and axis label levels.

/// `steps` values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
