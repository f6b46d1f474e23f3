// File: crates/chart-core/src/grid.rs
// Summary: Tick placement for linear and log10 value axes, and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round step (1, 2 or 5 times a power of ten) giving about `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let factor = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * mag
}

/// Multiples of a nice step inside [min, max].
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return vec![min];
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil();
    let last = (max / step + 1e-9).floor();
    let mut ticks = Vec::new();
    let mut k = first;
    while k <= last {
        let v = k * step;
        ticks.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        k += 1.0;
    }
    ticks
}

/// Powers of ten inside [min, max]; the endpoints when no decade falls inside.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !(min > 0.0) || !max.is_finite() || max <= min {
        return vec![min];
    }
    let lo = min.log10().ceil() as i32;
    let hi = (max.log10() + 1e-9).floor() as i32;
    if lo > hi {
        return vec![min, max];
    }
    (lo..=hi).map(|k| 10f64.powi(k)).collect()
}

pub fn format_tick(v: f64) -> String {
    let a = v.abs();
    if a != 0.0 && (a >= 1e6 || a < 1e-3) {
        return format!("{v:e}");
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
