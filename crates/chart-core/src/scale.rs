// File: crates/chart-core/src/scale.rs
// Summary: Pixel transforms for the category (X) and value (Y) axes.

/// Horizontal category scale: `count` slots spread edge to edge.
/// A single category sits in the middle.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    #[inline]
    pub fn to_px(&self, index: f64) -> f32 {
        if self.count <= 1 {
            return (self.left_px + self.right_px) * 0.5;
        }
        let step = (self.right_px - self.left_px) / (self.count - 1) as f32;
        self.left_px + index as f32 * step
    }

    /// Draw every n-th label so neighbouring labels are at least `min_px` apart.
    pub fn label_stride(&self, min_px: f32) -> usize {
        if self.count <= 1 {
            return 1;
        }
        let step = ((self.right_px - self.left_px) / (self.count - 1) as f32).max(1e-3);
        ((min_px / step).ceil() as usize).max(1)
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(top_px: f32, bottom_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // log scale needs a strictly positive, non-empty range
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { top_px, bottom_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (y.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (y - self.vmin) / span
        };
        self.bottom_px - frac as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let frac = ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64;
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            10f64.powf(self.log_min + frac * span)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.vmin + frac * span
        }
    }
}
