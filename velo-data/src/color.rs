//! Value-to-color mapping on a fixed red→yellow→green gradient.
//!
//! The palette and interpolation are fixed, so identical inputs always
//! produce the same color, across calls and across runs.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Hex form used in renderer style properties, e.g. `"#a50026"`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// ColorBrewer RdYlGn stops, red end first.
pub const RED_YELLOW_GREEN: [Rgb; 11] = [
    Rgb { r: 0xa5, g: 0x00, b: 0x26 },
    Rgb { r: 0xd7, g: 0x30, b: 0x27 },
    Rgb { r: 0xf4, g: 0x6d, b: 0x43 },
    Rgb { r: 0xfd, g: 0xae, b: 0x61 },
    Rgb { r: 0xfe, g: 0xe0, b: 0x8b },
    Rgb { r: 0xff, g: 0xff, b: 0xbf },
    Rgb { r: 0xd9, g: 0xef, b: 0x8b },
    Rgb { r: 0xa6, g: 0xd9, b: 0x6a },
    Rgb { r: 0x66, g: 0xbd, b: 0x63 },
    Rgb { r: 0x1a, g: 0x98, b: 0x50 },
    Rgb { r: 0x00, g: 0x68, b: 0x37 },
];

/// Percentile of the observed values mapped to the green end by default.
pub const DEFAULT_PERCENTILE: f64 = 0.8;

/// Lowest allowed upper bound; keeps the gradient from collapsing when the
/// derived percentile is very small.
pub const VMAX_FLOOR: f64 = 1.0;

/// Normalization window for the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBounds {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorBounds {
    /// Derive the window from observed values: `vmin` is the minimum, and
    /// `vmax` the requested percentile floored at `floor`. Returns `None`
    /// for an empty input.
    pub fn from_values(values: &[f64], pct: f64, floor: f64) -> Option<ColorBounds> {
        let vmax = percentile(values, pct)?.max(floor);
        let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
        Some(ColorBounds { vmin, vmax })
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        color_for(value, self.vmin, self.vmax)
    }
}

/// Map a value onto the gradient over `[vmin, vmax]`.
///
/// Values outside the window are clamped to its ends; a window with no
/// width maps everything to the red end.
pub fn color_for(value: f64, vmin: f64, vmax: f64) -> Rgb {
    if !(vmax > vmin) {
        return RED_YELLOW_GREEN[0];
    }
    let clamped = value.clamp(vmin, vmax);
    let t = (clamped - vmin) / (vmax - vmin);

    let last = RED_YELLOW_GREEN.len() - 1;
    let position = t * last as f64;
    let index = (position as usize).min(last - 1);
    let fraction = position - index as f64;
    let low = RED_YELLOW_GREEN[index];
    let high = RED_YELLOW_GREEN[index + 1];
    Rgb {
        r: lerp_channel(low.r, high.r, fraction),
        g: lerp_channel(low.g, high.g, fraction),
        b: lerp_channel(low.b, high.b, fraction),
    }
}

fn lerp_channel(a: u8, b: u8, fraction: f64) -> u8 {
    (a as f64 + fraction * (b as f64 - a as f64)).round() as u8
}

/// Percentile by linear interpolation between closest ranks, `q` in [0, 1].
pub fn percentile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        return Some(sorted[low]);
    }
    let fraction = rank - low as f64;
    Some(sorted[low] + fraction * (sorted[high] - sorted[low]))
}
