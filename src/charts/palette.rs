use plotters::style::RGBColor;

const PLASMA: [(u8, u8, u8); 5] = [
    (13, 8, 135),
    (126, 3, 168),
    (204, 71, 120),
    (248, 149, 64),
    (240, 249, 33),
];

const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

pub fn plasma(t: f64) -> RGBColor {
    gradient(&PLASMA, t)
}

pub fn viridis(t: f64) -> RGBColor {
    gradient(&VIRIDIS, t)
}

/// Position of `value` within `[0, max]`, 0 when the range is empty.
pub fn normalize(value: f64, max: f64) -> f64 {
    if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 }
}

fn gradient(stops: &[(u8, u8, u8)], t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (stops.len() - 1) as f64;
    let low = (scaled.floor() as usize).min(stops.len() - 2);
    let frac = scaled - low as f64;

    let (r0, g0, b0) = stops[low];
    let (r1, g1, b1) = stops[low + 1];
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}
