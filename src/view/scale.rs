//! Color scales for value-bound styling.
//!
//! UI-agnostic: everything here works in plain RGB triples. The terminal
//! layer maps them to concrete colors.

/// A gradient defined by positioned RGB stops, sampled by linear
/// interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    stops: &'static [(f64, (u8, u8, u8))],
}

impl ColorScale {
    /// Purple-to-white ramp used by the styled table view.
    pub const TABLE: ColorScale = ColorScale {
        stops: &[
            (0.0, (77, 0, 76)),
            (0.5, (242, 229, 255)),
            (1.0, (255, 255, 255)),
        ],
    };

    /// Light-to-dark blue ramp.
    pub const BLUES: ColorScale = ColorScale {
        stops: &[
            (0.0, (247, 251, 255)),
            (0.5, (107, 174, 214)),
            (1.0, (8, 48, 107)),
        ],
    };

    /// Dark-purple to yellow ramp.
    pub const VIRIDIS: ColorScale = ColorScale {
        stops: &[
            (0.0, (68, 1, 84)),
            (0.25, (59, 82, 139)),
            (0.5, (33, 145, 140)),
            (0.75, (94, 201, 98)),
            (1.0, (253, 231, 37)),
        ],
    };

    /// Red through yellow to green.
    pub const RD_YL_GN: ColorScale = ColorScale {
        stops: &[
            (0.0, (165, 0, 38)),
            (0.5, (255, 255, 191)),
            (1.0, (0, 104, 55)),
        ],
    };

    /// Default ramp for numeric color bindings.
    pub const PLASMA: ColorScale = ColorScale {
        stops: &[
            (0.0, (13, 8, 135)),
            (0.25, (126, 3, 168)),
            (0.5, (204, 71, 120)),
            (0.75, (248, 149, 64)),
            (1.0, (240, 249, 33)),
        ],
    };

    /// Samples the gradient at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> (u8, u8, u8) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mut prev = self.stops[0];
        for &stop in self.stops {
            if t <= stop.0 {
                let span = stop.0 - prev.0;
                if span <= f64::EPSILON {
                    return stop.1;
                }
                let local = (t - prev.0) / span;
                return lerp_rgb(prev.1, stop.1, local);
            }
            prev = stop;
        }
        prev.1
    }

    /// Normalizes `value` within `[min, max]` and samples. A degenerate
    /// range samples the middle of the scale.
    pub fn sample_in(&self, value: f64, min: f64, max: f64) -> (u8, u8, u8) {
        if max - min <= f64::EPSILON {
            return self.sample(0.5);
        }
        self.sample((value - min) / (max - min))
    }
}

/// Category palette for non-numeric color bindings, cycled by index.
pub const QUALITATIVE: &[(u8, u8, u8)] = &[
    (99, 110, 250),
    (239, 85, 59),
    (0, 204, 150),
    (171, 99, 250),
    (255, 161, 90),
    (25, 211, 243),
    (255, 102, 146),
    (182, 232, 128),
    (255, 151, 255),
    (254, 203, 82),
];

/// Color for the `i`-th category.
pub fn qualitative(i: usize) -> (u8, u8, u8) {
    QUALITATIVE[i % QUALITATIVE.len()]
}

fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| -> u8 {
        let v = f64::from(x) + (f64::from(y) - f64::from(x)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
