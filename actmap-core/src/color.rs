//! Diverging coolwarm colormap: blue through white to red, white at the
//! midpoint.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Map a normalized intensity in [0,1] to the coolwarm palette. Inputs
/// outside the range clamp to the endpoints; NaN maps to the cold endpoint
/// like every other invalid input. Channel values truncate toward zero
/// rather than rounding, so each half of the ramp biases slightly dark.
pub fn intensity_to_coolwarm(intensity: f64) -> Rgb {
    let norm = if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    };
    if norm < 0.5 {
        // blue -> white
        let c = (255.0 * (2.0 * norm)).floor() as u8;
        Rgb::new(c, c, 255)
    } else {
        // white -> red
        let c = (255.0 * (2.0 - 2.0 * norm)).floor() as u8;
        Rgb::new(255, c, c)
    }
}
