/// 8-bit-per-channel RGB triple, as delivered by the color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// CMYK quadruple as integer percentages, each in 0..=100.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cmyk {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

/// Converts an 8-bit RGB triple to integer CMYK percentages.
///
/// Channels are normalized over 255, k is the distance of the brightest
/// channel from full intensity, and the chromatic components are scaled by
/// the remaining white. Percentages round with `f64::round` (ties away from
/// zero), so mid-gray (128, 128, 128) gives k = 50.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = (
        rgb.r as f64 / 255.0,
        rgb.g as f64 / 255.0,
        rgb.b as f64 / 255.0,
    );

    let k = 1.0 - r.max(g).max(b);
    if k == 1.0 {
        // Pure black: the chromatic terms would divide by zero.
        return Cmyk { c: 0, m: 0, y: 0, k: 100 };
    }

    Cmyk {
        c: (100.0 * (1.0 - r - k) / (1.0 - k)).round() as u8,
        m: (100.0 * (1.0 - g - k) / (1.0 - k)).round() as u8,
        y: (100.0 * (1.0 - b - k) / (1.0 - k)).round() as u8,
        k: (100.0 * k).round() as u8,
    }
}

pub fn hex_code(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_code(rgb: Rgb) -> String {
    format!("RGB({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

pub fn cmyk_code(rgb: Rgb) -> String {
    let cmyk = rgb_to_cmyk(rgb);
    format!("CMYK({}%, {}%, {}%, {}%)", cmyk.c, cmyk.m, cmyk.y, cmyk.k)
}

/// The three display lines, all derived from the same triple. No trailing
/// newline, so saved files round-trip byte-for-byte.
pub fn display_text(rgb: Rgb) -> String {
    format!("HEX: {}\n{}\n{}", hex_code(rgb), rgb_code(rgb), cmyk_code(rgb))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    macro_rules! test_rgb_to_cmyk {
        ($($name:ident: $tc:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let ((r, g, b), (c, m, y, k)) = $tc;
                    assert_eq!(rgb_to_cmyk(Rgb::new(r, g, b)), Cmyk { c, m, y, k });
                }
            )*
        }
    }

    test_rgb_to_cmyk! {
        white: ((255, 255, 255), (0, 0, 0, 0)),
        gray: ((128, 128, 128), (0, 0, 0, 50)),
        black: ((0, 0, 0), (0, 0, 0, 100)),
        red: ((255, 0, 0), (0, 100, 100, 0)),
        green: ((0, 255, 0), (100, 0, 100, 0)),
        blue: ((0, 0, 255), (100, 100, 0, 0)),
    }

    #[test]
    fn components_stay_in_percentage_range() {
        for r in (0u8..=255).step_by(15) {
            for g in (0u8..=255).step_by(15) {
                for b in (0u8..=255).step_by(15) {
                    let cmyk = rgb_to_cmyk(Rgb::new(r, g, b));
                    assert!(cmyk.c <= 100, "c out of range for ({r}, {g}, {b})");
                    assert!(cmyk.m <= 100, "m out of range for ({r}, {g}, {b})");
                    assert!(cmyk.y <= 100, "y out of range for ({r}, {g}, {b})");
                    assert!(cmyk.k <= 100, "k out of range for ({r}, {g}, {b})");
                }
            }
        }
    }

    #[test]
    fn conversion_is_pure() {
        let input = Rgb::new(18, 52, 86);
        assert_eq!(rgb_to_cmyk(input), rgb_to_cmyk(input));
    }

    #[test]
    fn hex_code_is_uppercase_and_zero_padded() {
        assert_eq!(hex_code(Rgb::new(18, 52, 86)), "#123456");
        assert_eq!(hex_code(Rgb::new(0, 10, 255)), "#000AFF");
    }

    #[test]
    fn display_text_is_three_lines_without_trailing_newline() {
        assert_eq!(
            display_text(Rgb::new(255, 0, 0)),
            "HEX: #FF0000\nRGB(255, 0, 0)\nCMYK(0%, 100%, 100%, 0%)"
        );
    }
}
