//! Model a color in an RGB device color space.

use bitflags::bitflags;

use crate::color::{Component, Components};

bitflags! {
    /// Channels of an [`Rgb`] color that fall outside of [0, 1].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Clipped: u8 {
        /// The red channel is out of range.
        const RED = 1 << 0;
        /// The green channel is out of range.
        const GREEN = 1 << 1;
        /// The blue channel is out of range.
        const BLUE = 1 << 2;
    }
}

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

perceptual_color_macros::gen_model! {
    /// A gamma encoded color of an RGB device. Channels are nominally in
    /// [0, 1]; values outside of that range have no representation on the
    /// device.
    pub struct Rgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl Rgb {
    /// Create a color from 8-bit channels.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Returns the channels that are outside of [0, 1]. NaN counts as out of
    /// range.
    pub fn clipped_channels(&self) -> Clipped {
        let mut clipped = Clipped::empty();
        clipped.set(Clipped::RED, !in_zero_to_one(self.red));
        clipped.set(Clipped::GREEN, !in_zero_to_one(self.green));
        clipped.set(Clipped::BLUE, !in_zero_to_one(self.blue));
        clipped
    }

    /// Returns true if every channel is within [0, 1].
    pub fn is_in_range(&self) -> bool {
        self.clipped_channels().is_empty()
    }

    /// Return a color with each of the components clamped to [0, 1]. NaN
    /// becomes 0.
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        Self::from(self.to_components().map(|v| {
            if v.is_nan() {
                0.0
            } else {
                v.clamp(0.0, 1.0)
            }
        }))
    }

    /// Quantize to 8-bit channels, clipping first.
    pub fn to_bytes(&self) -> [u8; 3] {
        let Components(red, green, blue) = self.clip().to_components();
        [
            (red * 255.0).round() as u8,
            (green * 255.0).round() as u8,
            (blue * 255.0).round() as u8,
        ]
    }
}

impl PartialEq for Rgb {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red && self.green == other.green && self.blue == other.blue
    }
}

/// The tone response curve of an RGB color space. Every curve is extended
/// to negative values by mirroring, so out of gamut colors survive the
/// encoding and can be detected afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransferCurve {
    /// The piecewise sRGB curve, also used by Display P3.
    Srgb,
    /// A pure power curve with the given exponent (linear = encoded^gamma).
    Gamma(Component),
    /// The piecewise ProPhoto RGB (ROMM) curve.
    ProPhoto,
    /// The piecewise Rec. 2020 curve.
    Rec2020,
}

impl TransferCurve {
    #[allow(clippy::excessive_precision)]
    const REC2020_ALPHA: Component = 1.09929682680944;
    #[allow(clippy::excessive_precision)]
    const REC2020_BETA: Component = 0.018053968510807;

    /// Convert linear light components to gamma encoded components.
    pub fn encode(&self, from: Components) -> Components {
        match *self {
            TransferCurve::Srgb => from.map(|value| {
                let abs = value.abs();

                if abs > 0.0031308 {
                    value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
                } else {
                    12.92 * value
                }
            }),
            TransferCurve::Gamma(gamma) => from.map(|v| v.signum() * v.abs().powf(1.0 / gamma)),
            TransferCurve::ProPhoto => {
                const E: Component = 1.0 / 512.0;

                from.map(|v| {
                    let abs = v.abs();

                    if abs >= E {
                        v.signum() * abs.powf(1.0 / 1.8)
                    } else {
                        16.0 * v
                    }
                })
            }
            TransferCurve::Rec2020 => from.map(|v| {
                let abs = v.abs();

                if abs > Self::REC2020_BETA {
                    v.signum()
                        * (Self::REC2020_ALPHA * abs.powf(0.45) - (Self::REC2020_ALPHA - 1.0))
                } else {
                    4.5 * v
                }
            }),
        }
    }

    /// Convert gamma encoded components to linear light components.
    pub fn decode(&self, from: Components) -> Components {
        match *self {
            TransferCurve::Srgb => from.map(|value| {
                let abs = value.abs();

                if abs < 0.04045 {
                    value / 12.92
                } else {
                    value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
                }
            }),
            TransferCurve::Gamma(gamma) => from.map(|v| v.signum() * v.abs().powf(gamma)),
            TransferCurve::ProPhoto => {
                const E: Component = 16.0 / 512.0;

                from.map(|v| {
                    let abs = v.abs();

                    if abs <= E {
                        v / 16.0
                    } else {
                        v.signum() * abs.powf(1.8)
                    }
                })
            }
            TransferCurve::Rec2020 => from.map(|v| {
                let abs = v.abs();

                if abs < Self::REC2020_BETA * 4.5 {
                    v / 4.5
                } else {
                    v.signum()
                        * ((abs + Self::REC2020_ALPHA - 1.0) / Self::REC2020_ALPHA)
                            .powf(1.0 / 0.45)
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn clipped_channels_are_reported() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_in_range());
        assert_eq!(Rgb::new(-0.1, 0.5, 1.0).clipped_channels(), Clipped::RED);
        assert_eq!(
            Rgb::new(0.5, 1.2, -3.0).clipped_channels(),
            Clipped::GREEN | Clipped::BLUE
        );
        assert_eq!(
            Rgb::new(0.5, 0.5, Component::NAN).clipped_channels(),
            Clipped::BLUE
        );
    }

    #[test]
    fn clip_clamps_into_range() {
        let c = Rgb::new(-0.2, 0.4, 1.7).clip();
        assert_eq!(c, Rgb::new(0.0, 0.4, 1.0));
        let c = Rgb::new(Component::NAN, 0.4, 0.6).clip();
        assert_eq!(c.red, 0.0);
    }

    #[test]
    fn bytes_round_trip() {
        let rgb = Rgb::from_bytes(210, 105, 30);
        assert_eq!(rgb.to_bytes(), [210, 105, 30]);
        assert_eq!(Rgb::new(2.0, -1.0, 0.5).to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn curves_are_inverse() {
        for curve in [
            TransferCurve::Srgb,
            TransferCurve::Gamma(563.0 / 256.0),
            TransferCurve::ProPhoto,
            TransferCurve::Rec2020,
        ] {
            for v in [0.0, 0.001, 0.02, 0.3, 0.8, 1.0, -0.25] {
                let c = Components(v, v, v);
                let back = curve.decode(curve.encode(c));
                assert_component_eq!(back.0, v);
            }
        }
    }

    #[test]
    fn srgb_curve_known_values() {
        // chocolate
        let encoded = TransferCurve::Srgb.encode(Components(
            0.6444796819705821,
            0.14126329114027164,
            0.012983032342173012,
        ));
        assert_component_eq!(encoded.0, 0.8235294117647058);
        assert_component_eq!(encoded.1, 0.4117647058823529);
        assert_component_eq!(encoded.2, 0.11764705882352941);
    }
}
