//! Device profile transforms: the conversion between the device independent
//! CIE-Lab space and the RGB values of a concrete device.

use crate::{
    color::Components,
    error::{Error, Result},
    math::{transform, transform_3x3, Transform},
    models::{Lab, Rgb, ToXyz, TransferCurve, XyzD50, XyzD65, D50, D65},
};

/// Converts between CIE-Lab (D50) and the RGB values of a device.
///
/// Implementations must be free of interior mutability so a single instance
/// can be used from any number of threads at once.
pub trait ProfileTransform: Send + Sync {
    /// A human readable name of the profile.
    fn name(&self) -> &str;

    /// Strict conversion: `None` if any channel falls outside of [0, 1].
    fn lab_to_rgb(&self, lab: &Lab) -> Option<Rgb>;

    /// Bounded conversion: out of range channels are clamped into [0, 1].
    fn lab_to_rgb_clamped(&self, lab: &Lab) -> Rgb;

    /// Convert an RGB color to CIE-Lab. Always succeeds.
    fn rgb_to_lab(&self, rgb: &Rgb) -> Lab;
}

/// The white point an RGB profile is defined relative to.
#[derive(Clone, Copy, Debug, PartialEq)]
enum NativeWhite {
    D50,
    D65,
}

/// An RGB profile described by its primaries (as a matrix to and from
/// CIE-XYZ) and a tone response curve.
#[derive(Clone, Debug)]
pub struct MatrixProfile {
    name: &'static str,
    white: NativeWhite,
    to_xyz: Transform,
    from_xyz: Transform,
    curve: TransferCurve,
}

impl MatrixProfile {
    /// The sRGB color space.
    pub fn srgb() -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        Self {
            name: "sRGB",
            white: NativeWhite::D65,
            to_xyz: TO_XYZ,
            from_xyz: FROM_XYZ,
            curve: TransferCurve::Srgb,
        }
    }

    /// The Display P3 color space.
    pub fn display_p3() -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.48657094864821626, 0.22897456406974884, 0.0,
            0.26566769316909294, 0.6917385218365062,  0.045113381858902575,
            0.1982172852343625,  0.079286914093745,   1.0439443689009757,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             2.4934969119414245,  -0.829488969561575,    0.035845830243784335,
            -0.9313836179191236,   1.7626640603183468,  -0.07617238926804171,
            -0.40271078445071684,  0.02362468584194359,  0.9568845240076873,
        );

        Self {
            name: "Display P3",
            white: NativeWhite::D65,
            to_xyz: TO_XYZ,
            from_xyz: FROM_XYZ,
            curve: TransferCurve::Srgb,
        }
    }

    /// The a98-rgb (Adobe RGB 1998 compatible) color space.
    pub fn a98_rgb() -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.5766690429101308,  0.29734497525053616, 0.027031361386412378,
            0.18555823790654627, 0.627363566255466,   0.07068885253582714,
            0.18822864623499472, 0.07529145849399789, 0.9913375368376389,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             2.041587903810746,  -0.9692436362808798,   0.013444280632031024,
            -0.5650069742788596,  1.8759675015077206,  -0.11836239223101824,
            -0.3447313507783295,  0.04155505740717561,  1.0151749943912054,
        );

        Self {
            name: "a98-rgb",
            white: NativeWhite::D65,
            to_xyz: TO_XYZ,
            from_xyz: FROM_XYZ,
            curve: TransferCurve::Gamma(563.0 / 256.0),
        }
    }

    /// The ProPhoto RGB color space.
    pub fn pro_photo_rgb() -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.7977604896723027,  0.2880711282292934,     0.0,
            0.13518583717574031, 0.7118432178101014,     0.0,
            0.0313493495815248,  0.00008565396060525902, 0.8251046025104601,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             1.3457989731028281,  -0.5446224939028347,  0.0,
            -0.25558010007997534,  1.5082327413132781,  0.0,
            -0.05110628506753401,  0.02053603239147973, 1.2119675456389454,
        );

        Self {
            name: "ProPhoto RGB",
            white: NativeWhite::D50,
            to_xyz: TO_XYZ,
            from_xyz: FROM_XYZ,
            curve: TransferCurve::ProPhoto,
        }
    }

    /// The ITU-R BT.2020 color space.
    pub fn rec2020() -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.6369580483012913,  0.26270021201126703,  0.0,
            0.14461690358620838, 0.677998071518871,    0.028072693049087508,
            0.16888097516417205, 0.059301716469861945, 1.0609850577107909,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             1.7166511879712676, -0.666684351832489,    0.017639857445310915,
            -0.3556707837763924,  1.616481236634939,   -0.042770613257808655,
            -0.2533662813736598,  0.01576854581391113,  0.942103121235474,
        );

        Self {
            name: "Rec. 2020",
            white: NativeWhite::D65,
            to_xyz: TO_XYZ,
            from_xyz: FROM_XYZ,
            curve: TransferCurve::Rec2020,
        }
    }

    /// Look up a built-in profile by name. Case and `-`/`_` separators are
    /// ignored, so `display-p3`, `DisplayP3` and `display_p3` all match.
    pub fn by_name(name: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '.'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "srgb" => Ok(Self::srgb()),
            "displayp3" | "p3" => Ok(Self::display_p3()),
            "a98rgb" | "adobergb" => Ok(Self::a98_rgb()),
            "prophotorgb" | "prophoto" => Ok(Self::pro_photo_rgb()),
            "rec2020" => Ok(Self::rec2020()),
            _ => Err(Error::UnknownProfile(name.to_string())),
        }
    }

    /// The tone response curve of this profile.
    pub fn curve(&self) -> TransferCurve {
        self.curve
    }

    /// Convert without any range check. Channels may be outside of [0, 1]
    /// or NaN for non-finite input.
    pub fn lab_to_rgb_unbounded(&self, lab: &Lab) -> Rgb {
        let xyz_d50 = lab.to_xyz();
        let xyz = match self.white {
            NativeWhite::D50 => xyz_d50.to_components(),
            NativeWhite::D65 => xyz_d50.transfer::<D65>().to_components(),
        };
        let linear = transform(&self.from_xyz, xyz);
        self.curve.encode(linear).into()
    }
}

impl ProfileTransform for MatrixProfile {
    fn name(&self) -> &str {
        self.name
    }

    fn lab_to_rgb(&self, lab: &Lab) -> Option<Rgb> {
        let rgb = self.lab_to_rgb_unbounded(lab);
        rgb.is_in_range().then_some(rgb)
    }

    fn lab_to_rgb_clamped(&self, lab: &Lab) -> Rgb {
        self.lab_to_rgb_unbounded(lab).clip()
    }

    fn rgb_to_lab(&self, rgb: &Rgb) -> Lab {
        let linear: Components = self.curve.decode(rgb.to_components());
        let xyz = transform(&self.to_xyz, linear);
        let xyz_d50: XyzD50 = match self.white {
            NativeWhite::D50 => xyz.into(),
            NativeWhite::D65 => XyzD65::from(xyz).transfer::<D50>(),
        };
        Lab::from(xyz_d50)
    }
}
