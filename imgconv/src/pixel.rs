use num_traits::Zero;

/// The storage depth of a pixel component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDepth {
    /// 8-bit unsigned integer components in the 0..=255 range.
    U8,
    /// 32-bit float components, unit range by convention.
    F32,
}

/// A pixel component type the converters can operate on.
///
/// Only `u8` and `f32` implement this. Conversions accumulate in `f64`, which
/// represents both component types exactly, and narrow back through one fixed
/// policy:
///
/// * `u8` narrows by rounding half away from zero and clamping to 0..=255;
/// * `f32` narrows by the ordinary float cast.
///
/// The `unit` pair additionally maps between the type's native value domain
/// and the unit interval (`u8` divides by 255), which is how cross-depth
/// conversions keep black at 0.0 and white at 1.0.
pub trait Pixel: Copy + PartialEq + Zero + 'static {
    const DEPTH: PixelDepth;

    /// Widens the component to `f64` in its native value domain.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` in the native value domain back to the component,
    /// applying the fixed rounding policy.
    fn from_f64(value: f64) -> Self;

    /// Widens the component to a unit-range `f64`.
    fn to_unit_f64(self) -> f64;

    /// Narrows a unit-range `f64` back to the component.
    fn from_unit_f64(value: f64) -> Self;
}

impl Pixel for u8 {
    const DEPTH: PixelDepth = PixelDepth::U8;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }

    #[inline(always)]
    fn to_unit_f64(self) -> f64 {
        f64::from(self) / 255.0
    }

    #[inline(always)]
    fn from_unit_f64(value: f64) -> Self {
        Self::from_f64(value * 255.0)
    }
}

impl Pixel for f32 {
    const DEPTH: PixelDepth = PixelDepth::F32;

    #[inline(always)]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline(always)]
    fn to_unit_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline(always)]
    fn from_unit_f64(value: f64) -> Self {
        value as f32
    }
}
