use fleet_core::prelude::Float;

/// A numeric kind a raw cell value is cast to.
pub trait CellValue: Copy + Send + Sync + 'static {
    /// A name of the kind used in error messages.
    const KIND: &'static str;

    /// Parses a raw value, returns `None` if it is not a valid value of the kind.
    fn parse_cell(raw: &str) -> Option<Self>;

    /// Multiplies value by the factor.
    fn scale(self, factor: Float) -> Self;
}

impl CellValue for i64 {
    const KIND: &'static str = "integer";

    fn parse_cell(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn scale(self, factor: Float) -> Self {
        if factor == 1. { self } else { (self as Float * factor).round() as i64 }
    }
}

impl CellValue for Float {
    const KIND: &'static str = "float";

    fn parse_cell(raw: &str) -> Option<Self> {
        // NOTE NaN and infinity are accepted by `str::parse`, but never valid in source tables
        raw.parse::<Float>().ok().filter(|value| value.is_finite())
    }

    fn scale(self, factor: Float) -> Self {
        self * factor
    }
}
