/// Floating point type used throughout the economy model.
pub type Real = f64;

/// True when `v` is a usable positive quantity (finite and > 0).
pub fn positive_finite(v: Real) -> bool {
    v.is_finite() && v > 0.0
}

/// Round to one decimal place. Recipe amounts are kept at tenth precision.
pub fn round_to_tenth(v: Real) -> Real {
    (v * 10.0).round() / 10.0
}
