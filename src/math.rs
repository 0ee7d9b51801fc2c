//! Degree-based trigonometry for the sunrise/sunset almanac.

/// Normalizes a value to the range [0, `max`).
pub fn normalize(value: f64, max: f64) -> f64 {
    let normalized = value % max;
    if normalized < 0.0 {
        normalized + max
    } else {
        normalized
    }
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize(degrees, 360.0)
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

/// Arc tangent, returned in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Arc cosine, returned in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_hours() {
        assert_eq!(normalize(25.5, 24.0), 1.5);
        assert_eq!(normalize(-1.5, 24.0), 22.5);
        assert_eq!(normalize(-25.5, 24.0), 22.5);
        assert_eq!(normalize(12.0, 24.0), 12.0);
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!(sin_deg(0.0).abs() < EPSILON);
        assert!((sin_deg(90.0) - 1.0).abs() < EPSILON);
        assert!((cos_deg(60.0) - 0.5).abs() < EPSILON);
        assert!((tan_deg(45.0) - 1.0).abs() < EPSILON);
        assert!((atan_deg(1.0) - 45.0).abs() < EPSILON);
        assert!((acos_deg(0.0) - 90.0).abs() < EPSILON);
    }
}
