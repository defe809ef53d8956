//! Trigonometric functions taking and returning degrees.

/// Sine of an angle in degrees.
pub fn dsin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn dcos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn dtan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine in degrees. Returns NaN outside [-1, 1].
pub fn darcsin(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees. Returns NaN outside [-1, 1].
pub fn darccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Two-argument arctangent in degrees, range (-180, 180].
pub fn darctan2(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Arccotangent in degrees: `atan(1/x)`.
pub fn darccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}
