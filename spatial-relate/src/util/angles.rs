/// Direction of the vector (dx, dy) in degrees, [0, 360)
pub fn direction_deg(dx: f64, dy: f64) -> f64 {
    normalize_deg(dy.atan2(dx).to_degrees())
}

/// Maps any angle (degrees) into [0, 360)
pub fn normalize_deg(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    //rem_euclid can round up to the modulus for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Maps any angle (degrees) into (-180, 180]
pub fn wrap_signed_deg(angle: f64) -> f64 {
    match normalize_deg(angle) {
        a if a > 180.0 => a - 360.0,
        a => a,
    }
}

/// Difference between two undirected directions (degrees), in [0, 90]
pub fn undirected_delta_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(180.0);
    d.min(180.0 - d).max(0.0)
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
