//! TEOS-10 reference density, used to cross-check the JMD95 polynomial.

use gsw as gsw_teos10;

/// Absolute/Reference Salinity from Practical Salinity.
/// Note: This returns TEOS-10 Reference Salinity (SR) from SP and is used
/// as an approximation for Absolute Salinity (SA). For standard seawater
/// composition SR ≈ SA.
pub fn sa_from_sp(sp: f64) -> f64 {
    gsw_teos10::conversions::sr_from_sp(sp)
}

/// Conservative Temperature from potential temperature.
///
/// Identity approximation (CT ≈ θ); the two differ by well under 0.1 °C over
/// the oceanic range, which is below the JMD95 fit error this is compared to.
pub fn ct_from_pt(_sa: f64, pt: f64) -> f64 {
    pt
}

/// TEOS-10 in-situ density (kg/m³) for the same arguments as [`crate::rho`].
///
/// Returns NaN if the `gsw` library reports an error.
pub fn rho_teos10(sp: f64, pt: f64, p_dbar: f64) -> f64 {
    let sa = sa_from_sp(sp);
    let ct = ct_from_pt(sa, pt);
    gsw_teos10::volume::rho(sa, ct, p_dbar).unwrap_or(f64::NAN)
}
