use super::coefficients::{DBAR_TO_BAR, FW, K_FW, K_P, K_SW, SW};
use super::sqrt;

/// Density of seawater at zero pressure (kg/m³).
///
/// Fresh-water polynomial in `t` plus the salinity correction in `s`,
/// `s^1.5` and `s^2`.
pub fn surface_density(s: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let s3o2 = s * sqrt(s);

    let rho_fw = FW[0] + FW[1] * t + FW[2] * t2 + FW[3] * t3 + FW[4] * t4 + FW[5] * t4 * t;

    rho_fw
        + s * (SW[0] + SW[1] * t + SW[2] * t2 + SW[3] * t3 + SW[4] * t4)
        + s3o2 * (SW[5] + SW[6] * t + SW[7] * t2)
        + SW[8] * s * s
}

/// Secant bulk modulus (bar).
///
/// `p_bar` is pressure in **bar**; the density entry points convert from
/// dbar before calling this.
pub fn bulk_modulus(s: f64, t: f64, p_bar: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let s3o2 = s * sqrt(s);
    let p = p_bar;
    let p2 = p * p;

    // fresh water at the surface
    let k_fw = K_FW[0] + K_FW[1] * t + K_FW[2] * t2 + K_FW[3] * t3 + K_FW[4] * t4;

    // sea water at the surface
    let k_sw = s * (K_SW[0] + K_SW[1] * t + K_SW[2] * t2 + K_SW[3] * t3)
        + s3o2 * (K_SW[4] + K_SW[5] * t + K_SW[6] * t2);

    // sea water at pressure p
    let k_p = p * (K_P[0] + K_P[1] * t + K_P[2] * t2 + K_P[3] * t3)
        + p * s * (K_P[4] + K_P[5] * t + K_P[6] * t2)
        + p * s3o2 * K_P[7]
        + p2 * (K_P[8] + K_P[9] * t + K_P[10] * t2)
        + p2 * s * (K_P[11] + K_P[12] * t + K_P[13] * t2);

    k_fw + k_sw + k_p
}

/// In-situ density of seawater (kg/m³).
///
/// # Arguments
/// * `s` - Practical salinity [PSS-78]
/// * `t` - Potential temperature [°C]
/// * `p_dbar` - Pressure [dbar]
///
/// ```rust
/// let rho = jmd95_rs::rho(35.5, 3.0, 3000.0);
/// assert!((rho - 1041.83267).abs() < 1e-4);
/// ```
pub fn rho(s: f64, t: f64, p_dbar: f64) -> f64 {
    let p = DBAR_TO_BAR * p_dbar;

    let rho_s = surface_density(s, t);
    let bulk = bulk_modulus(s, t, p);

    rho_s / (1.0 - p / bulk)
}

/// Partial derivative of in-situ density with respect to potential
/// temperature (kg/m³/°C).
///
/// Closed-form differentiation of the surface density and bulk modulus
/// polynomials. The pressure term `3*K_P[3]*t` is kept as published, so the
/// result agrees with a numerical derivative of [`rho`] only to within a few
/// 1e-3 relative.
pub fn drhodt(s: f64, t: f64, p_dbar: f64) -> f64 {
    let p = DBAR_TO_BAR * p_dbar;
    let p2 = p * p;
    let t2 = t * t;
    let sqr = sqrt(s);

    let drdt0 = FW[1]
        + 2.0 * FW[2] * t
        + (3.0 * FW[3] + 4.0 * FW[4] * t + 5.0 * FW[5] * t2) * t2
        + (SW[1]
            + 2.0 * SW[2] * t
            + (3.0 * SW[3] + 4.0 * SW[4] * t) * t2
            + (SW[6] + 2.0 * SW[7] * t) * sqr)
            * s;

    let dkdt = K_FW[1]
        + 2.0 * K_FW[2] * t
        + (3.0 * K_FW[3] + 4.0 * K_FW[4] * t) * t2
        + p * (K_P[1] + 2.0 * K_P[2] * t + 3.0 * K_P[3] * t)
        + p2 * (K_P[9] + 2.0 * K_P[10] * t)
        + s * (K_SW[1]
            + 2.0 * K_SW[2] * t
            + 3.0 * K_SW[3] * t2
            + p * (K_P[5] + 2.0 * K_P[6] * t)
            + p2 * (K_P[12] + 2.0 * K_P[13] * t)
            + sqr * (K_SW[5] + 2.0 * K_SW[6] * t));

    let rho_s = surface_density(s, t);
    let bulk = bulk_modulus(s, t, p);
    let denomk = 1.0 / (bulk - p);

    denomk * (drdt0 * bulk - p * rho_s * dkdt * denomk)
}

/// Partial derivative of in-situ density with respect to practical
/// salinity (kg/m³/psu).
pub fn drhods(s: f64, t: f64, p_dbar: f64) -> f64 {
    let p = DBAR_TO_BAR * p_dbar;
    let p2 = p * p;
    let t2 = t * t;
    let t3 = t2 * t;
    let sqr = sqrt(s);

    let work1 = SW[0] + SW[1] * t + (SW[2] + SW[3] * t + SW[4] * t2) * t2;
    let work2 = sqr * (SW[5] + SW[6] * t + SW[7] * t2);
    // K_P[13] multiplies t3 here, as published
    let work3 = K_SW[0]
        + K_SW[1] * t
        + (K_SW[2] + K_SW[3] * t) * t2
        + p * (K_P[4] + K_P[5] * t + K_P[6] * t2)
        + p2 * (K_P[11] + K_P[12] * t + K_P[13] * t3);
    let work4 = sqr * (K_SW[4] + K_SW[5] * t + K_SW[6] * t2 + K_P[7] * p);

    let bulk = bulk_modulus(s, t, p);
    let denomk = 1.0 / (bulk - p);

    let drds0 = 2.0 * SW[8] * s + work1 + 1.5 * work2;
    let dkds = work3 + 1.5 * work4;
    let rho_s = surface_density(s, t);

    denomk * (drds0 * bulk - p * rho_s * dkds * denomk)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_water_near_four_degrees_is_about_a_tonne() {
        let r = rho(0.0, 4.0, 0.0);
        assert!((r - 999.975).abs() < 1e-2, "rho = {r}");
    }

    #[test]
    fn bulk_modulus_at_surface_is_pressure_free() {
        let k0 = bulk_modulus(35.0, 10.0, 0.0);
        let k1 = bulk_modulus(35.0, 10.0, 100.0);
        assert!(k1 > k0);
        // surface value is the fresh + salinity polynomials only
        assert!(k0 > 20_000.0 && k0 < 24_000.0, "k0 = {k0}");
    }

    #[test]
    fn negative_salinity_is_nan_not_a_panic() {
        assert!(surface_density(-1.0, 10.0).is_nan());
        assert!(rho(-1.0, 10.0, 100.0).is_nan());
        assert!(drhodt(-1.0, 10.0, 100.0).is_nan());
        assert!(drhods(-1.0, 10.0, 100.0).is_nan());
    }

    #[test]
    fn extrapolates_outside_fitted_range() {
        assert!(rho(35.0, 10.0, -500.0).is_finite());
        assert!(rho(50.0, 45.0, 12_000.0).is_finite());
    }

    #[test]
    fn pressure_increases_density() {
        let shallow = rho(35.0, 10.0, 0.0);
        let deep = rho(35.0, 10.0, 4000.0);
        assert!(deep > shallow + 15.0);
    }
}
