//! Equation of state of seawater after Jackett & McDougall (1995).
//!
//! Units used throughout:
//! - salinity: practical salinity (PSS-78)
//! - temperature: potential temperature, °C
//! - pressure: dbar at the public entry points, bar inside the bulk modulus
//! - density: kg/m³
//!
//! Nothing in here validates its input. Values outside the fitted range
//! (S 0..42, T -2..40, p 0..10000 dbar) are extrapolated, and negative
//! salinity or a vanishing bulk modulus produce NaN or infinity.

pub mod coefficients;
pub mod jmd95;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("enable either the `std` or the `libm` feature");

#[inline]
pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.sqrt()
    }

    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::sqrt(x)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    #[test]
    fn sqrt_shim_matches_hardware_sqrt() {
        for x in [0.0, 1.0, 2.0, 35.5, 42.0] {
            assert_eq!(super::sqrt(x), f64::sqrt(x));
        }
        assert!(super::sqrt(-1.0).is_nan());
    }
}
