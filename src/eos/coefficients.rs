//! Coefficient tables of the Jackett & McDougall (1995) polynomial fit.
//!
//! The tables are positional: index `i` multiplies the `i`-th term of the
//! published polynomial, in the order the terms appear in
//! [`crate::eos::jmd95`]. Pressure-dependent terms expect pressure in bar.

/// Density of fresh water at p = 0 (kg/m³), powers `T^0..T^5`.
pub const FW: [f64; 6] = [
    999.842594,
    6.793952e-02,
    -9.095290e-03,
    1.001685e-04,
    -1.120083e-06,
    6.536332e-09,
];

/// Salinity correction to the surface density.
///
/// `[0..=4]` multiply `S*T^0..T^4`, `[5..=7]` multiply `S^1.5*T^0..T^2`,
/// `[8]` multiplies `S^2`.
pub const SW: [f64; 9] = [
    8.244930e-01,
    -4.089900e-03,
    7.643800e-05,
    -8.246700e-07,
    5.387500e-09,
    -5.724660e-03,
    1.022700e-04,
    -1.654600e-06,
    4.831400e-04,
];

/// Secant bulk modulus of fresh water at p = 0 (bar), powers `T^0..T^4`.
pub const K_FW: [f64; 5] = [
    1.965933e04,
    1.444304e02,
    -1.706103e00,
    9.648704e-03,
    -4.190253e-05,
];

/// Salinity correction to the surface bulk modulus.
///
/// `[0..=3]` multiply `S*T^0..T^3`, `[4..=6]` multiply `S^1.5*T^0..T^2`.
pub const K_SW: [f64; 7] = [
    5.284855e01,
    -3.101089e-01,
    6.283263e-03,
    -5.084188e-05,
    3.886640e-01,
    9.085835e-03,
    -4.619924e-04,
];

/// Pressure dependence of the bulk modulus.
///
/// `[0..=3]` p*T^0..T^3, `[4..=6]` p*S*T^0..T^2, `[7]` p*S^1.5,
/// `[8..=10]` p²*T^0..T^2, `[11..=13]` p²*S*T^0..T^2.
pub const K_P: [f64; 14] = [
    3.186519e00,
    2.212276e-02,
    -2.984642e-04,
    1.956415e-06,
    6.704388e-03,
    -1.847318e-04,
    2.059331e-07,
    1.480266e-04,
    2.102898e-04,
    -1.202016e-05,
    1.394680e-07,
    -2.040237e-06,
    6.128773e-08,
    6.207323e-10,
];

/// Multiplier taking decibar to bar.
pub const DBAR_TO_BAR: f64 = 0.1;
