#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::broadcast::Operand;
use crate::eos::jmd95;

/// A single seawater sample: practical salinity, potential temperature (°C)
/// and pressure (dbar).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub s: f64,
    pub t: f64,
    pub p: f64,
}

impl State {
    pub fn new(s: f64, t: f64, p: f64) -> Self {
        Self { s, t, p }
    }

    pub fn rho(&self) -> f64 {
        jmd95::rho(self.s, self.t, self.p)
    }

    pub fn drhodt(&self) -> f64 {
        jmd95::drhodt(self.s, self.t, self.p)
    }

    pub fn drhods(&self) -> f64 {
        jmd95::drhods(self.s, self.t, self.p)
    }
}

/// A scalar or a list of values in an input document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Field {
    pub fn as_operand(&self) -> Operand<'_, f64> {
        match self {
            Field::Scalar(x) => Operand::Scalar(*x),
            Field::Array(xs) => Operand::Slice(xs.as_slice()),
        }
    }
}

impl From<f64> for Field {
    fn from(x: f64) -> Self {
        Field::Scalar(x)
    }
}

impl From<Vec<f64>> for Field {
    fn from(xs: Vec<f64>) -> Self {
        Field::Array(xs)
    }
}

/// Salinity, temperature and (optionally) pressure columns to evaluate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Inputs {
    pub s: Field,
    pub t: Field,
    #[serde(default)]
    pub p: Option<Field>,
}

impl Inputs {
    /// Pressure column, falling back to `ass.pressure_dbar` when absent.
    pub fn pressure_or_default(&self, ass: &Assumptions) -> Field {
        self.p
            .clone()
            .unwrap_or(Field::Scalar(ass.pressure_dbar))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Pressure (dbar) used when the inputs carry no `p`.
    pub pressure_dbar: f64,
    /// Also compute ∂ρ/∂T and ∂ρ/∂S.
    pub derivatives: bool,
    /// Also compute TEOS-10 density for comparison.
    pub teos10: bool,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            pressure_dbar: 0.0,
            derivatives: true,
            teos10: false,
        }
    }
}

/// Evaluated columns, in input order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Profile {
    pub rho: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drhodt: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drhods: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rho_teos10: Option<Vec<f64>>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.rho.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rho.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_methods_match_free_functions() {
        let st = State::new(35.5, 3.0, 3000.0);
        assert_eq!(st.rho(), jmd95::rho(35.5, 3.0, 3000.0));
        assert_eq!(st.drhodt(), jmd95::drhodt(35.5, 3.0, 3000.0));
        assert_eq!(st.drhods(), jmd95::drhods(35.5, 3.0, 3000.0));
    }

    #[test]
    fn missing_pressure_uses_assumption() {
        let inputs = Inputs {
            s: Field::Scalar(35.0),
            t: Field::Array(vec![1.0, 2.0]),
            p: None,
        };
        let ass = Assumptions {
            pressure_dbar: 250.0,
            ..Default::default()
        };
        assert_eq!(inputs.pressure_or_default(&ass), Field::Scalar(250.0));
    }
}
