use log::debug;

use crate::adapters::teos10::rho_teos10;
use crate::broadcast::map;
use crate::eos::jmd95;
use crate::error::AppError;
use crate::models::{Assumptions, Inputs, Profile};

/// Evaluate density (and, per `ass`, derivatives and TEOS-10 density) for
/// every position of the broadcast inputs.
///
/// Pressure falls back to `ass.pressure_dbar` when `inputs.p` is absent.
/// Non-finite results are passed through unchanged.
pub fn compute_profile(inputs: &Inputs, ass: &Assumptions) -> Result<Profile, AppError> {
    let p = inputs.pressure_or_default(ass);
    let (s, t, p) = (
        inputs.s.as_operand(),
        inputs.t.as_operand(),
        p.as_operand(),
    );

    let rho = map(jmd95::rho, s, t, p)?;
    debug!(
        "evaluated {} samples (derivatives: {}, teos10: {})",
        rho.len(),
        ass.derivatives,
        ass.teos10
    );

    let (drhodt, drhods) = if ass.derivatives {
        (
            Some(map(jmd95::drhodt, s, t, p)?),
            Some(map(jmd95::drhods, s, t, p)?),
        )
    } else {
        (None, None)
    };
    let rho_teos10 = if ass.teos10 {
        Some(map(rho_teos10, s, t, p)?)
    } else {
        None
    };

    Ok(Profile {
        rho,
        drhodt,
        drhods,
        rho_teos10,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn optional_columns_follow_assumptions() {
        let inputs = Inputs {
            s: Field::Array(vec![34.0, 35.0, 36.0]),
            t: Field::Scalar(10.0),
            p: Some(Field::Scalar(500.0)),
        };
        let ass = Assumptions {
            derivatives: false,
            ..Default::default()
        };
        let out = compute_profile(&inputs, &ass).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.drhodt.is_none() && out.drhods.is_none());
        assert!(out.rho_teos10.is_none());

        let out = compute_profile(&inputs, &Assumptions::default()).unwrap();
        let drhods = out.drhods.unwrap();
        assert_eq!(drhods.len(), 3);
        assert_eq!(drhods[1], jmd95::drhods(35.0, 10.0, 500.0));
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let inputs = Inputs {
            s: Field::Array(vec![34.0, 35.0]),
            t: Field::Array(vec![1.0, 2.0, 3.0]),
            p: None,
        };
        let err = compute_profile(&inputs, &Assumptions::default()).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch { operand: "t", .. }));
    }

    #[test]
    fn single_element_column_stretches() {
        let inputs = Inputs {
            s: Field::Array(vec![35.0]),
            t: Field::Array(vec![1.0, 2.0, 3.0]),
            p: None,
        };
        let out = compute_profile(&inputs, &Assumptions::default()).unwrap();
        assert_eq!(out.rho, vec![
            jmd95::rho(35.0, 1.0, 0.0),
            jmd95::rho(35.0, 2.0, 0.0),
            jmd95::rho(35.0, 3.0, 0.0),
        ]);
    }
}
