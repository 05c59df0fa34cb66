//! Element-wise application of scalar kernels over scalars and slices.
//!
//! Any `fn(f64, f64, f64) -> f64` can be mapped here; the kernels in
//! [`crate::eos::jmd95`] know nothing about this module.
//!
//! Broadcasting rules (1-D only):
//! - a scalar operand, or a slice of length 1, repeats for every position
//! - all other slice operands must have the same length
//! - if no operand fixes a length the result has length 1
//!
//! `f32` elements are widened to `f64`, evaluated, and rounded back once.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use log::trace;

use crate::eos::jmd95;
use crate::error::AppError;

/// Floating-point element types accepted by the broadcast layer.
pub trait Element: Copy {
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
}

impl Element for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Element for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

/// One argument of a broadcast call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<'a, E> {
    Scalar(E),
    Slice(&'a [E]),
}

impl<E: Element> Operand<'_, E> {
    /// Number of elements, or `None` for a scalar.
    pub fn extent(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Slice(xs) => Some(xs.len()),
        }
    }

    #[inline]
    fn get(&self, i: usize) -> f64 {
        match self {
            Operand::Scalar(x) => x.to_f64(),
            Operand::Slice([x]) => x.to_f64(),
            Operand::Slice(xs) => xs[i].to_f64(),
        }
    }
}

macro_rules! operand_from {
    ($($ty:ty),*) => {$(
        impl From<$ty> for Operand<'_, $ty> {
            fn from(x: $ty) -> Self {
                Operand::Scalar(x)
            }
        }

        impl<'a> From<&'a [$ty]> for Operand<'a, $ty> {
            fn from(xs: &'a [$ty]) -> Self {
                Operand::Slice(xs)
            }
        }

        impl<'a, const N: usize> From<&'a [$ty; N]> for Operand<'a, $ty> {
            fn from(xs: &'a [$ty; N]) -> Self {
                Operand::Slice(&xs[..])
            }
        }

        impl<'a> From<&'a Vec<$ty>> for Operand<'a, $ty> {
            fn from(xs: &'a Vec<$ty>) -> Self {
                Operand::Slice(xs.as_slice())
            }
        }
    )*};
}

operand_from!(f32, f64);

/// Resolve the common length of named operand lengths (`None` = scalar).
///
/// Length-1 slices stretch to the length of the others.
pub fn broadcast_len(lens: &[(&'static str, Option<usize>)]) -> Result<usize, AppError> {
    let mut resolved: Option<usize> = None;
    for &(operand, len) in lens {
        match (resolved, len) {
            (_, None) | (_, Some(1)) => {}
            (None, Some(n)) => resolved = Some(n),
            (Some(expected), Some(found)) if expected != found => {
                return Err(AppError::ShapeMismatch {
                    operand,
                    expected,
                    found,
                });
            }
            (Some(_), Some(_)) => {}
        }
    }
    Ok(resolved.unwrap_or(1))
}

fn resolve<E: Element>(
    s: &Operand<'_, E>,
    t: &Operand<'_, E>,
    p: &Operand<'_, E>,
) -> Result<usize, AppError> {
    broadcast_len(&[("s", s.extent()), ("t", t.extent()), ("p", p.extent())])
}

// `out` has already been checked against the broadcast length.
fn fill<E, F>(f: F, s: Operand<'_, E>, t: Operand<'_, E>, p: Operand<'_, E>, out: &mut [E])
where
    E: Element,
    F: Fn(f64, f64, f64) -> f64,
{
    trace!("broadcast over {} elements", out.len());
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = E::from_f64(f(s.get(i), t.get(i), p.get(i)));
    }
}

/// Apply `f` position-wise over the broadcast of `s`, `t`, `p`, writing into `out`.
///
/// `out` must already have the broadcast length.
pub fn map_into<E, F>(
    f: F,
    s: Operand<'_, E>,
    t: Operand<'_, E>,
    p: Operand<'_, E>,
    out: &mut [E],
) -> Result<(), AppError>
where
    E: Element,
    F: Fn(f64, f64, f64) -> f64,
{
    let n = resolve(&s, &t, &p)?;
    if out.len() != n {
        return Err(AppError::ShapeMismatch {
            operand: "out",
            expected: n,
            found: out.len(),
        });
    }
    fill(f, s, t, p, out);
    Ok(())
}

/// Apply `f` position-wise and collect the results.
pub fn map<'a, E, F>(
    f: F,
    s: impl Into<Operand<'a, E>>,
    t: impl Into<Operand<'a, E>>,
    p: impl Into<Operand<'a, E>>,
) -> Result<Vec<E>, AppError>
where
    E: Element + 'a,
    F: Fn(f64, f64, f64) -> f64,
{
    let (s, t, p) = (s.into(), t.into(), p.into());
    let n = resolve(&s, &t, &p)?;
    let mut out = Vec::with_capacity(n);
    out.resize(n, E::from_f64(0.0));
    fill(f, s, t, p, &mut out);
    Ok(out)
}

/// [`jmd95::rho`] over broadcast operands.
pub fn rho_elementwise<'a, E: Element + 'a>(
    s: impl Into<Operand<'a, E>>,
    t: impl Into<Operand<'a, E>>,
    p: impl Into<Operand<'a, E>>,
) -> Result<Vec<E>, AppError> {
    map(jmd95::rho, s, t, p)
}

/// [`jmd95::drhodt`] over broadcast operands.
pub fn drhodt_elementwise<'a, E: Element + 'a>(
    s: impl Into<Operand<'a, E>>,
    t: impl Into<Operand<'a, E>>,
    p: impl Into<Operand<'a, E>>,
) -> Result<Vec<E>, AppError> {
    map(jmd95::drhodt, s, t, p)
}

/// [`jmd95::drhods`] over broadcast operands.
pub fn drhods_elementwise<'a, E: Element + 'a>(
    s: impl Into<Operand<'a, E>>,
    t: impl Into<Operand<'a, E>>,
    p: impl Into<Operand<'a, E>>,
) -> Result<Vec<E>, AppError> {
    map(jmd95::drhods, s, t, p)
}
