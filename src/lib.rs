#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adapters;
pub mod broadcast;
pub mod eos;
pub mod error;
pub mod models;
pub mod profile;

pub use crate::adapters::teos10::rho_teos10;
pub use crate::broadcast::{
    Element, Operand, drhods_elementwise, drhodt_elementwise, map, map_into, rho_elementwise,
};
pub use crate::eos::jmd95::{bulk_modulus, drhods, drhodt, rho, surface_density};
pub use crate::error::AppError;
pub use crate::models::{Assumptions, Field, Inputs, Profile, State};
pub use crate::profile::compute_profile;
