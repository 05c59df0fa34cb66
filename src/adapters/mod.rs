#[cfg(feature = "cli")]
pub mod cli;
pub mod teos10;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
pub fn run() -> Result<(), crate::error::AppError> {
    use crate::adapters::cli::{Args, parse_inputs};
    use crate::profile::compute_profile;

    let _ = env_logger::try_init();

    let args = Args::parse();
    let (inputs, ass) = parse_inputs(&args)?;

    let out = compute_profile(&inputs, &ass)?;
    log::debug!("computed {} samples", out.len());

    crate::adapters::cli::print_output(&out, &args)?;

    Ok(())
}
