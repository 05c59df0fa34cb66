use clap::Parser;
use log::debug;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{Assumptions, Inputs, Profile};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater density after Jackett & McDougall (1995), optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with inputs and optional assumptions; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for inputs (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for assumptions (optional, supplements --inputs-json)"
    )]
    assumptions_json: Option<String>,
}

fn parse_inline_inputs(
    inputs_json: &str,
    assumptions_json: Option<&String>,
) -> Result<(Inputs, Assumptions), AppError> {
    let inputs: Inputs =
        serde_json::from_str(inputs_json).map_err(|source| AppError::ParseInputsJson { source })?;

    let assumptions = match assumptions_json {
        Some(s) => serde_json::from_str::<Assumptions>(s)
            .map_err(|source| AppError::ParseAssumptionsJson { source })?,
        None => Assumptions::default(),
    };

    Ok((inputs, assumptions))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Inputs, Assumptions), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((parsed.inputs, parsed.assumptions.unwrap_or_default()))
}

pub fn parse_inputs(args: &Args) -> Result<(Inputs, Assumptions), AppError> {
    match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => {
            debug!("reading inputs from --inputs-json");
            parse_inline_inputs(inputs_json, args.assumptions_json.as_ref())
        }
        (None, Some(path)) if path == "-" => {
            debug!("reading input document from stdin");
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            debug!("reading input document from {path}");
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

#[derive(serde::Deserialize)]
struct CmdInput {
    inputs: Inputs,
    #[serde(default)]
    assumptions: Option<Assumptions>,
}

pub fn print_output(out: &Profile, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    for i in 0..out.len() {
        if out.len() > 1 {
            println!("[{i}]");
        }
        println!("rho: {:.5} kg/m^3", out.rho[i]);
        if let Some(d) = &out.drhodt {
            println!("drho/dT: {:.5} kg/m^3/degC", d[i]);
        }
        if let Some(d) = &out.drhods {
            println!("drho/dS: {:.5} kg/m^3/psu", d[i]);
        }
        if let Some(r) = &out.rho_teos10 {
            println!("rho (TEOS-10): {:.5} kg/m^3", r[i]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn input_document_without_assumptions_uses_defaults() {
        let (inputs, ass) =
            parse_cmd_input_doc(r#"{"inputs": {"s": 35.5, "t": [3.0, 4.0], "p": 3000}}"#).unwrap();
        assert_eq!(inputs.s, Field::Scalar(35.5));
        assert_eq!(inputs.t, Field::Array(vec![3.0, 4.0]));
        assert_eq!(inputs.p, Some(Field::Scalar(3000.0)));
        assert!(ass.derivatives);
        assert!(!ass.teos10);
    }

    #[test]
    fn partial_assumptions_fill_in_defaults() {
        let (_, ass) = parse_inline_inputs(
            r#"{"s": 35.0, "t": 10.0}"#,
            Some(&r#"{"pressure_dbar": 1000.0}"#.to_string()),
        )
        .unwrap();
        assert_eq!(ass.pressure_dbar, 1000.0);
        assert!(ass.derivatives);
    }
}
