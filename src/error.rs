#[cfg(feature = "std")]
use thiserror::Error;

#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum AppError {
    #[cfg(feature = "cli")]
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --inputs-json: {source}")]
    ParseInputsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON for --assumptions-json: {source}")]
    ParseAssumptionsJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Invalid JSON in input document: {source}")]
    ParseCmdInputJson {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "cli")]
    #[error("Missing input data: provide --input or --inputs-json")]
    MissingInputData,

    #[error("Shape mismatch: '{operand}' has {found} elements, expected {expected}")]
    ShapeMismatch {
        operand: &'static str,
        expected: usize,
        found: usize,
    },
}

#[cfg(not(feature = "std"))]
#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    ShapeMismatch {
        operand: &'static str,
        expected: usize,
        found: usize,
    },
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_names_operand_and_lengths() {
        let err = AppError::ShapeMismatch {
            operand: "p",
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: 'p' has 2 elements, expected 3"
        );
    }
}
