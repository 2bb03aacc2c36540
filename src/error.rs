use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from invalid pipeline input or parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    InvalidDimensions(String),
    InvalidKernel(String),
    EmptyGraph,
    Image(String),
}

impl Error for PaletteError {}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            PaletteError::InvalidDimensions(msg) => format!("Invalid grid dimensions: {msg}"),
            PaletteError::InvalidKernel(msg) => format!("Invalid smoothing kernel: {msg}"),
            PaletteError::EmptyGraph => String::from("The colour graph has no vertices"),
            PaletteError::Image(msg) => format!("Image decode/encode failed: {msg}"),
        };
        write!(f, "{message}")
    }
}
