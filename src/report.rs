
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use crate::errors::*;
use crate::kernel::{Kernel, Weight};

/// How a computed kernel is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Raw table, blank line, normalized table.
    Text,
    /// `const` declarations for a CPU blur.
    Rust,
    /// A weight array for a fragment shader.
    Glsl,
    /// The expanded 5x5 neighborhood.
    Grid,
    Json,
}

impl Format {
    pub const NAMES: [&'static str; 5] = ["text", "rust", "glsl", "grid", "json"];

    pub fn name(&self) -> &'static str {
        match *self {
            Format::Text => "text",
            Format::Rust => "rust",
            Format::Glsl => "glsl",
            Format::Grid => "grid",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown format '{}' (expected one of: {})",
               self.0, Format::NAMES.join(", "))
    }
}

impl ::std::error::Error for ParseFormatError {}

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> ::std::result::Result<Format, ParseFormatError> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "rust" => Ok(Format::Rust),
            "glsl" => Ok(Format::Glsl),
            "grid" => Ok(Format::Grid),
            "json" => Ok(Format::Json),
            _ => Err(ParseFormatError(s.to_owned())),
        }
    }
}

// Constant name used by the CPU blur for a class label.
fn const_name(label: &str) -> String {
    match label {
        "corner" => "OUTER_CORNER_WEIGHT".to_owned(),
        _ => format!("{}_WEIGHT", label.to_ascii_uppercase()),
    }
}

fn write_table<W: Write>(w: &mut W, table: &[Weight]) -> Result<()> {
    for weight in table {
        writeln!(w, "{} = {}", weight.label, weight.value)?;
    }
    Ok(())
}

/// Writes `kernel` to `w` in the requested format.
pub fn write_kernel<W: Write>(w: &mut W, kernel: &Kernel, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            write_table(w, &kernel.raw)?;
            writeln!(w)?;
            write_table(w, &kernel.normalized)?;
        }
        Format::Rust => {
            writeln!(w, "// sigma = {}", kernel.sigma)?;
            for weight in &kernel.normalized {
                writeln!(w, "pub const {}: f32 = {:?};",
                         const_name(weight.label), weight.value as f32)?;
            }
        }
        Format::Glsl => {
            let values: Vec<String> = kernel.normalized.iter()
                .map(|weight| format!("{:?}", weight.value as f32))
                .collect();
            let labels: Vec<&str> = kernel.normalized.iter()
                .map(|weight| weight.label)
                .collect();
            writeln!(w, "// sigma = {}; {}", kernel.sigma, labels.join(", "))?;
            writeln!(w, "const float KERNEL_WEIGHTS[{}] = float[{}]({});",
                     values.len(), values.len(), values.join(", "))?;
        }
        Format::Grid => {
            for row in kernel.grid().iter() {
                let cells: Vec<String> = row.iter()
                    .map(|v| format!("{:.10}", v))
                    .collect();
                writeln!(w, "{}", cells.join(" "))?;
            }
        }
        Format::Json => {
            ::serde_json::to_writer_pretty(&mut *w, kernel)?;
            writeln!(w)?;
        }
    }
    Ok(())
}
