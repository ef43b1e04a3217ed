/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Batch conversion of a directory of `.qpoly` files to JSON.
//!
//! Only the top level of the input directory is scanned. The first file that
//! fails to read, parse or write aborts the whole batch.

mod paths;

pub use paths::output_file_name;

use crate::ast::Function;
use crate::diagnostics::ParseError;
use crate::parser::parse_function_in_source;
use serde::ser::Error as _;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use self::paths::list_inputs;

/// Extensions used to select inputs and name outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Extension (without dot) of the files to convert.
    pub input_extension: String,
    /// Extension (without dot) of the written files.
    pub output_extension: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_extension: "qpoly".to_string(),
            output_extension: "json".to_string(),
        }
    }
}

/// One converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of pieces in the parsed function.
    pub pieces: usize,
}

/// Outcome of [`convert_directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Converted files, in file-name order.
    pub converted: Vec<ConvertedFile>,
}

/// Errors produced by the batch driver.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Reading, listing or writing failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input file is not a well-formed piecewise function.
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    /// The parsed function could not be serialized.
    #[error("failed to serialize '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl BatchError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        BatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            BatchError::Io { path, .. }
            | BatchError::Parse { path, .. }
            | BatchError::Json { path, .. } => path,
        }
    }
}

/// Serializes a function as JSON indented by four spaces.
pub fn render_json(function: &Function) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    function.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}

/// Parses `input` and writes its JSON rendering to `output`.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertedFile, BatchError> {
    let source = fs::read_to_string(input).map_err(|source| BatchError::io(input, source))?;
    let function = parse_function_in_source(&source, &input.display().to_string()).map_err(
        |source| BatchError::Parse {
            path: input.to_path_buf(),
            source,
        },
    )?;
    let json = render_json(&function).map_err(|source| BatchError::Json {
        path: output.to_path_buf(),
        source,
    })?;
    fs::write(output, json).map_err(|source| BatchError::io(output, source))?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        pieces = function.pieces.len(),
        subdomains = function.subdomain_count(),
        "converted file"
    );
    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        pieces: function.pieces.len(),
    })
}

/// Converts every matching file directly inside `input_dir` into
/// `output_dir`, creating the latter if needed.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, BatchError> {
    let inputs = list_inputs(input_dir, options)?;
    fs::create_dir_all(output_dir).map_err(|source| BatchError::io(output_dir, source))?;

    let mut report = BatchReport::default();
    for (input, output_name) in inputs {
        let input_name = input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        info!("{input_name} -> {output_name}");
        let converted = convert_file(&input, &output_dir.join(&output_name))?;
        report.converted.push(converted);
    }

    info!(
        files = report.converted.len(),
        output_dir = %output_dir.display(),
        "batch conversion finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_function;

    #[test]
    fn renders_with_four_space_indent() {
        let function = parse_function("{ [s] -> 1 : s = 0 }").expect("parse");
        let json = render_json(&function).expect("render");
        let expected = r#"{
    "variables": [
        "s"
    ],
    "pieces": [
        {
            "formula": "1",
            "subdomains": [
                {
                    "extra variables": {},
                    "linear conditions": [
                        "s == 0"
                    ]
                }
            ]
        }
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn default_options_select_qpoly_files() {
        let options = BatchOptions::default();
        assert_eq!(options.input_extension, "qpoly");
        assert_eq!(options.output_extension, "json");
    }
}
