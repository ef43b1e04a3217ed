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

//! Input discovery and output naming for batch conversion.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BatchError, BatchOptions};

/// Returns the output file name for `file_name`, or `None` when the name does
/// not end with `.<input extension>`.
///
/// ```
/// use barvinok_qpoly::{output_file_name, BatchOptions};
///
/// let options = BatchOptions::default();
/// assert_eq!(output_file_name("111.qpoly", &options).as_deref(), Some("111.json"));
/// assert_eq!(output_file_name("notes.txt", &options), None);
/// ```
pub fn output_file_name(file_name: &str, options: &BatchOptions) -> Option<String> {
    let suffix = format!(".{}", options.input_extension);
    let stem = file_name.strip_suffix(suffix.as_str())?;
    Some(format!("{stem}.{}", options.output_extension))
}

/// Lists regular files directly inside `dir` that carry the input extension,
/// paired with their output file names and sorted by path.
///
/// Subdirectories are never entered. Names that are not valid UTF-8 are
/// skipped.
pub(super) fn list_inputs(
    dir: &Path,
    options: &BatchOptions,
) -> Result<Vec<(PathBuf, String)>, BatchError> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| BatchError::io(dir, source))? {
        let entry = entry.map_err(|source| BatchError::io(dir, source))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(output_name) = entry
            .file_name()
            .to_str()
            .and_then(|name| output_file_name(name, options))
        else {
            continue;
        };
        inputs.push((path, output_name));
    }
    inputs.sort();
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extensions() {
        let options = BatchOptions {
            input_extension: "txt".to_string(),
            output_extension: "out.json".to_string(),
        };
        assert_eq!(
            output_file_name("a.b.txt", &options).as_deref(),
            Some("a.b.out.json")
        );
        assert_eq!(output_file_name("a.qpoly", &options), None);
    }

    #[test]
    fn bare_extension_gives_empty_stem() {
        let options = BatchOptions::default();
        assert_eq!(output_file_name(".qpoly", &options).as_deref(), Some(".json"));
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let options = BatchOptions::default();
        assert_eq!(output_file_name("3.QPOLY", &options), None);
    }
}
