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

//! Batch conversion over temporary directories.

use barvinok_qpoly::{convert_directory, convert_file, BatchError, BatchOptions, Function};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write input");
}

fn read_function(path: &Path) -> Function {
    let text = fs::read_to_string(path).expect("read output");
    serde_json::from_str(&text).expect("valid json")
}

#[test]
fn converts_matching_files_only() {
    let input = TempDir::new().expect("tempdir");
    let output = TempDir::new().expect("tempdir");
    write(input.path(), "3.qpoly", "{ [s] -> 1 : s = 0 }");
    write(
        input.path(),
        "111.qpoly",
        "{ [b1, s] -> (2/3 * b1 - floor((b1)/2)) :\nexists (e0 = floor((b1)/3): 3e0 = b1 and s >= b1) }",
    );
    write(input.path(), "README.txt", "not a function");
    fs::create_dir(input.path().join("nested.qpoly")).expect("mkdir");
    write(&input.path().join("nested.qpoly"), "4.qpoly", "{ [s] -> 1 : s = 0 }");

    let report =
        convert_directory(input.path(), output.path(), &BatchOptions::default()).expect("batch");

    let names: Vec<String> = report
        .converted
        .iter()
        .map(|file| file.output.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["111.json", "3.json"]);

    let mut written: Vec<String> = fs::read_dir(output.path())
        .expect("list output")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
        .collect();
    written.sort();
    assert_eq!(written, vec!["111.json", "3.json"]);

    let function = read_function(&output.path().join("111.json"));
    assert_eq!(function.variables, vec!["b1", "s"]);
    assert_eq!(
        function.pieces[0].subdomains[0].linear_conditions,
        vec!["3 * e0 == b1", "s >= b1"]
    );
    assert_eq!(report.converted[0].pieces, 1);
}

#[test]
fn creates_missing_output_directory() {
    let input = TempDir::new().expect("tempdir");
    let output = TempDir::new().expect("tempdir");
    let target = output.path().join("all-qpoly-json");
    write(input.path(), "1.qpoly", "{ [s] -> 1 : s = 0 }");

    convert_directory(input.path(), &target, &BatchOptions::default()).expect("batch");
    assert!(target.join("1.json").is_file());
}

#[test]
fn custom_extensions_are_honoured() {
    let input = TempDir::new().expect("tempdir");
    let output = TempDir::new().expect("tempdir");
    write(input.path(), "a.barvinok", "{ [s] -> 1 : s = 0 }");
    write(input.path(), "b.qpoly", "{ [s] -> 1 : s = 0 }");

    let options = BatchOptions {
        input_extension: "barvinok".to_string(),
        output_extension: "out".to_string(),
    };
    let report = convert_directory(input.path(), output.path(), &options).expect("batch");
    assert_eq!(report.converted.len(), 1);
    assert!(output.path().join("a.out").is_file());
}

#[test]
fn malformed_file_aborts_the_batch() {
    let input = TempDir::new().expect("tempdir");
    let output = TempDir::new().expect("tempdir");
    write(input.path(), "1.qpoly", "{ [s] -> 1 : s = 0 }");
    write(input.path(), "2.qpoly", "{ [s] -> 1 : s = 0; [t] -> 2 : t = 1 }");
    write(input.path(), "3.qpoly", "{ [s] -> 1 : s = 0 }");

    let err = convert_directory(input.path(), output.path(), &BatchOptions::default())
        .expect_err("must fail");
    assert!(matches!(err, BatchError::Parse { .. }));
    assert!(err.path().ends_with("2.qpoly"));
    assert!(err.to_string().contains("inconsistent variable lists"));

    // Files sorted before the failure are already written; later ones are not.
    assert!(output.path().join("1.json").is_file());
    assert!(!output.path().join("3.json").exists());
}

#[test]
fn missing_input_directory_is_io_error() {
    let output = TempDir::new().expect("tempdir");
    let missing = output.path().join("does-not-exist");
    let err = convert_directory(&missing, output.path(), &BatchOptions::default())
        .expect_err("must fail");
    assert!(matches!(err, BatchError::Io { .. }));
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn convert_file_writes_single_output() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("5.qpoly");
    let output = dir.path().join("5.json");
    fs::write(&input, "{ [s] -> s : s >= 0 }").expect("write");

    let converted = convert_file(&input, &output).expect("convert");
    assert_eq!(converted.pieces, 1);
    let function = read_function(&output);
    assert_eq!(function.pieces[0].formula, "s");
    assert_eq!(function.pieces[0].subdomains[0].linear_conditions, vec!["s >= 0"]);
}
