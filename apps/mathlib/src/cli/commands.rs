//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::OutputMode;
use crate::settings::Settings;
use mathlib_core::formats::MAX_PERSISTENCE_PAYLOAD_SIZE;
use mathlib_core::primitives::MAX_BATCH_LENGTH;
use mathlib_core::{
    Evaluator, MathError, MathValue, MatrixValue, Operation, VectorValue, values_from_bytes,
    values_to_bytes,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE VALIDATION
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), MathError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| MathError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(MathError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, MathError> {
    let canonical = path.canonicalize().map_err(|e| {
        MathError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(MathError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Resolve an output path against its canonical parent directory.
fn validate_output_path(path: &Path) -> Result<PathBuf, MathError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        MathError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(MathError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| MathError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

/// Read a whole file after path and size checks.
fn read_checked(path: &Path, max_size: u64) -> Result<Vec<u8>, MathError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max_size)?;
    std::fs::read(&validated).map_err(|e| MathError::IoError(format!("Read file: {}", e)))
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

/// Parse a comma-separated list of floats such as `1, -2.5,3`.
///
/// A single trailing comma is accepted; any other empty item is an error.
pub fn parse_floats(text: &str) -> Result<Vec<f32>, MathError> {
    let trimmed = text.trim();
    let body = trimmed.strip_suffix(',').unwrap_or(trimmed);
    body.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(i, s)| {
            if s.is_empty() {
                return Err(MathError::InvalidParameter(format!(
                    "empty value at position {} in '{}'",
                    i, text
                )));
            }
            s.parse::<f32>()
                .map_err(|_| MathError::InvalidParameter(format!("'{}' is not a number", s)))
        })
        .collect()
}

fn parse_vector(text: &str) -> Result<VectorValue, MathError> {
    VectorValue::from_slice(&parse_floats(text)?)
}

fn parse_matrix(text: &str) -> Result<MatrixValue, MathError> {
    MatrixValue::from_slice(&parse_floats(text)?)
}

fn required<T>(value: Option<T>, op: &str, flag: &str) -> Result<T, MathError> {
    value.ok_or_else(|| MathError::InvalidParameter(format!("'{}' requires --{}", op, flag)))
}

/// Build a vector [`Operation`] from command-line arguments.
pub fn build_vector_op(
    op: &str,
    a: &str,
    b: Option<&str>,
    scalar: Option<f32>,
    max: Option<f32>,
) -> Result<Operation, MathError> {
    let a = parse_vector(a)?;
    let second = || required(b, op, "b").and_then(parse_vector);
    let param = || required(scalar, op, "scalar");

    let operation = match op {
        "length" => Operation::Length { a },
        "length2" => Operation::Length2 { a },
        "normalize" => Operation::Normalize { a },
        "dot" => Operation::Dot { a, b: second()? },
        "cross" => Operation::Cross { a, b: second()? },
        "distance" => Operation::Distance { a, b: second()? },
        "lerp" => Operation::Lerp {
            a,
            b: second()?,
            alpha: param()?,
        },
        "limit" => Operation::Limit { a, limit: param()? },
        "clamp" => Operation::Clamp {
            a,
            min: param()?,
            max: required(max, op, "max")?,
        },
        "collinear" => Operation::Collinear { a, b: second()? },
        "orthogonal" => Operation::Orthogonal { a, b: second()? },
        _ => {
            return Err(MathError::InvalidParameter(format!(
                "Unknown vector operation: {}. Use: length, length2, normalize, dot, cross, \
                 distance, lerp, limit, clamp, collinear, orthogonal",
                op
            )));
        }
    };
    Ok(operation)
}

/// Build a matrix [`Operation`] from command-line arguments.
pub fn build_matrix_op(
    op: &str,
    a: &str,
    b: Option<&str>,
    vector: Option<&str>,
) -> Result<Operation, MathError> {
    let m = parse_matrix(a)?;

    let operation = match op {
        "determinant" => Operation::Determinant { m },
        "inverse" => Operation::Inverse { m },
        "transpose" => Operation::Transpose { m },
        "multiply" => Operation::Multiply {
            a: m,
            b: parse_matrix(required(b, op, "b")?)?,
        },
        "transform" => Operation::Transform {
            m,
            v: parse_vector(required(vector, op, "vector")?)?,
        },
        _ => {
            return Err(MathError::InvalidParameter(format!(
                "Unknown matrix operation: {}. Use: determinant, inverse, transpose, multiply, \
                 transform",
                op
            )));
        }
    };
    Ok(operation)
}

/// Load and parse a JSON operations file.
pub fn load_operations(path: &Path, max_size: u64) -> Result<Vec<Operation>, MathError> {
    let contents = read_checked(path, max_size)?;
    let ops: Vec<Operation> = serde_json::from_slice(&contents)
        .map_err(|e| MathError::DeserializationError(format!("Invalid operations file: {}", e)))?;

    if ops.len() > MAX_BATCH_LENGTH {
        return Err(MathError::InvalidParameter(format!(
            "Operation count {} exceeds maximum allowed {}",
            ops.len(),
            MAX_BATCH_LENGTH
        )));
    }
    Ok(ops)
}

// =============================================================================
// OUTPUT FORMATTING
// =============================================================================

fn format_floats(values: &[f32], precision: usize) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect();
    format!("[{}]", parts.join(", "))
}

/// Render a result for text output with a fixed number of decimals.
pub fn format_value(value: &MathValue, precision: usize) -> String {
    match value {
        MathValue::Scalar(s) => format!("{:.*}", precision, s),
        MathValue::Bool(b) => b.to_string(),
        MathValue::Vector(v) => format_floats(&v.to_vec(), precision),
        MathValue::Matrix(m) => {
            let rows: Vec<String> = m
                .values()
                .chunks(m.dimension())
                .map(|row| format_floats(row, precision))
                .collect();
            format!("[{}]", rows.join(", "))
        }
    }
}

fn print_results(
    settings: &Settings,
    mode: OutputMode,
    ops: &[Operation],
    results: &[MathValue],
) -> Result<(), MathError> {
    if mode.json {
        let entries: Vec<serde_json::Value> = ops
            .iter()
            .zip(results)
            .map(|(op, result)| {
                serde_json::json!({
                    "op": op.name(),
                    "result": result,
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| MathError::SerializationError(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    for (i, (op, result)) in ops.iter().zip(results).enumerate() {
        let rendered = format_value(result, settings.precision);
        if mode.verbose {
            println!("[{}] {} = {}", i, op.name(), rendered);
        } else {
            println!("{}", rendered);
        }
    }
    Ok(())
}

fn run_single(settings: &Settings, mode: OutputMode, op: &Operation) -> Result<(), MathError> {
    tracing::debug!("Evaluating {} (epsilon {})", op.name(), settings.epsilon);
    let result = Evaluator::new(settings.epsilon).evaluate(op)?;
    print_results(settings, mode, std::slice::from_ref(op), &[result])
}

// =============================================================================
// EVAL COMMAND
// =============================================================================

/// Evaluate a batch of operations from a JSON file.
pub fn cmd_eval(
    settings: &Settings,
    mode: OutputMode,
    file: &Path,
    output: Option<&Path>,
) -> Result<(), MathError> {
    tracing::info!("Evaluating operations from {:?}", file);

    // Resolve the output path up front so a bad path fails before any work.
    let output = output.map(validate_output_path).transpose()?;

    let ops = load_operations(file, settings.max_file_size)?;
    let results = Evaluator::new(settings.epsilon).evaluate_batch(&ops)?;
    tracing::info!("Evaluated {} operations", results.len());

    if let Some(path) = output {
        let data = values_to_bytes(&results)?;
        std::fs::write(&path, &data)
            .map_err(|e| MathError::IoError(format!("Write file: {}", e)))?;
        tracing::info!("Wrote {} bytes to {:?}", data.len(), path);
    }

    print_results(settings, mode, &ops, &results)
}

// =============================================================================
// VECTOR COMMAND
// =============================================================================

/// Run a single vector operation.
pub fn cmd_vector(
    settings: &Settings,
    mode: OutputMode,
    op: &str,
    a: &str,
    b: Option<&str>,
    scalar: Option<f32>,
    max: Option<f32>,
) -> Result<(), MathError> {
    let operation = build_vector_op(op, a, b, scalar, max)?;
    run_single(settings, mode, &operation)
}

// =============================================================================
// MATRIX COMMAND
// =============================================================================

/// Run a single matrix operation.
pub fn cmd_matrix(
    settings: &Settings,
    mode: OutputMode,
    op: &str,
    a: &str,
    b: Option<&str>,
    vector: Option<&str>,
) -> Result<(), MathError> {
    let operation = build_matrix_op(op, a, b, vector)?;
    run_single(settings, mode, &operation)
}

// =============================================================================
// INSPECT COMMAND
// =============================================================================

/// Decode a binary results file no larger than `max_size` bytes.
///
/// The limit never exceeds [`MAX_PERSISTENCE_PAYLOAD_SIZE`].
pub fn inspect_file(path: &Path, max_size: u64) -> Result<Vec<MathValue>, MathError> {
    let limit = max_size.min(MAX_PERSISTENCE_PAYLOAD_SIZE as u64);
    let data = read_checked(path, limit)?;
    values_from_bytes(&data)
}

/// Print the contents of a binary results file.
pub fn cmd_inspect(settings: &Settings, mode: OutputMode, input: &Path) -> Result<(), MathError> {
    tracing::info!("Inspecting {:?}", input);
    let values = inspect_file(input, settings.max_file_size)?;

    if mode.json {
        let text = serde_json::to_string_pretty(&values)
            .map_err(|e| MathError::SerializationError(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("{} values", values.len());
    for (i, value) in values.iter().enumerate() {
        println!("[{}] {}", i, format_value(value, settings.precision));
    }
    Ok(())
}
