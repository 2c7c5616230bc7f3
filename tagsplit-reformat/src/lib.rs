//! Reformatter for text/XML-like files with whole elements on one line.
//!
//! Splits tokenizer-style lines such as `<keyword> class </keyword>` into
//! three lines (opening tag fragment, inner text, closing tag fragment)
//! and writes the result next to the input as `{stem}_parsed{.ext}`.
//!
//! # Example
//!
//! ```ignore
//! let output_path = tagsplit_reformat::process_file("tokens.xml")?;
//! // Writes tokens_parsed.xml next to the input.
//! ```
//!
//! This is a purely syntactic transformation: nothing is parsed as
//! markup, and malformed tag-like text is never rejected.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

mod error;
mod reformat;

pub use error::Error;
pub use reformat::reformat_lines;

/// Derive the sibling output path for `input`: the original stem with
/// `_parsed` appended, keeping the original extension when present.
///
/// # Errors
///
/// Returns [`Error::InvalidInputPath`] if `input` has no file name, or a
/// file name that is not valid UTF-8.
pub fn derive_output_path(input: &Path) -> Result<PathBuf, Error> {
    if input.file_name().and_then(|name| name.to_str()).is_none() {
        return Err(Error::InvalidInputPath(input.to_path_buf()));
    }
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| Error::InvalidInputPath(input.to_path_buf()))?;
    let name = match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}_parsed.{ext}"),
        None => format!("{stem}_parsed"),
    };
    Ok(input.with_file_name(name))
}

/// Reformat `input` and write the result to `writer`.
///
/// Output lines are joined with `\n` and carry no trailing newline; input
/// with no reformattable content produces empty output.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_to<W: Write>(input: &str, mut writer: W) -> Result<(), Error> {
    let lines = reformat_lines(input.split('\n'));
    writer.write_all(lines.join("\n").as_bytes())?;
    Ok(())
}

/// Reformat the file at `path` into its `_parsed` sibling.
///
/// Reads the whole file as UTF-8 text, transforms it, and writes the
/// result through a buffered writer. Returns the path of the generated
/// file.
///
/// # Errors
///
/// Returns an error if the output path cannot be derived, if the input
/// cannot be read as UTF-8 text, or if the output file cannot be created
/// or written.
pub fn process_file<P: AsRef<Path>>(path: P) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let output_path = derive_output_path(path)?;
    tracing::debug!(source = ?path, destination = ?output_path, "reformatting file");

    let input = fs::read_to_string(path)?;
    let file = fs::File::create(&output_path)?;
    let mut writer = BufWriter::new(file);
    write_to(&input, &mut writer)?;
    writer.flush()?;
    Ok(output_path)
}
