use crate::error::{DicomtabError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Asks for a directory until an existing one is entered
///
/// Returns an error if input ends before a valid directory is given.
pub fn prompt_for_directory<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<PathBuf> {
    loop {
        write!(output, "Enter the full path of the folder with your DICOM files: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DicomtabError::PromptError(
                "input closed before a directory was entered".to_string(),
            ));
        }

        let path = PathBuf::from(line.trim());
        if path.is_dir() {
            return Ok(path);
        }

        writeln!(
            output,
            "Error: '{}' is not a valid directory or does not exist. Please try again.",
            path.display()
        )?;
    }
}
