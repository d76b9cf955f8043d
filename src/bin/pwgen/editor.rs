use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::io::{self, Seek, Write};
use std::path::Path;
use std::process::Command;

use anyhow::Context;

use crate::ProgError;

pub(crate) fn run_editor(path: &Path) -> Result<(), ProgError> {
    let editor = env::var_os("EDITOR")
        .map(Cow::from)
        .unwrap_or_else(|| Cow::from(OsStr::new("vi")));
    let exit_status = Command::new(&editor)
        .arg(path)
        .status()
        .with_context(|| format!("failed to run your editor (`{}`)", editor.to_string_lossy()))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "your editor (`{}`) exited with {}",
            editor.to_string_lossy(),
            exit_status
        )
        .into())
    }
}

/// Open the options as YAML in the user's editor, and parse back what they saved.
///
/// A result that doesn't parse offers another round in the editor; declining that cancels the
/// edit.
pub(crate) fn edit_options(
    options: &pwgen::PasswordOptions,
) -> Result<pwgen::PasswordOptions, ProgError> {
    let mut temp_file = tempfile::Builder::new()
        .prefix("pwgen-options-")
        .suffix(".yaml")
        .tempfile()
        .context("failed to create temporary file, prior to opening it in your editor")?;
    temp_file
        .write_all(OPTIONS_HEADER.as_bytes())
        .context("failed to write options to temporary file")?;
    serde_yaml::to_writer(&mut temp_file, options)
        .context("failed to write options to temporary file")?;
    temp_file
        .flush()
        .context("failed to flush options to temporary file")?;

    loop {
        run_editor(temp_file.path())?;
        temp_file
            .seek(io::SeekFrom::Start(0))
            .context("failed to seek in temporary file")?;
        match serde_yaml::from_reader::<_, pwgen::PasswordOptions>(&mut temp_file) {
            Ok(edited) => return Ok(edited),
            Err(err) => {
                eprintln!("Failed to parse the options: {}", err);
                let edit_again = dialoguer::Confirm::new()
                    .with_prompt("Edit again?")
                    .default(true)
                    .interact()
                    .context("failed to prompt you, somehow")?;
                if !edit_again {
                    return Err(ProgError::EditingCancelled);
                }
            }
        }
    }
}

static OPTIONS_HEADER: &str = "\
# Password options. The length must be between 4 and 25, and at least one
# character class must be included.
";
