use std::io::Write;

use anyhow::Context;

use pwgen::{CharacterClass, PasswordOptions, PasswordService};

use crate::ProgError;

pub(crate) struct Output {
    pub(crate) json: bool,
    pub(crate) history: bool,
}

/// Apply the command-line overrides on top of the configured defaults.
///
/// Any class given on the command line replaces the configured class selection entirely.
pub(crate) fn effective_options(
    defaults: PasswordOptions,
    length: Option<usize>,
    classes: impl IntoIterator<Item = CharacterClass>,
) -> PasswordOptions {
    let mut options = defaults;
    if let Some(length) = length {
        options.length = length;
    }
    let mut classes = classes.into_iter().peekable();
    if classes.peek().is_some() {
        for class in CharacterClass::ALL {
            options.set_included(class, false);
        }
        for class in classes {
            options.set_included(class, true);
        }
    }
    options
}

pub(crate) fn generate(
    options: PasswordOptions,
    count: usize,
    output: Output,
    mut out: impl Write,
) -> Result<(), ProgError> {
    options.validate()?;

    let mut service = PasswordService::new();
    for _ in 0..count {
        let password = service.generate_password(&options);
        match service.recent().newest() {
            Some(record) if output.json => {
                serde_json::to_writer(&mut out, record).context("failed to write JSON record")?;
                writeln!(out).context("failed to write output")?;
            }
            _ => writeln!(out, "{}", password.as_str()).context("failed to write output")?,
        }
    }

    if output.history {
        writeln!(out).context("failed to write output")?;
        crate::table::display_recent(service.recent().iter(), &mut out)
            .context("failed to output table")?;
    }
    Ok(())
}
