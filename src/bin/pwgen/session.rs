//! The interactive session: a menu-driven form where every change regenerates the password.

use std::io;

use anyhow::Context;
use console::style;

use pwgen::{
    CharacterClass, PasswordForm, PasswordOptions, MAX_PASSWORD_LENGTH, MAX_RECENT_PASSWORDS,
    MIN_PASSWORD_LENGTH,
};

use crate::ProgError;

enum Action {
    Regenerate,
    SetLength,
    Toggle(CharacterClass),
    EditOptions,
    ShowRecent,
    ClearRecent,
    Quit,
}

pub(crate) fn run_session(initial: PasswordOptions) -> Result<(), ProgError> {
    let mut form = PasswordForm::new(initial);
    log::info!("session started with {:?}", initial);
    show_state(&form);

    loop {
        match select_action(form.options())? {
            Action::Regenerate => form.regenerate(),
            Action::SetLength => {
                let length = dialoguer::Input::<usize>::new()
                    .with_prompt(format!(
                        "Length ({}-{})",
                        MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
                    ))
                    .with_initial_text(form.options().length.to_string())
                    .interact_text()
                    .context("failed to read the new length")?;
                form.set_length(length);
            }
            Action::Toggle(class) => form.toggle_class(class),
            Action::EditOptions => match crate::editor::edit_options(form.options()) {
                Ok(options) => form.set_options(options),
                Err(err @ ProgError::EditingCancelled) => {
                    eprintln!("{err}");
                    continue;
                }
                Err(err) => return Err(err),
            },
            Action::ShowRecent => {
                println!(
                    "Up to {} recent passwords, newest first:\n",
                    MAX_RECENT_PASSWORDS
                );
                let recent = form.recent_passwords();
                crate::table::display_recent(recent.iter(), io::stdout().lock())
                    .context("failed to output table")?;
                println!();
                continue;
            }
            Action::ClearRecent => {
                form.clear_recent_passwords();
                eprintln!("Recent passwords cleared.");
                continue;
            }
            Action::Quit => break,
        }
        show_state(&form);
    }

    form.end_session();
    log::info!("session ended");
    Ok(())
}

fn select_action(options: &PasswordOptions) -> Result<Action, ProgError> {
    let mut actions = vec![
        (String::from("Regenerate"), Action::Regenerate),
        (
            format!("Set length (currently {})", options.length),
            Action::SetLength,
        ),
    ];
    for class in CharacterClass::ALL {
        let mark = if options.includes(class) { "x" } else { " " };
        actions.push((format!("[{mark}] {class}"), Action::Toggle(class)));
    }
    actions.push((
        String::from("Edit all options in your editor"),
        Action::EditOptions,
    ));
    actions.push((String::from("Show recent passwords"), Action::ShowRecent));
    actions.push((String::from("Clear recent passwords"), Action::ClearRecent));
    actions.push((String::from("Quit"), Action::Quit));

    let labels = actions.iter().map(|(label, _)| label).collect::<Vec<_>>();
    let selection = dialoguer::FuzzySelect::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .items(&labels)
        .default(0)
        .interact_opt()
        .context("failed to query your selection")?;

    // Escape quits, the same as picking "Quit".
    Ok(match selection {
        Some(index) => actions.swap_remove(index).1,
        None => Action::Quit,
    })
}

fn show_state<R: rand::Rng>(form: &PasswordForm<R>) {
    if let (true, Err(err)) = (form.show_error(), form.validate()) {
        println!("{}", style(format!("Error: {err}.")).red());
        if form.has_validation_error() {
            println!(
                "{}",
                style("Select at least one of: lowercase, uppercase, numbers, symbols.").dim()
            );
        }
    } else {
        println!(
            "{} {}",
            style("Password:").bold(),
            style(form.current_password().as_str()).green()
        );
    }
}
