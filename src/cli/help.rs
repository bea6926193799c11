//! Template-driven help rendering
//!
//! Templates are plain text with `${placeholder}` fields. A subject (the
//! app or a single command) exposes its fields as a variable map; the
//! renderer substitutes them and writes the result to the caller's sink.
//! Unknown placeholders and write failures propagate, nothing is
//! recovered here.

use crate::error::{HelpError, HelpResult};
use regex::Regex;
use std::collections::HashMap;
use std::io::Write;

/// Default top-level help template.
pub const APP_HELP_TEMPLATE: &str = "NAME:
   ${name} - ${usage}

USAGE:
   ${name} [global options] command [command options] [arguments...]

VERSION:
   ${version}

COMMANDS:
${commands}";

/// Default per-command help template.
pub const COMMAND_HELP_TEMPLATE: &str = "NAME:
   ${names} - ${usage}
${alias_section}
USAGE:
   ${description}
${options_section}";

/// A help-renderable subject exposing its template variables.
pub trait HelpSubject {
    fn help_vars(&self) -> HashMap<String, String>;
}

/// Render `template` against `subject` and write the result to `sink`.
pub fn render_help(
    sink: &mut dyn Write,
    template: &str,
    subject: &dyn HelpSubject,
) -> HelpResult<()> {
    let rendered = render(template, &subject.help_vars())?;
    sink.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Substitute `${var}` placeholders from the variable map. A placeholder
/// with no matching variable is a rendering failure.
pub fn render(template: &str, vars: &HashMap<String, String>) -> HelpResult<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    let mut missing: Option<String> = None;
    let rendered = re
        .replace_all(template, |caps: &regex::Captures| {
            let key = &caps[1];
            match vars.get(key) {
                Some(value) => value.clone(),
                None => {
                    if missing.is_none() {
                        missing = Some(key.to_string());
                    }
                    String::new()
                }
            }
        })
        .to_string();

    match missing {
        Some(key) => Err(HelpError::UnknownPlaceholder(key)),
        None => Ok(rendered),
    }
}

/// Prepend an unknown-flag message to a help template so the rendered
/// help leads with the validation failure.
pub fn inject_unknown_flags(template: &str, message: &str) -> String {
    format!("{}\n\n{}", message, template)
}
