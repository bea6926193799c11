//! The CLI application object and command registry

use crate::cli::args::{is_help_requested, match_args_and_flags};
use crate::cli::flag::Flag;
use crate::cli::help::{self, HelpSubject, APP_HELP_TEMPLATE, COMMAND_HELP_TEMPLATE};
use crate::error::{CommandError, HelpError};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// A command action: receives the app's output sink and the tokens that
/// followed the command name.
pub type Action = Arc<dyn Fn(&mut dyn Write, &[String]) -> anyhow::Result<()> + Send + Sync>;

/// A registered subcommand. Immutable after registration.
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub short_name: Option<String>,
    pub usage: String,
    pub description: String,
    /// Declared flags, order preserved for help and extraction
    pub flags: Vec<Flag>,
    pub action: Action,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short_name", &self.short_name)
            .field("usage", &self.usage)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl Command {
    /// All names this command answers to, `"create, cr"` style.
    pub fn names(&self) -> String {
        match &self.short_name {
            Some(short) => format!("{}, {}", self.name, short),
            None => self.name.clone(),
        }
    }
}

/// A named group of commands, rendered as one section of the app help.
#[derive(Clone)]
pub struct CommandGroup {
    pub name: String,
    pub commands: Vec<Command>,
}

/// The assembled CLI application
pub struct App {
    pub name: String,
    pub usage: String,
    /// Build-time version string, injected by the constructor
    pub version: String,
    pub command_groups: Vec<CommandGroup>,
    output: Box<dyn Write + Send>,
}

impl App {
    pub fn new(
        version: &str,
        command_groups: Vec<CommandGroup>,
        output: Box<dyn Write + Send>,
    ) -> Self {
        App {
            name: "ltc".to_string(),
            usage: "Command-line client for the Lattice orchestration platform".to_string(),
            version: version.to_string(),
            command_groups,
            output,
        }
    }

    /// All registered commands in group order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.command_groups
            .iter()
            .flat_map(|group| group.commands.iter())
    }

    /// Look up a command by exact name, then by short alias.
    pub fn command(&self, name: &str) -> Result<&Command, CommandError> {
        if let Some(cmd) = self.commands().find(|cmd| cmd.name == name) {
            return Ok(cmd);
        }
        self.commands()
            .find(|cmd| cmd.short_name.as_deref() == Some(name))
            .ok_or(CommandError::NotFound)
    }

    /// Flag names declared on a command, declaration order preserved.
    ///
    /// An unknown command yields an empty list rather than an error;
    /// callers treat absence as "no flags".
    pub fn flag_names(&self, command_name: &str) -> Vec<String> {
        let Ok(cmd) = self.command(command_name) else {
            return Vec::new();
        };
        cmd.flags
            .iter()
            .map(|flag| flag.name().to_string())
            .collect()
    }

    /// Dispatch a raw argument vector (including the program name).
    ///
    /// No command token or a top-level help alias renders the app help.
    /// For a named command, flag validation runs first; unknown flags
    /// render the command help with the message injected and fail the
    /// run. A help request after the command name renders the command
    /// help. Otherwise the command's action runs.
    pub fn run(&mut self, args: &[String]) -> crate::Result<()> {
        let invocation = args.get(1..).unwrap_or_default();

        let Some(command_name) = invocation.first().cloned() else {
            return self.print_app_help();
        };
        if is_help_requested(std::slice::from_ref(&command_name)) {
            return self.print_app_help();
        }

        let cmd = self.command(&command_name)?.clone();
        let rest = &invocation[1..];

        let recognized = self.flag_names(&command_name);
        let bad_flags = match_args_and_flags(&recognized, rest);
        if !bad_flags.is_empty() {
            debug!(command = %cmd.name, %bad_flags, "flag validation failed");
            self.print_command_help(&cmd, Some(&bad_flags))?;
            return Err(CommandError::UnknownFlags(bad_flags).into());
        }

        if is_help_requested(rest) {
            return self.print_command_help(&cmd, None);
        }

        debug!(command = %cmd.name, "running command");
        (cmd.action)(self.output.as_mut(), rest)?;
        Ok(())
    }

    fn print_app_help(&mut self) -> crate::Result<()> {
        let vars = self.help_vars();
        let rendered = help::render(APP_HELP_TEMPLATE, &vars)?;
        self.output
            .write_all(rendered.as_bytes())
            .map_err(HelpError::Write)?;
        Ok(())
    }

    fn print_command_help(&mut self, cmd: &Command, bad_flags: Option<&str>) -> crate::Result<()> {
        let template = match bad_flags {
            Some(message) => help::inject_unknown_flags(COMMAND_HELP_TEMPLATE, message),
            None => COMMAND_HELP_TEMPLATE.to_string(),
        };
        help::render_help(self.output.as_mut(), &template, cmd)?;
        Ok(())
    }
}

impl HelpSubject for App {
    fn help_vars(&self) -> HashMap<String, String> {
        let mut commands = String::new();
        for group in &self.command_groups {
            commands.push_str(&group.name);
            commands.push_str(":\n");
            for cmd in &group.commands {
                commands.push_str(&format!("   {:<24}{}\n", cmd.names(), cmd.usage));
            }
            commands.push('\n');
        }

        HashMap::from([
            ("name".to_string(), self.name.clone()),
            ("usage".to_string(), self.usage.clone()),
            ("version".to_string(), self.version.clone()),
            ("commands".to_string(), commands),
        ])
    }
}

impl HelpSubject for Command {
    fn help_vars(&self) -> HashMap<String, String> {
        let alias_section = match &self.short_name {
            Some(short) => format!("\nALIAS:\n   {}\n", short),
            None => String::new(),
        };

        let options_section = if self.flags.is_empty() {
            String::new()
        } else {
            let mut section = String::from("\nOPTIONS:\n");
            for flag in &self.flags {
                section.push_str(&flag.help_line());
                section.push('\n');
            }
            section
        };

        HashMap::from([
            ("names".to_string(), self.names()),
            ("usage".to_string(), self.usage.clone()),
            ("description".to_string(), self.description.clone()),
            ("alias_section".to_string(), alias_section),
            ("options_section".to_string(), options_section),
        ])
    }
}
