//! Built-in command set
//!
//! Assembles the grouped command registry the app runs with. Actions
//! here are the client-side surface only; the calls into the platform
//! live behind them and are intentionally thin.

use crate::cli::app::{Command, CommandGroup};
use crate::cli::flag::Flag;
use crate::config::Store;
use anyhow::anyhow;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Build the full command registry. The config store is shared with the
/// commands that read or write the target.
pub fn make_command_groups(store: Arc<Mutex<Store>>) -> Vec<CommandGroup> {
    vec![
        CommandGroup {
            name: "TARGET".to_string(),
            commands: vec![target_command(store)],
        },
        CommandGroup {
            name: "APPS".to_string(),
            commands: vec![create_command(), remove_command(), status_command()],
        },
    ]
}

fn target_command(store: Arc<Mutex<Store>>) -> Command {
    Command {
        name: "target".to_string(),
        short_name: Some("t".to_string()),
        usage: "Set or view the targeted lattice cluster".to_string(),
        description: "ltc target [LATTICE_HOST]".to_string(),
        flags: Vec::new(),
        action: Arc::new(move |out, args| {
            let mut store = store
                .lock()
                .map_err(|_| anyhow!("config store lock poisoned"))?;
            match args.first() {
                Some(host) => {
                    store.set_target(host);
                    store.save()?;
                    info!(target = %host, "target updated");
                    writeln!(out, "Target set to {}", host)?;
                }
                None => match store.target() {
                    Some(host) => writeln!(out, "Target:\t{}", host)?,
                    None => writeln!(out, "Target not set")?,
                },
            }
            Ok(())
        }),
    }
}

fn create_command() -> Command {
    Command {
        name: "create".to_string(),
        short_name: Some("cr".to_string()),
        usage: "Create a long-running app from a docker image".to_string(),
        description: "ltc create APP_NAME DOCKER_IMAGE".to_string(),
        flags: vec![
            Flag::String {
                name: "working-dir, w".to_string(),
                usage: "Working directory for the running app".to_string(),
            },
            Flag::Int {
                name: "instances, i".to_string(),
                usage: "Number of instances to start".to_string(),
            },
            Flag::Bool {
                name: "run-as-root, r".to_string(),
                usage: "Run the app as the root user".to_string(),
            },
            Flag::Duration {
                name: "timeout, t".to_string(),
                usage: "How long to wait for the app to start".to_string(),
            },
            Flag::StringSlice {
                name: "env, e".to_string(),
                usage: "Environment variable NAME=VALUE, may be repeated".to_string(),
            },
        ],
        action: Arc::new(|out, args| {
            let app_name = positional(args)
                .ok_or_else(|| anyhow!("App name required"))?;
            writeln!(out, "Creating app {}...", app_name)?;
            Ok(())
        }),
    }
}

fn remove_command() -> Command {
    Command {
        name: "remove".to_string(),
        short_name: Some("rm".to_string()),
        usage: "Stop and remove a running app".to_string(),
        description: "ltc remove APP_NAME".to_string(),
        flags: Vec::new(),
        action: Arc::new(|out, args| {
            let app_name = positional(args)
                .ok_or_else(|| anyhow!("App name required"))?;
            writeln!(out, "Removing app {}...", app_name)?;
            Ok(())
        }),
    }
}

fn status_command() -> Command {
    Command {
        name: "status".to_string(),
        short_name: Some("st".to_string()),
        usage: "Show the status of a running app".to_string(),
        description: "ltc status APP_NAME".to_string(),
        flags: Vec::new(),
        action: Arc::new(|out, args| {
            let app_name = positional(args)
                .ok_or_else(|| anyhow!("App name required"))?;
            writeln!(out, "{}: status unavailable (no target connection)", app_name)?;
            Ok(())
        }),
    }
}

/// First token that is not a flag.
fn positional(args: &[String]) -> Option<&String> {
    args.iter().find(|arg| !arg.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MemPersister, Store};

    fn shared_store() -> Arc<Mutex<Store>> {
        Arc::new(Mutex::new(
            Store::new(Box::new(MemPersister::default())).unwrap(),
        ))
    }

    #[test]
    fn test_registry_contains_expected_commands() {
        let groups = make_command_groups(shared_store());
        let names: Vec<String> = groups
            .iter()
            .flat_map(|g| g.commands.iter().map(|c| c.name.clone()))
            .collect();
        assert_eq!(names, vec!["target", "create", "remove", "status"]);
    }

    #[test]
    fn test_create_declares_all_flag_kinds() {
        let groups = make_command_groups(shared_store());
        let create = groups
            .iter()
            .flat_map(|g| g.commands.iter())
            .find(|c| c.name == "create")
            .unwrap();
        assert_eq!(create.flags.len(), 5);
    }

    #[test]
    fn test_target_action_round_trips_through_store() {
        let store = shared_store();
        let groups = make_command_groups(Arc::clone(&store));
        let target = groups
            .iter()
            .flat_map(|g| g.commands.iter())
            .find(|c| c.name == "target")
            .unwrap();

        let mut out = Vec::new();
        (target.action)(&mut out, &["receptor.lattice.test".to_string()]).unwrap();
        assert_eq!(
            store.lock().unwrap().target(),
            Some("receptor.lattice.test")
        );

        let mut out = Vec::new();
        (target.action)(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("receptor.lattice.test"));
    }

    #[test]
    fn test_create_requires_app_name() {
        let groups = make_command_groups(shared_store());
        let create = groups
            .iter()
            .flat_map(|g| g.commands.iter())
            .find(|c| c.name == "create")
            .unwrap();

        let mut out = Vec::new();
        assert!((create.action)(&mut out, &[]).is_err());
    }
}
