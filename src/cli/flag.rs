//! Flag declarations

/// A command-line flag declaration, tagged by value kind.
///
/// The kind set is closed. Adding a kind means updating every match over
/// `Flag` in the same change, most importantly `Flag::name`, which feeds
/// the flag-name extractor used for argument validation.
#[derive(Debug, Clone)]
pub enum Flag {
    /// Free-form string value
    String { name: String, usage: String },

    /// Signed integer value
    Int { name: String, usage: String },

    /// Boolean switch, takes no value
    Bool { name: String, usage: String },

    /// Duration value such as `30s` or `2m`
    Duration { name: String, usage: String },

    /// Repeatable string value collected into a list
    StringSlice { name: String, usage: String },
}

impl Flag {
    /// The declared name. May itself be a comma-separated alias list,
    /// e.g. `"instances, i"`.
    pub fn name(&self) -> &str {
        match self {
            Flag::String { name, .. }
            | Flag::Int { name, .. }
            | Flag::Bool { name, .. }
            | Flag::Duration { name, .. }
            | Flag::StringSlice { name, .. } => name,
        }
    }

    /// Usage text shown in the OPTIONS section of command help.
    pub fn usage(&self) -> &str {
        match self {
            Flag::String { usage, .. }
            | Flag::Int { usage, .. }
            | Flag::Bool { usage, .. }
            | Flag::Duration { usage, .. }
            | Flag::StringSlice { usage, .. } => usage,
        }
    }

    /// One help line for the OPTIONS section. Each alias gets a `--`
    /// prefix when longer than a single character, `-` otherwise:
    /// `--instances, -i         Number of instances to start`.
    pub fn help_line(&self) -> String {
        let names: Vec<String> = self
            .name()
            .split(", ")
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(|n| {
                if n.len() > 1 {
                    format!("--{}", n)
                } else {
                    format!("-{}", n)
                }
            })
            .collect();

        format!("   {:<24}{}", names.join(", "), self.usage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_per_kind() {
        let flags = vec![
            Flag::String {
                name: "working-dir".to_string(),
                usage: String::new(),
            },
            Flag::Int {
                name: "instances".to_string(),
                usage: String::new(),
            },
            Flag::Bool {
                name: "run-as-root".to_string(),
                usage: String::new(),
            },
            Flag::Duration {
                name: "timeout".to_string(),
                usage: String::new(),
            },
            Flag::StringSlice {
                name: "env".to_string(),
                usage: String::new(),
            },
        ];

        let names: Vec<&str> = flags.iter().map(Flag::name).collect();
        assert_eq!(
            names,
            vec!["working-dir", "instances", "run-as-root", "timeout", "env"]
        );
    }

    #[test]
    fn test_help_line_long_and_short() {
        let flag = Flag::Int {
            name: "instances, i".to_string(),
            usage: "Number of instances to start".to_string(),
        };
        let line = flag.help_line();
        assert!(line.contains("--instances, -i"));
        assert!(line.contains("Number of instances to start"));
    }

    #[test]
    fn test_help_line_long_only() {
        let flag = Flag::Bool {
            name: "run-as-root".to_string(),
            usage: "Run as root".to_string(),
        };
        assert!(flag.help_line().contains("--run-as-root"));
        assert!(!flag.help_line().contains("---"));
    }
}
