//! Raw argument validation against a command's declared flag set

/// Help aliases the matcher tolerates without flagging them as unknown.
/// Deliberately wider than the pair `is_help_requested` accepts; the two
/// vocabularies are kept distinct.
const MATCHER_HELP_ALIASES: &[&str] = &["--h", "-h", "--help", "-help"];

/// Classify each raw argument token against the recognized flag names and
/// return a message enumerating unknown flags, or an empty string when
/// every token is accounted for.
///
/// Recognized names may themselves be comma-separated alias lists
/// (`"instances, i"`); each alias is compared after trimming. Tokens
/// without a `-`/`--` prefix are positional arguments and pass through
/// silently. A single-token latch remembers that the previous token
/// matched a flag so a negative integer value such as `-i -10` is taken
/// as the flag's value rather than reported as unknown.
///
/// Pure function: the same flags/args pair always yields the same output.
pub fn match_args_and_flags(flags: &[String], args: &[String]) -> String {
    let mut bad_flags = String::new();
    let mut multiple = false;
    let mut last_matched = false;

    'tokens: for raw in args {
        // only the flag name matters, ignore any value after '='
        let arg = raw.split('=').next().unwrap_or_default();

        if MATCHER_HELP_ALIASES.contains(&arg) {
            continue 'tokens;
        }

        let prefix = if arg.starts_with("--") {
            "--"
        } else if arg.starts_with('-') {
            "-"
        } else {
            ""
        };
        let bare = arg.trim_start_matches('-');

        // the latch is one token deep: consume it here whether or not the
        // token turns out to be an integer value
        if last_matched {
            last_matched = false;
            if bare.parse::<i32>().is_ok() {
                continue 'tokens;
            }
        }

        if prefix.is_empty() {
            continue 'tokens;
        }

        for flag in flags {
            for alias in flag.split(", ") {
                if alias.trim() == bare {
                    last_matched = true;
                    continue 'tokens;
                }
            }
        }

        if bad_flags.is_empty() {
            bad_flags = format!("\"{}{}\"", prefix, bare);
        } else {
            multiple = true;
            bad_flags.push_str(&format!(", \"{}{}\"", prefix, bare));
        }
    }

    if multiple {
        format!("Unknown flags: {}", bad_flags)
    } else if !bad_flags.is_empty() {
        format!("Unknown flag {}", bad_flags)
    } else {
        String::new()
    }
}

/// True iff some token is exactly `-h` or `--help`. Narrower than the
/// alias set the matcher skips; call sites rely on each behavior as-is.
pub fn is_help_requested(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "-h" || arg == "--help")
}
