use std::env;

// Runtime settings for the replay runner (not gameplay tuning).

/// Upper bound on frames replayed; unset means the whole replay.
pub fn max_frames() -> Option<usize> {
    env::var("DUEL_MAX_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
}

pub fn log_json() -> bool {
    matches!(env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Replay file; stdin when absent.
    pub path: Option<String>,
    /// Print the final snapshot as JSON instead of the summary.
    pub json: bool,
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Args {
    let mut out = Args::default();
    for arg in args {
        if arg == "--json" {
            out.json = true;
        } else if !arg.starts_with("--") && out.path.is_none() {
            out.path = Some(arg);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn path_and_flags() {
        assert_eq!(
            args(&["replay.json", "--json"]),
            Args {
                path: Some("replay.json".to_string()),
                json: true
            }
        );
        assert_eq!(args(&["--json"]).path, None);
        assert_eq!(args(&[]), Args::default());
    }

    #[test]
    fn unknown_flags_are_ignored() {
        assert_eq!(args(&["--verbose", "a.json", "b.json"]).path.as_deref(), Some("a.json"));
    }
}
