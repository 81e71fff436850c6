// Runtime configuration from environment variables and command-line flags.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// How the activation document is re-polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPolicy {
    /// Fetch, apply, then schedule the next fetch on the following repaint
    /// tick. One outstanding fetch at most; slow reads push the cadence back.
    Chained,
    /// Fetch on a fixed wall-clock cadence regardless of apply time.
    Interval(Duration),
}

impl fmt::Display for PollPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollPolicy::Chained => write!(f, "chained"),
            PollPolicy::Interval(d) => write!(f, "every {}ms", d.as_millis()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub topology_path: PathBuf,
    pub activations_path: PathBuf,
    pub policy: PollPolicy,
    /// Log file; a TUI owns stdout, so logs go to disk. None disables.
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env_and_args() -> Self {
        Self::parse(
            env::var("ACTMAP_DIR").ok(),
            env::var("ACTMAP_POLL_MS").ok(),
            env::var("ACTMAP_LOG").ok(),
            env::args().skip(1),
        )
    }

    fn parse(
        env_dir: Option<String>,
        env_poll_ms: Option<String>,
        env_log: Option<String>,
        args: impl Iterator<Item = String>,
    ) -> Self {
        let mut dir = env_dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data"));
        let mut topology_path: Option<PathBuf> = None;
        let mut activations_path: Option<PathBuf> = None;

        // Default scheduling: chained polling (apply-then-reschedule).
        let mut policy = PollPolicy::Chained;
        if let Some(ms) = env_poll_ms.and_then(|v| v.parse::<u64>().ok()) {
            policy = PollPolicy::Interval(Duration::from_millis(ms));
        }

        let mut log_path = match env_log.as_deref() {
            Some("off") | Some("0") => None,
            Some(p) => Some(PathBuf::from(p)),
            None => Some(PathBuf::from("actmap.log")),
        };

        let mut args = args;
        while let Some(a) = args.next() {
            match a.as_str() {
                "--dir" => {
                    if let Some(v) = args.next() {
                        dir = PathBuf::from(v);
                    }
                }
                "--topology" => {
                    if let Some(v) = args.next() {
                        topology_path = Some(PathBuf::from(v));
                    }
                }
                "--activations" => {
                    if let Some(v) = args.next() {
                        activations_path = Some(PathBuf::from(v));
                    }
                }
                "--interval-ms" => {
                    if let Some(ms) = args.next().and_then(|v| v.parse::<u64>().ok()) {
                        policy = PollPolicy::Interval(Duration::from_millis(ms));
                    }
                }
                "--chained" => {
                    policy = PollPolicy::Chained;
                }
                "--log" => {
                    log_path = match args.next().as_deref() {
                        Some("off") | Some("0") | None => None,
                        Some(p) => Some(PathBuf::from(p)),
                    };
                }
                _ => {}
            }
        }

        Self {
            topology_path: topology_path.unwrap_or_else(|| dir.join("topology.json")),
            activations_path: activations_path.unwrap_or_else(|| dir.join("activations.json")),
            policy,
            log_path,
        }
    }
}
