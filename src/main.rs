//! `bitsliced` — increment integers read from stdin in one bit-sliced pass.
//!
//! **Usage:**
//! ```text
//! echo "5 4294967295 100" | bitsliced [--policy <reject|truncate|extend>] [--capacity <N>] [--planes] [--parallel]
//! ```

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use bitsliced::console::run;
use bitsliced::{OverflowPolicy, RunConfig, DEFAULT_CAPACITY};
use clap::Parser;

/// Increment up to 64 unsigned 32-bit integers at once using bit-planes.
#[derive(Parser)]
#[command(name = "bitsliced", version, about)]
struct Args {
    /// What to do when more than `capacity` values are supplied.
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Extend)]
    policy: OverflowPolicy,

    /// Number of values accepted before the overflow policy applies.
    /// With `--policy extend` every value is kept and this only affects logging.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Print the bit-planes before and after the increment.
    #[arg(long)]
    planes: bool,

    /// Increment plane groups in parallel.
    #[arg(long)]
    parallel: bool,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        RunConfig {
            capacity: args.capacity,
            policy: args.policy,
            show_planes: args.planes,
            parallel: args.parallel,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::from(Args::parse());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    run(&config, stdin.lock(), &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_run_config() {
        let args = Args::try_parse_from([
            "bitsliced",
            "--policy",
            "truncate",
            "--capacity",
            "3",
            "--planes",
            "--parallel",
        ])
        .unwrap();

        assert_eq!(
            RunConfig::from(args),
            RunConfig {
                capacity: 3,
                policy: OverflowPolicy::Truncate,
                show_planes: true,
                parallel: true,
            }
        );
    }

    #[test]
    fn test_defaults_map_to_default_config() {
        let args = Args::try_parse_from(["bitsliced"]).unwrap();
        assert_eq!(RunConfig::from(args), RunConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Args::try_parse_from(["bitsliced", "--policy", "drop"]).is_err());
    }
}
