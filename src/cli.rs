use crate::config::{Config, MAX_GUESTS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tea-gathering", version, about = "A terminal lesson on keeping components pure")]
pub struct Args {
    /// Drinker count shown when the page opens
    #[arg(long, value_name = "N")]
    pub drinkers: Option<u32>,

    /// Number of cups in the tea gathering
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=MAX_GUESTS as i64))]
    pub guests: Option<u32>,

    /// Render every component twice per frame
    #[arg(long)]
    pub strict: bool,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file to write instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Layers command-line values over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(drinkers) = self.drinkers {
            config.lesson.initial_drinkers = drinkers;
        }
        if let Some(guests) = self.guests {
            config.lesson.guest_count = guests;
        }
        if self.strict {
            config.lesson.strict_mode = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["tea-gathering", "--drinkers", "5", "--strict"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.lesson.initial_drinkers, 5);
        assert_eq!(config.lesson.guest_count, 3);
        assert!(config.lesson.strict_mode);
    }

    #[test]
    fn missing_flags_keep_config() {
        let args = Args::parse_from(["tea-gathering"]);
        let mut config = Config::default();
        config.lesson.strict_mode = true;
        args.apply(&mut config);
        assert!(config.lesson.strict_mode);
        assert_eq!(config.lesson.initial_drinkers, 2);
    }

    #[test]
    fn too_many_guests_is_rejected() {
        assert!(Args::try_parse_from(["tea-gathering", "--guests", "100"]).is_err());
    }
}
