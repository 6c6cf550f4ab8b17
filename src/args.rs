use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::controller::challonge::FetchSettings;

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind: args.bind,
            port: args.port,
            upstream_base_url: args.upstream_base_url,
            fetch_fanout: args.fetch_fanout,
            max_tournaments: args.max_tournaments,
            upstream_timeout_secs: args.upstream_timeout_secs,
            log_filter: args.log_filter,
        }
    }

    #[must_use]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    #[must_use]
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            fanout: self.fetch_fanout,
            max_tournaments: self.max_tournaments,
            timeout: self.upstream_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CleanArgs::new(Args::try_parse_from(["challonge-proxy"]).unwrap());
        assert_eq!(args.port, 3001);
        assert_eq!(
            args.upstream_base_url.as_str(),
            "https://api.challonge.com/v1/tournaments"
        );
        assert_eq!(args.fetch_settings(), FetchSettings::default());
    }

    #[test]
    fn zero_fanout_is_rejected() {
        assert!(Args::try_parse_from(["challonge-proxy", "--fetch-fanout", "0"]).is_err());
        assert!(
            Args::try_parse_from(["challonge-proxy", "--upstream-timeout-secs", "0"]).is_err()
        );
    }
}
