use clap::Parser;
use reqwest::Url;

use crate::controller::challonge::{
    DEFAULT_BASE_URL, DEFAULT_FETCH_FANOUT, DEFAULT_MAX_TOURNAMENTS,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "PROXY_BIND", value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, env = "PROXY_PORT", value_name = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Tournaments collection of the upstream API, without a trailing `.json`.
    #[arg(
        long,
        env = "CHALLONGE_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub upstream_base_url: Url,

    /// Participants calls allowed in flight for one players-set request.
    #[arg(
        long,
        env = "PROXY_FETCH_FANOUT",
        value_name = "N",
        default_value_t = DEFAULT_FETCH_FANOUT,
        value_parser = crate::args::validation::check_at_least_one
    )]
    pub fetch_fanout: usize,
    /// Tournaments accepted in one players-set request.
    #[arg(
        long,
        env = "PROXY_MAX_TOURNAMENTS",
        value_name = "N",
        default_value_t = DEFAULT_MAX_TOURNAMENTS,
        value_parser = crate::args::validation::check_at_least_one
    )]
    pub max_tournaments: usize,
    /// Deadline, in seconds, for all upstream calls of one request.
    #[arg(
        long,
        env = "PROXY_UPSTREAM_TIMEOUT_SECS",
        value_name = "SECONDS",
        default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,

    /// Tracing filter; `RUST_LOG` is used when this is not given.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub upstream_base_url: Url,
    pub fetch_fanout: usize,
    pub max_tournaments: usize,
    pub upstream_timeout_secs: u64,
    pub log_filter: Option<String>,
}
