//! Global context for scan execution

use crate::cli::args::Cli;
use crate::core::scope::Scope;
use crate::negotiation::NegotiationConfig;
use std::collections::HashMap;
use std::path::PathBuf;

pub struct Context {
    pub target: String,
    pub rate_limit: u32,
    pub crawl_depth: usize,
    pub timeout: u64,
    pub quiet: bool,
    pub verbose: bool,
    pub scope: Scope,
    pub negotiation: NegotiationConfig,
    pub output_format: String,
    pub output_file: Option<String>,
    // Authentication
    pub cookies: Option<String>,
    pub headers: HashMap<String, String>,
}

impl Context {
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let scope = Scope::new(&cli.target)?;

        let negotiation = NegotiationConfig {
            wordlist: PathBuf::from(&cli.wordlist),
            retries: cli.retries,
            threads: cli.threads,
            ..NegotiationConfig::default()
        };

        // Parse custom headers
        let mut headers = HashMap::new();
        for header in &cli.headers {
            if let Some((key, value)) = header.split_once(':') {
                headers.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(Self {
            target: cli.target,
            rate_limit: cli.rate,
            crawl_depth: cli.depth,
            timeout: cli.timeout,
            quiet: cli.quiet,
            verbose: cli.verbose,
            scope,
            negotiation,
            output_format: cli.format,
            output_file: cli.output,
            cookies: cli.cookie,
            headers,
        })
    }
}
