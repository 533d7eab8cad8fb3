use clap::Parser;

/// negscan – HTTP content-negotiation resource discovery scanner
#[derive(Parser, Debug)]
#[command(
    name = "negscan",
    version,
    about = "negscan – discover hidden resources through HTTP content negotiation",
    long_about = r#"
negscan abuses HTTP content negotiation to find resources a site never links
to. The scan runs in three phases:

  1. Verify the server negotiates at all: request a known filename with its
     extension stripped and a fictitious Accept header, and look for an
     Alternates response header. Detection is not perfectly reliable, so the
     verdict is only settled after a bounded number of probes.

  2. For every crawled resource, request its stem the same way and fetch
     every alternate the server lists (backup.php -> backup.zip, backup.old).

  3. Bruteforce: join a wordlist of common stems into every directory seen
     during the scan and probe each candidate through a bounded worker pool.
     Directories and stems are deduplicated for the lifetime of the scan.
"#,
    after_help = r#"EXAMPLES:

  negscan -t http://target.example/app/index.php
  negscan -t http://target.example/ --wordlist wordlists/common_filenames.txt
  negscan -t http://target.example/ --threads 20 --rate 50 --format json -o report.json
  negscan -t http://target.example/ --cookie "session=abc123" -H "Authorization: Bearer x"
"#
)]
pub struct Cli {
    /// Target URL (e.g. http://target.example/app/index.php)
    #[arg(short, long, required = true)]
    pub target: String,

    /// Wordlist for the file-name bruteforce phase
    #[arg(
        long,
        default_value = "wordlists/common_filenames.txt",
        help_heading = "DISCOVERY"
    )]
    pub wordlist: String,

    /// Inconclusive probes tolerated before concluding the server does not
    /// negotiate
    #[arg(long, default_value_t = 3, help_heading = "DISCOVERY")]
    pub retries: u32,

    /// Seed crawl depth
    #[arg(long, default_value_t = 2, help_heading = "DISCOVERY")]
    pub depth: usize,

    /// Cookie string for authenticated scanning
    #[arg(long, help_heading = "AUTHENTICATION")]
    pub cookie: Option<String>,

    /// HTTP headers (can be used multiple times)
    #[arg(long = "header", short = 'H', help_heading = "AUTHENTICATION")]
    pub headers: Vec<String>,

    /// Bruteforce worker pool width
    #[arg(long, default_value_t = 10, help_heading = "PERFORMANCE")]
    pub threads: usize,

    /// Maximum HTTP requests per second (0 = unlimited)
    #[arg(long, default_value_t = 10, help_heading = "PERFORMANCE")]
    pub rate: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, help_heading = "PERFORMANCE")]
    pub timeout: u64,

    /// Skip the banner display
    #[arg(long, help_heading = "OUTPUT")]
    pub no_banner: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub quiet: bool,

    /// Verbose output (debug level)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", help_heading = "OUTPUT")]
    pub format: String,

    /// Output file path
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,
}
