//! Content-Negotiation Discovery Module
//!
//! Some servers answer a request for a bare stem ("/backup") with an
//! `Alternates` header listing every file that shares the stem
//! ("backup.zip", "backup.php.bak", ...). This module turns that behavior
//! into a discovery technique with three distinct phases:
//!
//! 1. **Verification**: decide once, with a bounded number of probes,
//!    whether the target negotiates at all.
//! 2. **Sibling discovery**: for every known resource, request its stem and
//!    fetch whatever alternates the server admits to.
//! 3. **Bruteforce**: expand every seen directory against a wordlist of
//!    common stems through a bounded worker pool.
//!
//! Directories and stems are each probed at most once per scan, enforced by
//! two independent probabilistic seen-sets, so the module stays cheap on
//! large sites.

pub mod bruteforce;
pub mod discover;
pub mod engine;
pub mod probe;
pub mod verdict;

pub use engine::DiscoveryEngine;
pub use verdict::Verdict;

use std::path::PathBuf;

/// Name under which this module records knowledge-base findings.
pub const PLUGIN_NAME: &str = "content_negotiation";

/// Discovery engine configuration
#[derive(Debug, Clone)]
pub struct NegotiationConfig {
    /// Wordlist for the file-name bruteforce phase
    pub wordlist: PathBuf,

    /// Inconclusive verification probes tolerated before concluding the
    /// target does not negotiate
    pub retries: u32,

    /// Bruteforce worker pool width
    pub threads: usize,

    /// Expected items per seen-set before the first growth
    pub seen_capacity: usize,

    /// Seen-set false-positive rate
    pub seen_fp_rate: f64,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            wordlist: PathBuf::from("wordlists/common_filenames.txt"),
            retries: 3,
            threads: 10,
            seen_capacity: 4096,
            seen_fp_rate: 0.001,
        }
    }
}
