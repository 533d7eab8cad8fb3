//! Wordlist bruteforce across every directory the scan has seen

use crate::core::bloom::SeenSet;
use crate::core::scope::Scope;
use crate::http::client::HttpClient;
use crate::negotiation::discover::fetch_alternates;
use crate::negotiation::probe::NegotiationProber;
use crate::reporting::reporter::Reporter;
use crate::scanner::fuzzable::FuzzableRequest;
use crate::scanner::urlext;
use futures::stream::{self, StreamExt};
use reqwest::header::HeaderMap;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Collects directories as requests flow through the scan and, on each
/// bruteforce pass, expands the unseen ones against the wordlist through a
/// bounded worker pool.
///
/// Enqueueing is always cheap and always done, whatever the current
/// verdict: directories banked while the verdict was still unknown get
/// bruteforced once it resolves.
pub struct BruteforceCoordinator {
    client: Arc<HttpClient>,
    prober: Arc<NegotiationProber>,
    seen_dirs: Arc<SeenSet>,
    scope: Scope,
    kb: Arc<Reporter>,
    queue: Mutex<VecDeque<Url>>,
    wordlist: PathBuf,
    wordlist_failed: AtomicBool,
    threads: usize,
}

impl BruteforceCoordinator {
    pub fn new(
        client: Arc<HttpClient>,
        prober: Arc<NegotiationProber>,
        seen_dirs: Arc<SeenSet>,
        scope: Scope,
        kb: Arc<Reporter>,
        wordlist: PathBuf,
        threads: usize,
    ) -> Self {
        Self {
            client,
            prober,
            seen_dirs,
            scope,
            kb,
            queue: Mutex::new(VecDeque::new()),
            wordlist,
            wordlist_failed: AtomicBool::new(false),
            threads: threads.max(1),
        }
    }

    /// Bank a URL for the next bruteforce pass. Non-blocking.
    pub fn enqueue(&self, url: &Url) {
        self.queue
            .lock()
            .expect("bruteforce queue lock poisoned")
            .push_back(url.clone());
    }

    /// Drain the queue, expand unseen directories against the wordlist, and
    /// probe every candidate through the worker pool. Completion order is
    /// whatever the network gives us; the result is a set, not a sequence.
    pub async fn bruteforce(&self) -> Vec<FuzzableRequest> {
        let drained: Vec<Url> = {
            let mut queue = self.queue.lock().expect("bruteforce queue lock poisoned");
            queue.drain(..).collect()
        };
        if drained.is_empty() {
            return Vec::new();
        }

        let Some(words) = self.load_wordlist() else {
            return Vec::new();
        };

        // Candidates are generated lazily: the worker pool pulls them one at
        // a time, so memory stays flat however large the wordlist is.
        let seen_dirs = Arc::clone(&self.seen_dirs);
        let candidates = drained
            .into_iter()
            .flat_map(|url| urlext::directories(&url))
            .filter(move |dir| seen_dirs.check_and_insert(dir.as_str()))
            .flat_map(move |dir| {
                let words = Arc::clone(&words);
                (0..words.len()).filter_map(move |i| dir.join(&words[i]).ok())
            });

        let nested: Vec<Vec<FuzzableRequest>> = stream::iter(candidates)
            .map(|candidate| self.probe_candidate(candidate))
            .buffer_unordered(self.threads)
            .collect()
            .await;

        nested.into_iter().flatten().collect()
    }

    async fn probe_candidate(&self, candidate: Url) -> Vec<FuzzableRequest> {
        let outcome = match self.prober.probe(&candidate, &HeaderMap::new()).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!("bruteforce probe failed for {}: {}", candidate, err);
                return Vec::new();
            }
        };
        if outcome.alternates.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            "{} negotiates {} alternates",
            candidate,
            outcome.alternates.len()
        );
        fetch_alternates(
            &self.client,
            &candidate,
            &outcome.alternates,
            &self.scope,
            &self.kb,
        )
        .await
    }

    /// Read the wordlist, one stem per line. An unreadable wordlist is a
    /// configuration problem, reported once; bruteforcing stays off for the
    /// rest of the scan.
    fn load_wordlist(&self) -> Option<Arc<Vec<String>>> {
        if self.wordlist_failed.load(Ordering::Relaxed) {
            return None;
        }

        match fs::read_to_string(&self.wordlist) {
            Ok(content) => {
                let words: Vec<String> = content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect();
                Some(Arc::new(words))
            }
            Err(err) => {
                tracing::warn!(
                    "cannot read wordlist {}: {} - skipping bruteforce for this scan",
                    self.wordlist.display(),
                    err
                );
                self.wordlist_failed.store(true, Ordering::Relaxed);
                None
            }
        }
    }
}
