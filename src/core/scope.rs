use url::Url;

/// Host allow-list derived from the scan target.
///
/// Discovered links and alternate names can point anywhere; only URLs on the
/// target host (same host and port) are ever probed.
#[derive(Debug, Clone)]
pub struct Scope {
    allowed: Vec<(String, Option<u16>)>,
}

impl Scope {
    pub fn new(target: &str) -> anyhow::Result<Self> {
        let url = Url::parse(target)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("target has no host: {}", target))?;

        Ok(Self {
            allowed: vec![(host.to_string(), url.port())],
        })
    }

    pub fn is_in_scope(&self, url: &Url) -> bool {
        match url.host_str() {
            Some(host) => self
                .allowed
                .iter()
                .any(|(h, p)| h == host && *p == url.port()),
            None => false,
        }
    }
}
