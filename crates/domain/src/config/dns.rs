use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// TTL placed on every synthesized record. Answers are computed per query,
    /// so the default asks resolvers not to cache them.
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            answer_ttl: default_answer_ttl(),
        }
    }
}

fn default_answer_ttl() -> u32 {
    0
}
