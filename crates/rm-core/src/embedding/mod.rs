pub mod hash_embedder;
pub mod similarity;

pub use hash_embedder::HashEmbedder;
pub use similarity::cosine_similarity;

/// Pairings above this cosine similarity count as a semantic skill match.
pub const SEMANTIC_MATCH_THRESHOLD: f32 = 0.70;

/// Pluggable semantic similarity backend.
///
/// Implementations:
/// - HashEmbedder: feature hashing over character trigrams (deterministic,
///   no model download, no network)
/// - remote/model-backed providers plug in through the same trait
///
/// The matching core depends only on this interface and runs without any
/// provider at all (direct string matching only). Implementations must not
/// surface transport failures: a timeout or unavailable backend returns 0.0
/// similarity, which the skill scorer reads as "no semantic match".
pub trait SimilarityProvider: Send + Sync {
    /// Implementation name ("hash", "remote", ...).
    fn name(&self) -> &'static str;

    /// Version string for result provenance.
    fn version(&self) -> &str;

    /// Embedding dimension.
    fn dimension(&self) -> usize;

    /// Embed a short text (a skill token) into a vector.
    fn embed(&self, text: &str) -> Vec<f32>;

    /// Similarity of two texts in [0.0, 1.0].
    fn similarity(&self, a: &str, b: &str) -> f32 {
        cosine_similarity(&self.embed(a), &self.embed(b))
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Whether semantic fallback is active at all.
    pub enabled: bool,
    /// Embedding dimension (powers of two recommended: 256, 512, 1024).
    pub dimension: usize,
    /// Provider name for the factory.
    pub provider: String,
    /// Similarity acceptance threshold for skill pairings.
    pub threshold: f32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dimension: 256,
            provider: "hash".into(),
            threshold: SEMANTIC_MATCH_THRESHOLD,
        }
    }
}

/// Provider factory. Unknown names fall back to the hash embedder.
pub fn create_provider(name: &str, config: EmbeddingConfig) -> Box<dyn SimilarityProvider> {
    match name {
        "hash" => Box::new(HashEmbedder::new(config)),
        _ => Box::new(HashEmbedder::new(config)),
    }
}

/// Read embedding settings from the environment.
pub fn load_config_from_env() -> EmbeddingConfig {
    EmbeddingConfig {
        enabled: std::env::var("RM_EMBEDDING_ENABLED")
            .ok()
            .map(|s| s == "true" || s == "1")
            .unwrap_or(false),
        dimension: std::env::var("RM_EMBEDDING_DIMENSION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        provider: std::env::var("RM_EMBEDDING_PROVIDER").unwrap_or_else(|_| "hash".into()),
        threshold: std::env::var("RM_SEMANTIC_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(SEMANTIC_MATCH_THRESHOLD),
    }
}

/// Initialize a provider from the environment. Returns no provider when
/// semantic fallback is disabled, which degrades matching to direct string
/// comparison only.
pub fn init_provider_from_env() -> (EmbeddingConfig, Option<Box<dyn SimilarityProvider>>) {
    let config = load_config_from_env();
    if !config.enabled {
        return (config, None);
    }

    let name = config.provider.clone();
    let provider = create_provider(&name, config.clone());
    (config, Some(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_falls_back_to_hash() {
        let provider = create_provider("does-not-exist", EmbeddingConfig::default());
        assert_eq!(provider.name(), "hash");
        assert_eq!(provider.dimension(), 256);
    }

    #[test]
    fn default_config_is_disabled() {
        let config = EmbeddingConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.threshold, SEMANTIC_MATCH_THRESHOLD);
    }
}
