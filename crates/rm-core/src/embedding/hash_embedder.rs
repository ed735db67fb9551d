use super::{cosine_similarity, EmbeddingConfig, SimilarityProvider};
use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};

// Fixed seeds keep the hash deterministic across processes and Rust
// versions. Changing them changes every embedding; bump version() too.
const HASH_SEED_K0: u64 = 0x524d_4841_5348_0001;
const HASH_SEED_K1: u64 = 0x1000_8453_4148_4d52;

/// Feature-hashing embedder over character trigrams.
///
/// No training and no model artifacts: each trigram of the lowercased text
/// hashes to a dimension index with a sign bit, and the accumulated vector is
/// L2 normalized. Surface variants of the same skill ("react", "react.js",
/// "reactjs") share most trigrams, so they land close in the embedded space,
/// which is exactly what the skill scorer's semantic fallback needs.
pub struct HashEmbedder {
    config: EmbeddingConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut cfg = config;
        cfg.dimension = cfg.dimension.max(1);
        Self { config: cfg }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    fn token_sign(&self, token: &str) -> f32 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K1, HASH_SEED_K0);
        token.hash(&mut hasher);
        if hasher.finish() % 2 == 0 { 1.0 } else { -1.0 }
    }
}

/// Padded character trigrams of the lowercased text. Texts shorter than a
/// trigram produce a single token so they still embed.
fn char_trigrams(text: &str) -> Vec<String> {
    let padded: Vec<char> = format!(" {} ", text.trim().to_lowercase()).chars().collect();
    if padded.len() < 3 {
        return vec![padded.iter().collect()];
    }
    padded.windows(3).map(|w| w.iter().collect()).collect()
}

impl SimilarityProvider for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        // Bump when the trigram scheme or seeds change.
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.config.dimension];

        for trigram in char_trigrams(text) {
            let idx = self.hash_token(&trigram);
            vector[idx] += self.token_sign(&trigram);
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    fn similarity(&self, a: &str, b: &str) -> f32 {
        cosine_similarity(&self.embed(a), &self.embed(b))
    }
}
