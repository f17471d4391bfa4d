//! Feature-hashing embedding provider.
//!
//! Deterministic, offline and dependency-light: each text is tokenised into
//! lowercase words and boundary-marked character trigrams, every token is
//! hashed with SHA-256 into one signed bucket, and the result is
//! L2-normalised. Texts that share words or word fragments land close
//! together; identical texts produce identical vectors.
//!
//! Changing the tokeniser or hashing scheme changes every vector, so bump
//! [`HASH_MODEL`] when doing so.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::ports::{EmbeddingError, EmbeddingProvider, EmbeddingProviderInfo};

/// Model identifier reported for this provider.
pub const HASH_MODEL: &str = "feature-hash-v1";

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic embedding provider based on feature hashing.
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
}

impl HashEmbeddingProvider {
    /// Creates a provider producing vectors of `dimensions` entries (minimum 1).
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Embeds text synchronously.
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        for (token, weight) in tokenize(text) {
            let (index, sign) = self.bucket(&token);
            vector[index] += sign * weight;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    /// Maps a token to a bucket index and a sign.
    fn bucket(&self, token: &str) -> (usize, f32) {
        let digest = Sha256::digest(token.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(head) % self.dimensions as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(384)
    }
}

/// Lowercase words plus `#word#` character trigrams.
fn tokenize(text: &str) -> Vec<(String, f32)> {
    let mut tokens = Vec::new();
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        let word = word.to_lowercase();
        let marked: Vec<char> = format!("#{}#", word).chars().collect();
        tokens.push((format!("w:{}", word), WORD_WEIGHT));
        for gram in marked.windows(3) {
            tokens.push((format!("g:{}", gram.iter().collect::<String>()), TRIGRAM_WEIGHT));
        }
    }
    tokens
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.embed_text(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_info(&self) -> EmbeddingProviderInfo {
        EmbeddingProviderInfo::new("hash", HASH_MODEL, self.dimensions)
    }
}
