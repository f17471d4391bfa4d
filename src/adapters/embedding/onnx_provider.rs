//! Local BERT-style embedding model run through ONNX Runtime.
//!
//! Compiled with the `onnx` feature. The runtime library is loaded at
//! start-up from `ORT_DYLIB_PATH`. Text is tokenized with a WordPiece
//! vocabulary when one is configured, otherwise words are hashed into the
//! vocabulary id range. The model's first output is pooled into one
//! L2-normalized vector.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;

use crate::ports::{EmbeddingError, EmbeddingProvider, EmbeddingProviderInfo};

/// Provider name reported in `EmbeddingProviderInfo`.
pub const ONNX_PROVIDER: &str = "onnx";

/// Longest input the model sees, special tokens included.
const MAX_TOKENS: usize = 512;

/// BERT special token ids, used when the vocabulary does not list them.
const CLS_ID: i64 = 101;
const SEP_ID: i64 = 102;
const UNK_ID: i64 = 100;

/// Upper bound for hashed token ids.
const HASHED_VOCAB: u32 = 29_999;

/// Words longer than this become a single `[UNK]`.
const MAX_WORD_CHARS: usize = 100;

/// How the sequence output becomes one vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pooling {
    /// Hidden state of the first (`[CLS]`) token.
    #[default]
    Cls,
    /// Mean of all token hidden states.
    Mean,
}

/// Configuration for [`OnnxEmbeddingProvider`].
#[derive(Debug, Clone)]
pub struct OnnxEmbeddingConfig {
    model_path: PathBuf,
    vocab_path: Option<PathBuf>,
    pooling: Pooling,
    intra_threads: usize,
}

impl OnnxEmbeddingConfig {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            vocab_path: None,
            pooling: Pooling::default(),
            intra_threads: 2,
        }
    }

    /// Uses a WordPiece `vocab.txt` (one token per line, id = line number).
    pub fn with_vocab(mut self, vocab_path: impl Into<PathBuf>) -> Self {
        self.vocab_path = Some(vocab_path.into());
        self
    }

    pub fn with_pooling(mut self, pooling: Pooling) -> Self {
        self.pooling = pooling;
        self
    }

    pub fn with_intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = threads.max(1);
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tokenization
// ════════════════════════════════════════════════════════════════════════════════

/// WordPiece vocabulary.
#[derive(Debug, Clone)]
struct Vocabulary {
    ids: HashMap<String, i64>,
    cls: i64,
    sep: i64,
    unk: i64,
}

impl Vocabulary {
    fn parse(raw: &str) -> Self {
        let ids: HashMap<String, i64> = raw
            .lines()
            .enumerate()
            .map(|(index, token)| (token.trim_end().to_string(), index as i64))
            .collect();
        let lookup = |token: &str, fallback: i64| ids.get(token).copied().unwrap_or(fallback);
        let (cls, sep, unk) = (
            lookup("[CLS]", CLS_ID),
            lookup("[SEP]", SEP_ID),
            lookup("[UNK]", UNK_ID),
        );
        Self { ids, cls, sep, unk }
    }

    fn load(path: &Path) -> Result<Self, EmbeddingError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| EmbeddingError::model_load_failed(path.display().to_string(), e.to_string()))?;
        let vocabulary = Self::parse(&raw);
        if vocabulary.ids.is_empty() {
            return Err(EmbeddingError::model_load_failed(
                path.display().to_string(),
                "vocabulary is empty",
            ));
        }
        Ok(vocabulary)
    }

    /// Greedy longest-match-first split; continuation pieces carry `##`.
    fn push_word(&self, word: &str, ids: &mut Vec<i64>) {
        if word.chars().count() > MAX_WORD_CHARS {
            ids.push(self.unk);
            return;
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        while start < word.len() {
            let mut end = word.len();
            let mut matched = None;
            while start < end {
                let piece = &word[start..end];
                let key = if start > 0 {
                    format!("##{piece}")
                } else {
                    piece.to_string()
                };
                if let Some(&id) = self.ids.get(&key) {
                    matched = Some((id, end));
                    break;
                }
                end = word[..end]
                    .char_indices()
                    .next_back()
                    .map_or(start, |(i, _)| i);
            }
            match matched {
                Some((id, next)) => {
                    pieces.push(id);
                    start = next;
                }
                None => {
                    ids.push(self.unk);
                    return;
                }
            }
        }
        ids.extend(pieces);
    }
}

#[derive(Debug, Clone)]
enum Tokenizer {
    WordPiece(Vocabulary),
    Hashed,
}

impl Tokenizer {
    /// `[CLS] tokens… [SEP]`, truncated to `MAX_TOKENS`.
    fn encode(&self, text: &str) -> Vec<i64> {
        let (cls, sep) = match self {
            Tokenizer::WordPiece(vocab) => (vocab.cls, vocab.sep),
            Tokenizer::Hashed => (CLS_ID, SEP_ID),
        };

        let mut ids = vec![cls];
        for word in basic_tokens(text) {
            match self {
                Tokenizer::WordPiece(vocab) => vocab.push_word(&word, &mut ids),
                Tokenizer::Hashed => ids.push(hashed_id(&word)),
            }
        }
        ids.truncate(MAX_TOKENS - 1);
        ids.push(sep);
        ids
    }
}

/// Lowercases, splits on whitespace and makes each punctuation mark its own token.
fn basic_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            current.push(c);
            continue;
        }
        if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
        if !c.is_whitespace() && !c.is_control() {
            tokens.push(c.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// FNV-1a into `1..=HASHED_VOCAB`.
fn hashed_id(word: &str) -> i64 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in word.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    i64::from(1 + hash % HASHED_VOCAB)
}

// ════════════════════════════════════════════════════════════════════════════════
// Pooling
// ════════════════════════════════════════════════════════════════════════════════

/// Reduces a `[1, seq, dims]` or `[1, dims]` output to one vector.
fn pool(shape: &[i64], data: &[f32], pooling: Pooling) -> Result<Vec<f32>, EmbeddingError> {
    let dim = |i: usize| usize::try_from(shape[i]).unwrap_or(0);
    let vector = match shape.len() {
        3 => {
            let (seq, dims) = (dim(1), dim(2));
            if seq == 0 || dims == 0 || data.len() < seq * dims {
                return Err(EmbeddingError::inference_failed(format!(
                    "output shape {shape:?} does not match {} values",
                    data.len()
                )));
            }
            match pooling {
                Pooling::Cls => data[..dims].to_vec(),
                Pooling::Mean => {
                    let mut sum = vec![0.0f32; dims];
                    for token in data[..seq * dims].chunks_exact(dims) {
                        for (acc, value) in sum.iter_mut().zip(token) {
                            *acc += value;
                        }
                    }
                    sum.iter().map(|v| v / seq as f32).collect()
                }
            }
        }
        2 => {
            let dims = dim(1);
            if dims == 0 || data.len() < dims {
                return Err(EmbeddingError::inference_failed(format!(
                    "output shape {shape:?} does not match {} values",
                    data.len()
                )));
            }
            data[..dims].to_vec()
        }
        _ => {
            return Err(EmbeddingError::inference_failed(format!(
                "unexpected output shape {shape:?}"
            )))
        }
    };
    Ok(l2_normalize(vector))
}

fn l2_normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        vector.iter_mut().for_each(|v| *v /= norm);
    }
    vector
}

// ════════════════════════════════════════════════════════════════════════════════
// Provider
// ════════════════════════════════════════════════════════════════════════════════

struct OnnxModel {
    /// `Session::run` needs `&mut`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    pooling: Pooling,
}

impl OnnxModel {
    fn infer(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let input_ids = self.tokenizer.encode(text);
        let shape = vec![1i64, input_ids.len() as i64];
        let attention_mask = vec![1i64; input_ids.len()];

        let ids_tensor = Tensor::from_array((shape.clone(), input_ids))
            .map_err(|e| EmbeddingError::inference_failed(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((shape, attention_mask))
            .map_err(|e| EmbeddingError::inference_failed(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| EmbeddingError::inference_failed("session lock poisoned"))?;
        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| EmbeddingError::inference_failed(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EmbeddingError::inference_failed("model produced no output"))?;
        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| EmbeddingError::inference_failed(format!("tensor extraction failed: {e}")))?;

        pool(shape, data, self.pooling)
    }
}

/// Embedding provider backed by a local ONNX model.
pub struct OnnxEmbeddingProvider {
    model: Arc<OnnxModel>,
    info: EmbeddingProviderInfo,
}

impl OnnxEmbeddingProvider {
    /// Loads the model and vocabulary, then embeds an empty string once to
    /// learn the output size.
    ///
    /// # Errors
    ///
    /// - `ModelLoadFailed` if the model or vocabulary cannot be read or the
    ///   runtime rejects the model
    /// - `InferenceFailed` if the first embedding fails
    pub fn load(config: OnnxEmbeddingConfig) -> Result<Self, EmbeddingError> {
        let path = config.model_path.display().to_string();
        if !config.model_path.is_file() {
            return Err(EmbeddingError::model_load_failed(path, "model file not found"));
        }

        let tokenizer = match &config.vocab_path {
            Some(vocab_path) => Tokenizer::WordPiece(Vocabulary::load(vocab_path)?),
            None => Tokenizer::Hashed,
        };

        let session = Session::builder()
            .map_err(|e| EmbeddingError::model_load_failed(&path, e.to_string()))?
            .with_intra_threads(config.intra_threads)
            .map_err(|e| EmbeddingError::model_load_failed(&path, e.to_string()))?
            .commit_from_file(&config.model_path)
            .map_err(|e| EmbeddingError::model_load_failed(&path, e.to_string()))?;

        let model = OnnxModel {
            session: Mutex::new(session),
            tokenizer,
            pooling: config.pooling,
        };
        let dimensions = model.infer("")?.len();
        if dimensions == 0 {
            return Err(EmbeddingError::model_load_failed(path, "model output is empty"));
        }

        let model_name = config
            .model_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        tracing::info!(
            model = %model_name,
            dimensions,
            pooling = ?config.pooling,
            wordpiece = config.vocab_path.is_some(),
            "ONNX embedding model loaded"
        );

        Ok(Self {
            model: Arc::new(model),
            info: EmbeddingProviderInfo::new(ONNX_PROVIDER, model_name, dimensions),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OnnxEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let model = Arc::clone(&self.model);
        let text = text.to_owned();
        let embedding = tokio::task::spawn_blocking(move || model.infer(&text))
            .await
            .map_err(|e| EmbeddingError::inference_failed(format!("inference task failed: {e}")))??;

        if embedding.len() != self.info.dimensions {
            return Err(EmbeddingError::dimension_mismatch(
                self.info.dimensions,
                embedding.len(),
            ));
        }
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.info.dimensions
    }

    fn provider_info(&self) -> EmbeddingProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vocabulary() -> Vocabulary {
        let mut lines = vec!["[PAD]".to_string()];
        lines.extend((1..100).map(|i| format!("[unused{i}]")));
        lines.extend(["[UNK]", "[CLS]", "[SEP]", "computer", "science", "bio", "##logy", "##chem", ","]
            .iter()
            .map(|s| s.to_string()));
        Vocabulary::parse(&lines.join("\n"))
    }

    #[test]
    fn vocabulary_reads_special_tokens_by_line() {
        let vocab = vocabulary();
        assert_eq!((vocab.unk, vocab.cls, vocab.sep), (100, 101, 102));
        assert_eq!(vocab.ids.get("computer"), Some(&103));
    }

    #[test]
    fn wordpiece_splits_into_continuations() {
        let tokenizer = Tokenizer::WordPiece(vocabulary());
        assert_eq!(
            tokenizer.encode("Computer Science, Biology"),
            vec![101, 103, 104, 108, 105, 106, 102]
        );
    }

    #[test]
    fn unmatched_word_becomes_unknown() {
        let tokenizer = Tokenizer::WordPiece(vocabulary());
        assert_eq!(tokenizer.encode("biox"), vec![101, 100, 102]);
    }

    #[test]
    fn hashed_ids_stay_in_vocab_range() {
        let ids = Tokenizer::Hashed.encode("Mechanical Engineering");
        assert_eq!(ids.len(), 4);
        assert_eq!((ids[0], ids[3]), (CLS_ID, SEP_ID));
        assert!(ids[1..3].iter().all(|&id| (1..=i64::from(HASHED_VOCAB)).contains(&id)));
        assert_eq!(ids, Tokenizer::Hashed.encode("mechanical   engineering"));
    }

    #[test]
    fn long_input_is_truncated() {
        let text = "law ".repeat(1000);
        let ids = Tokenizer::Hashed.encode(&text);
        assert_eq!(ids.len(), MAX_TOKENS);
        assert_eq!(ids.last(), Some(&SEP_ID));
    }

    #[test]
    fn basic_tokens_separate_punctuation() {
        assert_eq!(basic_tokens("Pre-Med!"), vec!["pre", "-", "med", "!"]);
        assert!(basic_tokens("  \t").is_empty());
    }

    #[test]
    fn cls_pooling_takes_first_token() {
        let data = [3.0, 4.0, 10.0, 10.0];
        let pooled = pool(&[1, 2, 2], &data, Pooling::Cls).unwrap();
        assert_eq!(pooled, vec![0.6, 0.8]);
    }

    #[test]
    fn mean_pooling_averages_tokens() {
        let data = [1.0, 0.0, 1.0, 2.0];
        let pooled = pool(&[1, 2, 2], &data, Pooling::Mean).unwrap();
        let expected = 1.0 / 2f32.sqrt();
        assert!((pooled[0] - expected).abs() < 1e-6);
        assert!((pooled[1] - expected).abs() < 1e-6);
    }

    #[test]
    fn pooled_output_passes_through() {
        let pooled = pool(&[1, 2], &[0.0, 5.0], Pooling::Mean).unwrap();
        assert_eq!(pooled, vec![0.0, 1.0]);
    }

    #[test]
    fn unexpected_shapes_are_inference_errors() {
        assert!(matches!(
            pool(&[4], &[1.0; 4], Pooling::Cls),
            Err(EmbeddingError::InferenceFailed(_))
        ));
        assert!(matches!(
            pool(&[1, 3, 4], &[1.0; 4], Pooling::Cls),
            Err(EmbeddingError::InferenceFailed(_))
        ));
    }

    #[test]
    fn missing_model_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bert-base-uncased.onnx");

        let err = OnnxEmbeddingProvider::load(OnnxEmbeddingConfig::new(&path))
            .err()
            .unwrap();

        assert_eq!(
            err,
            EmbeddingError::model_load_failed(path.display().to_string(), "model file not found")
        );
    }

    #[test]
    fn missing_vocabulary_fails_before_runtime_starts() {
        let mut model = tempfile::NamedTempFile::new().unwrap();
        model.write_all(b"not a model").unwrap();
        let vocab = model.path().with_extension("vocab.txt");

        let err = OnnxEmbeddingProvider::load(OnnxEmbeddingConfig::new(model.path()).with_vocab(&vocab))
            .err()
            .unwrap();

        assert!(
            matches!(err, EmbeddingError::ModelLoadFailed { ref path, .. } if path == &vocab.display().to_string()),
            "unexpected error: {err:?}"
        );
    }
}
