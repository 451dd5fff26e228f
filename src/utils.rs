use std::collections::HashSet;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Splits a comma separated id list, trimming blanks and dropping empty and
/// repeated entries while keeping the first-seen order.
pub fn split_ids(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .map(str::to_string)
        .collect()
}

/// Number of batches needed to cover `len` items.
pub fn batch_count(len: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    len.div_ceil(batch_size)
}

/// Formats a centrality score the way every report and chart prints it.
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}
