use std::collections::{HashMap, HashSet};

use unicode_normalization::UnicodeNormalization;

/// Convert heading text into an identifier suitable for an `id` attribute.
///
/// Text is decomposed (NFKD) and folded to ASCII, so `São Tomé` becomes
/// `sao-tome`. Everything but word characters, whitespace and hyphens is
/// dropped, surrounding whitespace is trimmed, and each run of whitespace or
/// hyphens becomes one hyphen. The result may be empty.
pub fn generate_anchor(text: &str) -> String {
    let kept: String = text
        .nfkd()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-' || ch.is_ascii_whitespace())
        .collect();

    let mut anchor = String::with_capacity(kept.len());
    let mut in_separator = false;
    for ch in kept.trim().chars() {
        if ch == '-' || ch.is_ascii_whitespace() {
            if !in_separator {
                anchor.push('-');
                in_separator = true;
            }
        } else {
            anchor.push(ch.to_ascii_lowercase());
            in_separator = false;
        }
    }

    anchor
}

/// Hands out document-unique anchors in encounter order.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `base` the first time, then `base-2`, `base-3`, ...
    ///
    /// An empty base is always numbered (`-1`, `-2`, ...) so no heading ends up
    /// with an empty id. Candidates already handed out are skipped.
    pub fn unique(&mut self, base: &str) -> String {
        let seen = self.counts.entry(base.to_owned()).or_insert(0);
        loop {
            *seen += 1;
            let candidate = if *seen == 1 && !base.is_empty() {
                base.to_owned()
            } else {
                format!("{base}-{seen}")
            };
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
