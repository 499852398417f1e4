use serde::{Deserialize, Serialize};

use crate::config::MAX_LAYER;

/// Selection criterion threaded through every probe.
///
/// The controller never inspects a filter beyond asking whether it can match
/// anything at all; an empty filter short-circuits to "no hit" before the
/// scene is queried.
pub trait QueryFilter {
    fn matches_nothing(&self) -> bool;
}

impl QueryFilter for u32 {
    fn matches_nothing(&self) -> bool {
        *self == 0
    }
}

impl QueryFilter for u64 {
    fn matches_nothing(&self) -> bool {
        *self == 0
    }
}

/// Growable set of layer ids in `0..=MAX_LAYER`.
///
/// Trailing zero words are trimmed on every mutation, and on deserialisation,
/// so equal sets compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLayerMask")]
pub struct LayerMask {
    words: Vec<u64>,
}

#[derive(Deserialize)]
struct RawLayerMask {
    words: Vec<u64>,
}

impl From<RawLayerMask> for LayerMask {
    fn from(raw: RawLayerMask) -> Self {
        let mut mask = LayerMask { words: raw.words };
        let (last_word, _) = LayerMask::locate(MAX_LAYER);
        if mask.words.len() > last_word + 1 {
            log::warn!(
                "layer mask words beyond layer {MAX_LAYER} dropped ({} words given)",
                mask.words.len()
            );
            mask.words.truncate(last_word + 1);
        }
        mask.trim();
        mask
    }
}

impl LayerMask {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_layers<I: IntoIterator<Item = u32>>(layers: I) -> Self {
        layers.into_iter().collect()
    }

    pub fn with(mut self, layer: u32) -> Self {
        self.insert(layer);
        self
    }

    /// Adds `layer`. Ids above [`MAX_LAYER`] are ignored with a warning and `false` is returned.
    pub fn insert(&mut self, layer: u32) -> bool {
        if layer > MAX_LAYER {
            log::warn!("layer {layer} ignored: layer ids are limited to {MAX_LAYER}");
            return false;
        }
        let (word, bit) = Self::locate(layer);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= bit;
        true
    }

    pub fn remove(&mut self, layer: u32) {
        let (word, bit) = Self::locate(layer);
        if let Some(slot) = self.words.get_mut(word) {
            *slot &= !bit;
        }
        self.trim();
    }

    pub fn contains(&self, layer: u32) -> bool {
        let (word, bit) = Self::locate(layer);
        self.words.get(word).is_some_and(|w| w & bit != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Layer ids in ascending order.
    pub fn layers(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().enumerate().flat_map(|(word, bits)| {
            (0..64u32)
                .filter(move |bit| bits & (1u64 << bit) != 0)
                .map(move |bit| word as u32 * 64 + bit)
        })
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }

    fn locate(layer: u32) -> (usize, u64) {
        ((layer / 64) as usize, 1u64 << (layer % 64))
    }
}

impl FromIterator<u32> for LayerMask {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut mask = LayerMask::empty();
        for layer in iter {
            mask.insert(layer);
        }
        mask
    }
}

impl QueryFilter for LayerMask {
    fn matches_nothing(&self) -> bool {
        self.is_empty()
    }
}
