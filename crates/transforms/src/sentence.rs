//! Name supplies for replacement identifiers.
//!
//! A [`SentenceGenerator`] hands out candidate names of an exact character length and
//! never repeats itself. The production generator glues random English words together
//! in camelCase (`runBlueLake`), so mangled selectors still look like plausible method
//! names in a class dump.

use objmangle_core::accessor::capitalize_first;
use objmangle_core::Seed;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Source of unique replacement names.
pub trait SentenceGenerator {
    /// Returns a name of exactly `length` characters that this generator has never
    /// returned before, or `None` once no such name can be produced.
    fn unique_sentence(&mut self, length: usize) -> Option<String>;
}

/// Default number of compositions tried before a length is declared exhausted.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

const WORDS: &[&str] = &[
    "a", "i", "am", "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it",
    "me", "my", "no", "of", "on", "or", "so", "to", "up", "us", "we", "act", "add", "age",
    "air", "all", "and", "any", "arm", "art", "ask", "bad", "bag", "bed", "big", "box", "boy",
    "bus", "buy", "can", "car", "cat", "cup", "cut", "day", "dog", "dry", "ear", "eat", "egg",
    "end", "eye", "far", "few", "fly", "fun", "gas", "get", "hat", "hot", "ice", "job", "key",
    "kid", "law", "leg", "lie", "low", "map", "mix", "new", "now", "oil", "old", "one", "own",
    "pay", "pen", "pie", "put", "red", "run", "sea", "see", "set", "sky", "sun", "tea", "top",
    "toy", "two", "war", "way", "wet", "win", "yes", "able", "back", "ball", "bank", "bird",
    "blue", "boat", "body", "book", "cake", "calm", "card", "city", "cold", "cool", "dark",
    "deep", "door", "draw", "easy", "face", "fall", "farm", "fast", "fish", "free", "game",
    "gift", "gold", "good", "hand", "hill", "home", "idea", "iron", "jump", "kind", "king",
    "lake", "land", "leaf", "life", "line", "lion", "long", "love", "mind", "moon", "name",
    "nice", "note", "open", "page", "park", "rain", "read", "rich", "road", "rock", "safe",
    "salt", "ship", "shoe", "slow", "snow", "song", "star", "tall", "time", "tree", "walk",
    "warm", "wave", "wind", "wise", "wood", "word", "work", "yard", "zero", "apple", "beach",
    "bread", "brick", "chair", "clean", "cloud", "dance", "dream", "earth", "field", "flame",
    "fruit", "glass", "grass", "green", "happy", "heart", "horse", "house", "light", "lemon",
    "magic", "music", "night", "ocean", "paper", "party", "piano", "plant", "quiet", "river",
    "round", "smile", "sound", "space", "stone", "storm", "sweet", "table", "tiger", "train",
    "water", "whale", "world", "yellow", "animal", "banana", "bridge", "butter", "candle",
    "castle", "circle", "silver", "flower", "forest", "garden", "golden", "island", "jungle",
    "letter", "market", "mirror", "orange", "pencil", "planet", "purple", "rabbit", "rocket",
    "shadow", "spring", "summer", "travel", "window", "winter", "balance", "blanket",
    "capture", "chicken", "diamond", "evening", "harvest", "journey", "kitchen", "morning",
    "picture", "rainbow", "station", "thunder", "weather", "mountain", "elephant",
    "sunlight", "treasure", "umbrella", "butterfly", "adventure", "chocolate",
];

/// Builds camelCase sentences out of random English words.
///
/// Sentences are composed word by word: each step picks a random word that still fits in
/// the remaining length, so every length of at least one character can be reached. A
/// length counts as exhausted once `max_attempts` consecutive compositions only produce
/// sentences that were already issued.
pub struct EnglishSentenceGenerator {
    rng: StdRng,
    /// Word list sorted by length, so the words fitting `n` characters form a prefix.
    words: Vec<&'static str>,
    issued: HashSet<String>,
    exhausted: HashSet<usize>,
    max_attempts: usize,
}

impl EnglishSentenceGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self::with_max_attempts(rng, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(rng: StdRng, max_attempts: usize) -> Self {
        let mut words = WORDS.to_vec();
        words.sort_by_key(|word| word.len());
        Self {
            rng,
            words,
            issued: HashSet::new(),
            exhausted: HashSet::new(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.create_deterministic_rng())
    }

    /// Number of sentences handed out so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    fn compose(&mut self, length: usize) -> Option<String> {
        let mut sentence = String::with_capacity(length);
        let mut remaining = length;
        while remaining > 0 {
            let fitting = self.words.partition_point(|word| word.len() <= remaining);
            let word = *self.words[..fitting].choose(&mut self.rng)?;
            if sentence.is_empty() {
                sentence.push_str(word);
            } else {
                sentence.push_str(&capitalize_first(word));
            }
            remaining -= word.len();
        }
        Some(sentence)
    }
}

impl SentenceGenerator for EnglishSentenceGenerator {
    fn unique_sentence(&mut self, length: usize) -> Option<String> {
        if length == 0 || self.exhausted.contains(&length) {
            return None;
        }
        for _ in 0..self.max_attempts {
            let sentence = self.compose(length)?;
            if self.issued.insert(sentence.clone()) {
                trace!("Issued sentence '{}' (length {})", sentence, length);
                return Some(sentence);
            }
        }
        debug!(
            "No fresh sentence of length {} after {} attempts; marking exhausted",
            length, self.max_attempts
        );
        self.exhausted.insert(length);
        None
    }
}
