use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::chat::ChatLog;
use crate::config::WordCloudConfig;
use crate::error::{ChatplotError, Result};
use crate::participants::Participant;

/// Grayscale mask, row-major. White (255) pixels are kept free of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Mask {
    /// Builds a mask, checking that `pixels` covers `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ChatplotError::mask(
                None,
                format!("expected {expected} pixels, got {}", pixels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel value at `(x, y)`, `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Returns `true` if words may not be placed at `(x, y)`.
    pub fn is_blocked(&self, x: u32, y: u32) -> bool {
        self.get(x, y).is_none_or(|v| v == u8::MAX)
    }
}

/// Loads mask images. Failures propagate to the caller untouched.
pub trait MaskLoader {
    fn load(&self, path: &Path) -> Result<Mask>;
}

impl<F> MaskLoader for F
where
    F: Fn(&Path) -> Result<Mask>,
{
    fn load(&self, path: &Path) -> Result<Mask> {
        self(path)
    }
}

/// Everything a word-cloud engine needs besides the text.
#[derive(Debug, Clone, Copy)]
pub struct WordCloudRequest<'a> {
    pub stop_words: &'a HashSet<String>,
    pub mask: Option<&'a Mask>,
    pub max_words: usize,
    pub contour_width: u32,
    pub contour_color: &'a str,
    pub background_color: &'a str,
    pub color_scheme: &'a str,
}

/// Draws one word cloud from a text blob.
pub trait WordCloudRenderer {
    type Output;

    fn render(&self, request: &WordCloudRequest<'_>, text: &str) -> Result<Self::Output>;
}

/// A ranked word and its frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
}

/// Word-cloud renderer producing the ranked word list instead of an image.
///
/// Tokens are runs of word characters (apostrophes allowed inside),
/// lower-cased, with a trailing `'s` removed. Numbers and stop words
/// (compared case-insensitively) are skipped. Words are ranked by count,
/// ties by first appearance, and cut at `max_words`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyCloud;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\w[\w']*").expect("token pattern is valid"))
}

impl WordCloudRenderer for FrequencyCloud {
    type Output = Vec<WordWeight>;

    fn render(&self, request: &WordCloudRequest<'_>, text: &str) -> Result<Self::Output> {
        let stop_words: HashSet<String> =
            request.stop_words.iter().map(|w| w.to_lowercase()).collect();

        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();

        for token in token_regex().find_iter(text) {
            let lower = token.as_str().to_lowercase();
            let word = lower.strip_suffix("'s").unwrap_or(&lower);
            if word.is_empty()
                || word.chars().all(|c| c.is_ascii_digit())
                || stop_words.contains(word)
            {
                continue;
            }
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    order.push(word.to_string());
                    counts.insert(word.to_string(), 1);
                }
            }
        }

        let mut ranked: Vec<WordWeight> = order
            .into_iter()
            .map(|word| {
                let count = counts[&word];
                WordWeight { word, count }
            })
            .collect();
        // stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(request.max_words);

        Ok(ranked)
    }
}

/// Renders one word cloud per participant, aggregate included.
///
/// The mask and colour scheme are resolved once with `rng`, so every cloud
/// of a run shares them. Loader and renderer errors propagate.
pub fn word_clouds<R, G>(
    chat: &ChatLog,
    config: &WordCloudConfig,
    loader: &dyn MaskLoader,
    renderer: &R,
    rng: &mut G,
) -> Result<Vec<(Participant, R::Output)>>
where
    R: WordCloudRenderer + ?Sized,
    G: Rng + ?Sized,
{
    let mask = match config.mask.resolve(rng) {
        Some(path) => {
            info!("loading mask {}", path.display());
            Some(loader.load(&path)?)
        }
        None => None,
    };
    let color_scheme = config.color.resolve(rng);
    let stop_words = config.all_stop_words();

    let request = WordCloudRequest {
        stop_words: &stop_words,
        mask: mask.as_ref(),
        max_words: config.max_words,
        contour_width: config.contour_width,
        contour_color: &config.contour_color,
        background_color: &config.background_color,
        color_scheme: &color_scheme,
    };
    debug!(
        "word clouds: {} stop words, colour scheme {color_scheme}",
        stop_words.len()
    );

    chat.users()
        .iter()
        .map(|participant| {
            let output = renderer.render(&request, chat.text_blob(participant)?)?;
            Ok((participant.clone(), output))
        })
        .collect()
}
