//! Sort and array configuration
//!
//! [`SortConfig`] is what the playback controller reads when a sort starts.
//! [`Settings`] is the on-disk form (TOML) layered under command-line
//! overrides:
//!
//! ```toml
//! seed = 42
//!
//! [array]
//! len = 100
//! min = 0
//! max = 500
//!
//! [sort]
//! algorithm = "quick"
//! ascending = false
//! speed = 1900
//! ```

use crate::errors::{Result, SorttyError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest array the generator accepts. Bubble sort records n(n-1)/2 full
/// copies; at 800 values that is about 1 GB of steps.
pub const MAX_ARRAY_LEN: usize = 800;

/// Slider positions run 1..=1999; delay = `SLIDER_SPAN - position` ms.
pub const SLIDER_SPAN: u32 = 2000;
pub const SLIDER_MIN: u32 = 1;
pub const SLIDER_MAX: u32 = 1999;

/// Default slider position (100 ms between steps)
pub const DEFAULT_SLIDER: u32 = 1900;

/// Sorting algorithm to record and play back
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Algorithm {
    #[default]
    #[serde(rename = "bubble")]
    #[value(name = "bubble")]
    BubbleSort,
    #[serde(rename = "insertion")]
    #[value(name = "insertion")]
    InsertionSort,
    #[serde(rename = "merge")]
    #[value(name = "merge")]
    MergeSort,
    #[serde(rename = "quick")]
    #[value(name = "quick")]
    QuickSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }

    /// Next algorithm in selector order (wraps)
    pub fn next(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::InsertionSort,
            Algorithm::InsertionSort => Algorithm::MergeSort,
            Algorithm::MergeSort => Algorithm::QuickSort,
            Algorithm::QuickSort => Algorithm::BubbleSort,
        }
    }

    /// Previous algorithm in selector order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Algorithm::BubbleSort => Algorithm::QuickSort,
            Algorithm::InsertionSort => Algorithm::BubbleSort,
            Algorithm::MergeSort => Algorithm::InsertionSort,
            Algorithm::QuickSort => Algorithm::MergeSort,
        }
    }
}

/// Delay between playback steps, in 1..=1999 ms.
///
/// The UI presents this inverted as a "speed" slider: a higher slider
/// position means a shorter delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Speed {
    millis: u64,
}

impl Speed {
    /// Map a slider position to a delay. Positions outside 1..=1999 clamp.
    pub fn from_slider(position: u32) -> Self {
        let position = position.clamp(SLIDER_MIN, SLIDER_MAX);
        Speed {
            millis: (SLIDER_SPAN - position) as u64,
        }
    }

    /// Slider position for this delay
    pub fn slider(self) -> u32 {
        SLIDER_SPAN - self.millis as u32
    }

    /// Move the slider by `delta` positions, clamping at both ends
    pub fn nudge(self, delta: i32) -> Self {
        let position = (self.slider() as i64 + delta as i64)
            .clamp(SLIDER_MIN as i64, SLIDER_MAX as i64);
        Speed::from_slider(position as u32)
    }

    pub fn millis(self) -> u64 {
        self.millis
    }

    pub fn delay(self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::from_slider(DEFAULT_SLIDER)
    }
}

/// Everything a sort run needs besides the array itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub algorithm: Algorithm,
    pub ascending: bool,
    pub speed: Speed,
}

impl SortConfig {
    pub fn new(algorithm: Algorithm, ascending: bool, speed: Speed) -> Self {
        SortConfig {
            algorithm,
            ascending,
            speed,
        }
    }
}

/// Shape of generated arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub len: usize,
    pub min: u32,
    pub max: u32,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        ArrayConfig {
            len: 100,
            min: 0,
            max: 500,
        }
    }
}

impl ArrayConfig {
    /// Reject configurations the generator cannot honor
    pub fn validate(&self) -> Result<()> {
        let reason = if self.len == 0 {
            "array length must be at least 1".to_string()
        } else if self.len > MAX_ARRAY_LEN {
            format!("array length {} exceeds {}", self.len, MAX_ARRAY_LEN)
        } else if self.min > self.max {
            format!("min {} is greater than max {}", self.min, self.max)
        } else if self.max == 0 {
            "max must be positive".to_string()
        } else {
            return Ok(());
        };
        Err(SorttyError::InvalidArrayConfig { reason })
    }
}

/// `[sort]` table of the settings file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSettings {
    pub algorithm: Algorithm,
    pub ascending: bool,
    /// Slider position, 1..=1999
    pub speed: u32,
}

impl Default for SortSettings {
    fn default() -> Self {
        SortSettings {
            algorithm: Algorithm::default(),
            ascending: true,
            speed: DEFAULT_SLIDER,
        }
    }
}

/// Values supplied on the command line; `None` leaves the file value alone
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub algorithm: Option<Algorithm>,
    pub descending: bool,
    pub speed: Option<u32>,
    pub len: Option<usize>,
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub seed: Option<u64>,
}

/// Full settings: defaults, then file, then command line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub array: ArrayConfig,
    pub sort: SortSettings,
    /// Fixed RNG seed for reproducible arrays
    pub seed: Option<u64>,
}

impl Settings {
    /// Load settings from a TOML file. Missing tables fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SorttyError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = toml::from_str(&text).map_err(|source| SorttyError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(algorithm) = overrides.algorithm {
            self.sort.algorithm = algorithm;
        }
        if overrides.descending {
            self.sort.ascending = false;
        }
        if let Some(speed) = overrides.speed {
            self.sort.speed = speed;
        }
        if let Some(len) = overrides.len {
            self.array.len = len;
        }
        if let Some(min) = overrides.min {
            self.array.min = min;
        }
        if let Some(max) = overrides.max {
            self.array.max = max;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.array.validate()?;
        if !(SLIDER_MIN..=SLIDER_MAX).contains(&self.sort.speed) {
            return Err(SorttyError::InvalidSlider {
                position: self.sort.speed,
            });
        }
        Ok(())
    }

    pub fn sort_config(&self) -> SortConfig {
        SortConfig::new(
            self.sort.algorithm,
            self.sort.ascending,
            Speed::from_slider(self.sort.speed),
        )
    }
}
