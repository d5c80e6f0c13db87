//! Read-only data-source interface consumed by the axis engine.
//!
//! The engine never owns chart data: it pulls the visible window, bound
//! auxiliary series and formatting configuration through [`DataSource`] on
//! every recomputation. Everything returned is treated as immutable for the
//! duration of the call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::style::CandleField;

/// One candle record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KLineData {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub turnover: Option<f64>,
}

impl KLineData {
    #[must_use]
    pub const fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume: None,
            turnover: None,
        }
    }

    #[must_use]
    pub fn value_of(&self, field: CandleField) -> f64 {
        match field {
            CandleField::Open => self.open,
            CandleField::High => self.high,
            CandleField::Low => self.low,
            CandleField::Close => self.close,
        }
    }
}

/// Half-open index window `[from, to)` over the full data list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisibleRange {
    pub from: i64,
    pub to: i64,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub const fn length(self) -> i64 {
        self.to - self.from
    }
}

/// One slot of the visible window.
///
/// Slots past either end of the loaded data carry no record but keep their
/// index so bar spacing stays uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCandle {
    pub data_index: i64,
    pub data: Option<KLineData>,
}

impl VisibleCandle {
    #[must_use]
    pub const fn new(data_index: i64, data: KLineData) -> Self {
        Self {
            data_index,
            data: Some(data),
        }
    }

    #[must_use]
    pub const fn empty(data_index: i64) -> Self {
        Self {
            data_index,
            data: None,
        }
    }
}

/// Numeric outputs one auxiliary series produced for one record.
///
/// A slot is `None` when the series has no value at that index (warm-up
/// periods, gaps).
pub type SeriesOutputRow = SmallVec<[Option<f64>; 4]>;

/// An auxiliary series bound to an axis.
///
/// `outputs` is indexed by absolute data index, aligned with the primary
/// series.
#[derive(Debug, Clone, Default)]
pub struct SeriesBinding {
    pub precision: i32,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub should_ohlc: bool,
    pub should_format_big_number: bool,
    pub outputs: Vec<SeriesOutputRow>,
}

impl SeriesBinding {
    #[must_use]
    pub fn outputs_at(&self, data_index: i64) -> Option<&SeriesOutputRow> {
        usize::try_from(data_index)
            .ok()
            .and_then(|index| self.outputs.get(index))
    }
}

/// Label granularity tier of a pre-computed time tick.
///
/// Ordered coarse-to-fine; the time axis picks the label format from this
/// tier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWeight {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Pre-computed tick of the time/category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTick {
    pub data_index: i64,
    pub weight: TimeWeight,
    pub timestamp: i64,
}

/// Read-only query surface the surrounding store exposes to this core.
pub trait DataSource {
    /// Currently visible index window.
    fn visible_range(&self) -> VisibleRange;

    /// Visible primary-series slots, one per window index.
    fn visible_data(&self) -> &[VisibleCandle];

    /// Auxiliary series bound to the axis being computed.
    fn series_bindings(&self) -> &[SeriesBinding];

    /// Display precision of primary-series prices.
    fn price_precision(&self) -> i32;

    /// Pre-computed time ticks for the visible window.
    fn time_ticks(&self) -> &[TimeTick];

    fn thousands_separator(&self) -> &str {
        ","
    }

    fn decimal_fold_threshold(&self) -> usize {
        3
    }
}

/// Owned [`DataSource`] backed by plain vectors.
///
/// Hosts with their own stores implement the trait directly; this type covers
/// tests and simple embeddings.
#[derive(Debug, Clone, Default)]
pub struct VecDataSource {
    visible_range: VisibleRange,
    visible_data: Vec<VisibleCandle>,
    series_bindings: Vec<SeriesBinding>,
    price_precision: i32,
    time_ticks: Vec<TimeTick>,
    thousands_separator: String,
    decimal_fold_threshold: usize,
}

impl VecDataSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            price_precision: 2,
            thousands_separator: ",".to_owned(),
            decimal_fold_threshold: 3,
            ..Self::default()
        }
    }

    /// Installs candles as the visible window, indexed from zero.
    #[must_use]
    pub fn with_candles(mut self, candles: Vec<KLineData>) -> Self {
        self.visible_range = VisibleRange::new(0, candles.len() as i64);
        self.visible_data = candles
            .into_iter()
            .enumerate()
            .map(|(index, data)| VisibleCandle::new(index as i64, data))
            .collect();
        self
    }

    #[must_use]
    pub fn with_visible_range(mut self, range: VisibleRange) -> Self {
        self.visible_range = range;
        self
    }

    #[must_use]
    pub fn with_series_binding(mut self, binding: SeriesBinding) -> Self {
        self.series_bindings.push(binding);
        self
    }

    #[must_use]
    pub fn with_price_precision(mut self, precision: i32) -> Self {
        self.price_precision = precision;
        self
    }

    #[must_use]
    pub fn with_time_ticks(mut self, ticks: Vec<TimeTick>) -> Self {
        self.time_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_decimal_fold_threshold(mut self, threshold: usize) -> Self {
        self.decimal_fold_threshold = threshold;
        self
    }
}

impl DataSource for VecDataSource {
    fn visible_range(&self) -> VisibleRange {
        self.visible_range
    }

    fn visible_data(&self) -> &[VisibleCandle] {
        &self.visible_data
    }

    fn series_bindings(&self) -> &[SeriesBinding] {
        &self.series_bindings
    }

    fn price_precision(&self) -> i32 {
        self.price_precision
    }

    fn time_ticks(&self) -> &[TimeTick] {
        &self.time_ticks
    }

    fn thousands_separator(&self) -> &str {
        &self.thousands_separator
    }

    fn decimal_fold_threshold(&self) -> usize {
        self.decimal_fold_threshold
    }
}
