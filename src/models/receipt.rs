//! Display-ready activity structure for the web receipt view.
//!
//! Built fresh for each render by the formatter; never persisted.

use serde::Serialize;

/// A formatted activity "receipt".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Local date portion of the start timestamp
    pub date: String,
    /// Local `HH:MM` portion of the start timestamp
    pub time: String,
    /// Activity name/title
    pub name: String,
    /// Headline stats
    pub stats: ReceiptStats,
    /// Per-kilometer splits, in activity order
    pub splits: Vec<ReceiptSplit>,
}

/// Headline stats block of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptStats {
    /// Distance, e.g. `"5.00 km"`
    pub distance: String,
    /// Total moving time as `m:ss`
    pub moving_time: String,
    /// Average pace as `m:ss` per kilometer
    pub avg_pace: String,
}

/// One formatted split line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptSplit {
    /// Kilometer index, zero-padded to width 2
    pub km: String,
    /// Split moving time as `m:ss`
    pub time: String,
}
