//! Acquisition configuration domain model

use serde::{Deserialize, Serialize};

/// Minimum zero-byte count that lets the parity heuristic pick a UTF-16 variant.
///
/// The generic probe path and the text-only path historically used different
/// ratios. Both are kept as named constants so each call site states which one
/// it relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroThreshold {
    /// `max(2, len / 10)`, used when probing arbitrary format bytes.
    TenthOfLength,
    /// `len / 4`, used when only a text flavor is available and no format id is known.
    QuarterOfLength,
}

impl ZeroThreshold {
    pub fn for_len(self, len: usize) -> usize {
        match self {
            ZeroThreshold::TenthOfLength => std::cmp::max(2, len / 10),
            ZeroThreshold::QuarterOfLength => len / 4,
        }
    }
}

/// Tunables for one clipboard acquisition session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Attempts at opening the native clipboard before giving up.
    pub open_retries: u32,

    /// Fixed sleep between open attempts.
    pub open_retry_delay_ms: u64,

    /// Formats inspected by the generic enumeration pass.
    pub max_formats: usize,

    /// Formats larger than this are skipped, not read.
    pub max_format_bytes: u64,

    /// Registered format names probed before generic enumeration.
    pub priority_format_names: Vec<String>,

    /// Read windows tried, in order, when the OS reports no size for a format.
    pub unsized_probe_windows: Vec<usize>,

    /// Threshold used when decoding bytes of an enumerated format.
    pub generic_zero_threshold: ZeroThreshold,

    /// Threshold used when decoding a text-only flavor.
    pub text_only_zero_threshold: ZeroThreshold,

    /// Emit per-format probe lines at trace level.
    pub verbose: bool,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            open_retries: 5,
            open_retry_delay_ms: 50,
            max_formats: 64,
            max_format_bytes: 10 * 1024 * 1024,
            priority_format_names: vec!["Mac-XMSS".to_string(), "Mac-XMFD".to_string()],
            unsized_probe_windows: vec![512, 2048, 8192, 65536],
            generic_zero_threshold: ZeroThreshold::TenthOfLength,
            text_only_zero_threshold: ZeroThreshold::QuarterOfLength,
            verbose: false,
        }
    }
}
