//! Behavioral-task log: the trial records kept by the task controller
//!
//! The log is a trial-keyed mapping whose key order is trial temporal order.
//! The first and last keys are header and footer entries, not trials, and are
//! stripped on read; everything downstream indexes real trials only.

use anyhow::Result;
use serde::Deserialize;
use std::io::Read;

/// One real trial from the behavioral log
#[derive(Clone, Debug, PartialEq)]
pub struct Trial {
    /// Task-defined block label
    pub block: i64,
    /// Codes the task strobed out during the trial
    pub codes: Vec<u8>,
}

/// The behavioral log with sentinel entries already stripped
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BhvLog {
    pub trials: Vec<Trial>,
}

#[derive(Deserialize)]
struct RawTrial {
    #[serde(rename = "BehavioralCodes")]
    behavioral_codes: RawCodes,
    // Stored as a float by the task controller
    #[serde(rename = "Block")]
    block: f64,
}

#[derive(Deserialize)]
struct RawCodes {
    #[serde(rename = "CodeNumbers")]
    code_numbers: Vec<f64>,
}

impl BhvLog {
    /// Read a trial-keyed JSON log, dropping the first and last keys.
    ///
    /// Relies on `serde_json`'s order-preserving maps: the mapping's key
    /// order is taken as the trial order, not the keys' lexical order.
    pub fn from_json(rdr: impl Read) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(rdr)?;
        let n = map.len();
        let mut trials = Vec::new();
        for (_, value) in map.into_iter().take(n.saturating_sub(1)).skip(1) {
            let raw: RawTrial = serde_json::from_value(value)?;
            trials.push(Trial {
                block: raw.block as i64,
                codes: raw
                    .behavioral_codes
                    .code_numbers
                    .iter()
                    .map(|&c| c as u8)
                    .collect(),
            });
        }
        Ok(BhvLog { trials })
    }

    /// All trial codes concatenated in trial order
    pub fn codes(&self) -> Vec<u8> {
        self.trials
            .iter()
            .flat_map(|t| t.codes.iter().copied())
            .collect()
    }

    /// One block label per trial, in trial order
    pub fn blocks(&self) -> Vec<i64> {
        self.trials.iter().map(|t| t.block).collect()
    }
}
