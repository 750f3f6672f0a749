//! Configuration tools: sentinel code maps and per-session recording parameters

use chrono::{offset::Local, DateTime};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sentinel codes and line conventions for one recording deployment.
///
/// Passed by reference into the decoder and aligner, so recordings with
/// different code maps can be processed side by side without touching any
/// shared state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub struct CodeMap {
    /// Word strobed out at the start of every trial
    pub start_code: u8,
    /// Word strobed out at the end of every trial
    pub end_code: u8,
    /// Line carrying the strobe
    #[serde(default = "default_strobe")]
    pub strobe_channel: u8,
    /// Bitmask of the sampled data lines
    #[serde(default = "default_data_mask")]
    pub data_mask: u8,
}

fn default_strobe() -> u8 {
    crate::STROBE_CHANNEL
}

fn default_data_mask() -> u8 {
    crate::bit::lines_to_mask(&crate::DATA_CHANNELS)
}

/// MonkeyLogic convention: code 9 starts a trial, code 18 ends it
impl Default for CodeMap {
    fn default() -> Self {
        CodeMap {
            start_code: 9,
            end_code: 18,
            strobe_channel: default_strobe(),
            data_mask: default_data_mask(),
        }
    }
}

/// Addressing and preprocessing parameters for one recording session.
///
/// Everything beyond `codes` is opaque to the decoder and aligner: the record
/// node and recording number address the session on disk for the loading
/// collaborator, and the LFP parameters belong to the filtering collaborator.
/// Nothing here is validated.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Session {
    pub name:       String,
    pub timestamp:  Option<DateTime<Local>>,
    /// Record node to open within the session directory
    pub node:       usize,
    /// Recording number within the record node
    pub recording:  usize,
    #[serde(default)]
    pub codes:      CodeMap,
    /// How far before the first event the continuous window opens,
    /// parsed as in [humantime](https://docs.rs/humantime/), e.g. `10s`
    #[serde(default, with = "humantime_serde")]
    pub pre_event:  Option<Duration>,
    pub lfp:        Option<LfpSettings>,
}

/// Low-pass filter and decimation parameters for the LFP path
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LfpSettings {
    /// Cutoff frequency in Hz
    pub fc:         f64,
    /// Sampling rate in Hz
    pub fs:         f64,
    /// Filter order
    pub order:      usize,
    /// Decimation factor applied after filtering
    pub downsample: usize,
}

/// Creates an empty Session addressing the first recording of the first node.
impl Default for Session {
    fn default() -> Self {
        Session {
            name:       String::new(),
            timestamp:  None,
            node:       0,
            recording:  0,
            codes:      CodeMap::default(),
            pre_event:  None,
            lfp:        None,
        }
    }
}
