//! Validation of decoded words against the behavioral log, and segmentation
//! of trial boundaries into experimental blocks
//!
//! Nothing in this module hard-fails on inconsistent data. The pipeline runs
//! offline over long recordings, so every mismatch is logged and carried in
//! the returned value for the caller to inspect, and downstream output stays
//! best-effort.

use crate::bhv::BhvLog;
use crate::cfg::CodeMap;
use crate::{word, Event};
use itertools::Itertools;
use tracing::{info, warn};

/// Outcome of one consistency check between two code sequences
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CodeCheck {
    Match,
    CountMismatch { expected: usize, actual: usize },
    ValueMismatch { positions: Vec<usize> },
}

impl CodeCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, CodeCheck::Match)
    }
}

/// Both consistency checks for one recording
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    /// Decoded word count against the strobe count
    pub strobes: CodeCheck,
    /// Decoded words against the behavioral code sequence
    pub codes: CodeCheck,
}

impl Validation {
    pub fn is_clean(&self) -> bool {
        self.strobes.is_match() && self.codes.is_match()
    }
}

/// Check the decoded words against the strobe count and the behavioral code
/// sequence. Mismatches are logged and reported in the returned value, never
/// raised.
pub fn check_strobes(words: &[u8], n_strobes: usize, bhv_codes: &[u8]) -> Validation {
    let strobes = if words.len() != n_strobes {
        warn!(
            strobes = n_strobes,
            words = words.len(),
            "strobe and code counts do not match"
        );
        CodeCheck::CountMismatch {
            expected: n_strobes,
            actual: words.len(),
        }
    } else {
        info!(strobes = n_strobes, "strobe and code counts match");
        CodeCheck::Match
    };

    let codes = if words.len() != bhv_codes.len() {
        warn!(
            bhv = bhv_codes.len(),
            words = words.len(),
            "behavioral and decoded code counts do not match"
        );
        CodeCheck::CountMismatch {
            expected: bhv_codes.len(),
            actual: words.len(),
        }
    } else {
        let positions = words
            .iter()
            .zip(bhv_codes.iter())
            .positions(|(w, b)| w != b)
            .collect::<Vec<_>>();
        if positions.is_empty() {
            info!("behavioral and decoded codes are the same");
            CodeCheck::Match
        } else {
            warn!(
                differing = positions.len(),
                "behavioral and decoded codes differ"
            );
            CodeCheck::ValueMismatch { positions }
        }
    };

    Validation { strobes, codes }
}

/// Start and end timestamps of one trial, paired by [`trial_windows`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrialWindow {
    pub start: i64,
    pub end: i64,
}

/// Paired trial boundaries, plus counts of sentinels that had no partner
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TrialBounds {
    pub windows: Vec<TrialWindow>,
    pub unpaired_starts: usize,
    pub unpaired_ends: usize,
}

impl TrialBounds {
    /// Start timestamps in temporal order (parallel-array view)
    pub fn starts(&self) -> Vec<i64> {
        self.windows.iter().map(|w| w.start).collect()
    }

    /// End timestamps in temporal order (parallel-array view)
    pub fn ends(&self) -> Vec<i64> {
        self.windows.iter().map(|w| w.end).collect()
    }
}

/// Pair trial start and end sentinels into windows in one ordered pass over
/// the decoded words and their strobe timestamps.
///
/// An end with no open start, or a start superseded by another start, is
/// logged and counted rather than paired with the wrong partner, so window
/// `i` always holds a start that precedes its end.
pub fn trial_windows(words: &[u8], strobe_times: &[i64], map: &CodeMap) -> TrialBounds {
    let mut bounds = TrialBounds::default();
    let mut open: Option<i64> = None;
    for (&word, &time) in words.iter().zip(strobe_times.iter()) {
        if word == map.start_code {
            if let Some(orphan) = open.replace(time) {
                warn!(timestamp = orphan, "trial start without matching end");
                bounds.unpaired_starts += 1;
            }
        } else if word == map.end_code {
            match open.take() {
                Some(start) => bounds.windows.push(TrialWindow { start, end: time }),
                None => {
                    warn!(timestamp = time, "trial end without matching start");
                    bounds.unpaired_ends += 1;
                }
            }
        }
    }
    if let Some(orphan) = open {
        warn!(timestamp = orphan, "trial start without matching end");
        bounds.unpaired_starts += 1;
    }
    return bounds;
}

/// The trials of one experimental block
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Block {
    pub label: i64,
    pub windows: Vec<TrialWindow>,
}

impl Block {
    /// Trial start timestamps of this block
    pub fn starts(&self) -> Vec<i64> {
        self.windows.iter().map(|w| w.start).collect()
    }

    /// Trial end timestamps of this block
    pub fn ends(&self) -> Vec<i64> {
        self.windows.iter().map(|w| w.end).collect()
    }
}

/// Group trial windows by their trial's block label, one label per trial in
/// trial order, returning blocks in ascending label order.
///
/// Window `i` belongs to trial `i`; trials past the number of paired windows
/// contribute nothing.
pub fn segment_blocks(bounds: &TrialBounds, labels: &[i64]) -> Vec<Block> {
    labels
        .iter()
        .copied()
        .unique()
        .sorted()
        .map(|label| Block {
            label,
            windows: labels
                .iter()
                .enumerate()
                .filter(|&(_, &l)| l == label)
                .filter_map(|(i, _)| bounds.windows.get(i).copied())
                .collect(),
        })
        .collect()
}

/// Decoded words and alignment products for one recording
#[derive(Clone, Debug)]
pub struct EventCodes {
    /// One decoded word per strobe
    pub words: Vec<u8>,
    /// Timestamp of each strobe, same order as `words`
    pub strobe_times: Vec<i64>,
    pub validation: Validation,
    pub bounds: TrialBounds,
    pub blocks: Vec<Block>,
}

/// Run the whole alignment for one recording: find the strobes, decode one
/// word per strobe, validate against the behavioral log, pair the trial
/// boundaries, and segment them into blocks.
pub fn find_event_codes(events: &[Event], bhv: &BhvLog, map: &CodeMap) -> EventCodes {
    info!("reconstructing 8 bit words");
    let strobes = word::find_strobes(events, map);
    let words = word::decode(events, &strobes, map);
    let validation = check_strobes(&words, strobes.len(), &bhv.codes());
    let strobe_times: Vec<i64> = strobes.iter().map(|&i| events[i].timestamp).collect();
    let bounds = trial_windows(&words, &strobe_times, map);
    let blocks = segment_blocks(&bounds, &bhv.blocks());
    EventCodes {
        words,
        strobe_times,
        validation,
        bounds,
        blocks,
    }
}
