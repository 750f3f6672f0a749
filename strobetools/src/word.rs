//! Reconstruction of strobed code words from a raw digital event stream

use crate::bit::{mask_to_lines, BitOps};
use crate::cfg::CodeMap;
use crate::Event;

/// Indices of the events that qualify as strobes: rising edges on the strobe
/// line with a positive timestamp.
pub fn find_strobes(events: &[Event], map: &CodeMap) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.channel == map.strobe_channel && e.state && e.timestamp > 0)
        .map(|(i, _)| i)
        .collect()
}

/// Decode one code word per strobe by sampling the data lines.
///
/// `strobes` holds ascending indices into `events`, as produced by
/// [`find_strobes`]. The scan window of each strobe runs from the previous
/// strobe's index (0 for the first strobe) up to, but not including, the
/// strobe's own index; an event at the strobe's index belongs to the next
/// window. Line `ch` drives bit `ch - 1` of the register. The top bit is
/// reserved for the strobe line and never written, so words stay below 128.
///
/// A line with no transition in the window holds its bit from the previous
/// word (sample-and-hold); the register starts all zero, so the windows
/// partition the stream and one pass is linear in the number of events.
///
/// No validation happens here: out-of-range indices or channels are a caller
/// error.
pub fn decode(events: &[Event], strobes: &[usize], map: &CodeMap) -> Vec<u8> {
    let lines = mask_to_lines(map.data_mask);
    let mut words = Vec::with_capacity(strobes.len());
    let mut register = 0u8;
    let mut window_start = 0usize;
    for &idx in strobes {
        register = sample_lines(&events[window_start..idx], &lines, register);
        words.push(register);
        window_start = idx;
    }
    return words;
}

/// Fold one window of transitions into the sample-and-hold register: each
/// line's bit takes the state of its last transition in the window, or keeps
/// its held value when the line was quiet.
fn sample_lines(window: &[Event], lines: &[u8], register: u8) -> u8 {
    lines.iter().fold(register, |mut reg, &ch| {
        if let Some(e) = window.iter().rev().find(|e| e.channel == ch) {
            reg.change((ch - 1) as usize, e.state);
        }
        reg
    })
}
