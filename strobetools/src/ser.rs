//! Serialization of events, decoded words, and block segmentations to `.tsv`

use crate::align::Block;
use crate::Event;
use anyhow::Result;
use std::io::Write;

/// Serialize events to tab-separated values (channel, state, timestamp).
pub fn tsv(wtr: &mut csv::Writer<impl Write>, events: &[Event]) -> Result<()> {
    for e in events.iter() {
        wtr.write_record(&[
            e.channel.to_string(),
            (e.state as u8).to_string(),
            e.timestamp.to_string(),
        ])?;
    }
    Ok(())
}

/// Serialize decoded words with their strobe timestamps (word, timestamp).
pub fn words_tsv(wtr: &mut csv::Writer<impl Write>, words: &[u8], times: &[i64]) -> Result<()> {
    for (w, t) in words.iter().zip(times.iter()) {
        wtr.write_record(&[w.to_string(), t.to_string()])?;
    }
    Ok(())
}

/// Serialize per-block trial windows (block, start, end).
pub fn blocks_tsv(wtr: &mut csv::Writer<impl Write>, blocks: &[Block]) -> Result<()> {
    for block in blocks.iter() {
        for w in block.windows.iter() {
            wtr.write_record(&[
                block.label.to_string(),
                w.start.to_string(),
                w.end.to_string(),
            ])?;
        }
    }
    Ok(())
}
