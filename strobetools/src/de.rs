//! Deserialization of event streams, supporting `.tsv` and `.tsv.zst`

use crate::Event;
use anyhow::Result;
use std::io::Read;
use zstd::stream;

/// Deserialize events from zstd-compressed tab-separated values
pub fn events_zst(rdr: impl Read) -> Result<Vec<Event>> {
    let zrdr = stream::read::Decoder::new(rdr)?;
    let mut crdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_reader(zrdr);
    let events = tsv(&mut crdr)?;
    Ok(events)
}

/// Deserialize events from tab-separated values (channel, state, timestamp).
pub fn tsv(rdr: &mut csv::Reader<impl Read>) -> Result<Vec<Event>> {
    let mut events: Vec<Event> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        events.push(Event {
            channel: record[0].parse::<u8>()?,
            state: record[1].parse::<u8>()? != 0,
            timestamp: record[2].parse::<i64>()?,
        });
    }
    Ok(events)
}
