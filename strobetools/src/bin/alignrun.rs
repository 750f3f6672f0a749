//! `alignrun -b BHV [-c SESSION] EVENTS`
//!
//! Run the full alignment for one recording: decode the strobed code words
//! from an event file, validate them against the behavioral log, and output
//! per-block trial windows as tab-separated (block, start, end) records.
//! Consistency diagnostics go to stderr.

use argh::FromArgs;
use anyhow::Result;
use std::fs::File;
use std::io::{stdout, BufReader, BufWriter, Write};

use strobetools::bhv::BhvLog;
use strobetools::cfg::Session;
use strobetools::{align, de, ser};

const GIT_VERSION: &str = git_version::git_version!(fallback = env!("CARGO_PKG_VERSION"));

#[derive(Debug, FromArgs, Clone)]
/// Align a recording's strobed code words with its behavioral log
/// and output per-block trial windows.
pub struct CliArgs {
    /// print version information
    #[argh(switch, short = 'v')]
    pub version: bool,
    /// behavioral log in trial-keyed JSON
    #[argh(option, short = 'b')]
    pub bhv: String,
    /// session config in JSON (defaults apply when omitted)
    #[argh(option, short = 'c')]
    pub session: Option<String>,
    /// file to write output to (writes to standard output by default)
    #[argh(option, short = 'o')]
    pub out: Option<String>,
    /// event file, tab-separated (channel, state, timestamp), .zst ok
    #[argh(positional)]
    pub events: String,
}

fn main() -> Result<()> {
    let args: CliArgs = argh::from_env();
    if args.version {
        let stdout = stdout();
        let mut stdout = stdout.lock();
        writeln!(
            stdout,
            concat!(
                env!("CARGO_BIN_NAME"),
                " ",
                "{}",
            ),
            GIT_VERSION,
        )?;
        return Ok(())
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let session = match args.session {
        Some(p) => serde_json::from_reader(BufReader::new(File::open(p)?))?,
        None => Session::default(),
    };

    let bhv = BhvLog::from_json(BufReader::new(File::open(args.bhv)?))?;

    let f = File::open(&args.events)?;
    let brdr = BufReader::new(f);
    let events = if args.events.ends_with(".zst") {
        de::events_zst(brdr)?
    } else {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .from_reader(brdr);
        de::tsv(&mut rdr)?
    };

    let codes = align::find_event_codes(&events, &bhv, &session.codes);

    let stdout = stdout();
    let wtr: Box<dyn Write> = match args.out {
        None => Box::new(stdout.lock()),
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
    };
    let mut cwtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(wtr);
    ser::blocks_tsv(&mut cwtr, &codes.blocks)?;
    cwtr.flush()?;
    Ok(())
}
