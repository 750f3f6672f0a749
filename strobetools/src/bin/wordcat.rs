//! `wordcat [INPUT]`
//!
//! Decode digital events stored as tab-separated values (plain or
//! zstd-compressed) into strobed code words, and output tab-separated
//! (word, timestamp) records. Most likely, you want the shell one-liner
//!
//!     wordcat session1.tsv.zst > session1_words.tsv
//!
//! to inspect the code words a recording strobed out.

use argh::FromArgs;
use anyhow::{bail, Result};
use either::{Either, Left, Right};
use std::fs::{self, File};
use std::io::{stdin, stdout, BufReader, BufWriter, Write};

use strobetools::cfg::CodeMap;
use strobetools::{de, ser, word, Event};

const GIT_VERSION: &str = git_version::git_version!(fallback = env!("CARGO_PKG_VERSION"));

#[derive(Debug, FromArgs, Clone)]
/// Decode strobed code words from digital events stored as
/// tab-separated (channel, state, timestamp) values. Inputs
/// ending in .zst are decompressed on the fly.
pub struct CliArgs {
    /// print version information
    #[argh(switch, short = 'v')]
    pub version: bool,
    /// line carrying the strobe (default 8)
    #[argh(option, short = 's', default = "strobetools::STROBE_CHANNEL")]
    pub strobe_channel: u8,
    /// file to write output to (writes to standard output by default)
    #[argh(option, short = 'o')]
    pub out: Option<String>,
    /// with no input or when input is '-', read from standard input
    #[argh(positional)]
    pub input: Vec<String>,
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

    let map = CodeMap {
        strobe_channel: args.strobe_channel,
        ..Default::default()
    };

    // Collect inputs
    let mut inputs: Vec<Either<(), String>> = Vec::new();
    if args.input.len() == 0 {
        inputs.push(Left(()));
    } else {
        let mut contains_stdin = false;
        for i in args.input {
            if i == "-" {
                if contains_stdin {
                    panic!("cannot specify '-' for stdin twice");
                } else {
                    contains_stdin = true;
                    inputs.push(Left(()));
                }
            } else {
                match fs::metadata(&i) {
                    Ok(m) => {
                        if m.is_file() {
                            inputs.push(Right(i));
                        } else {
                            bail!("{} is not a file", &i);
                        }
                    },
                    Err(e) => bail!(e),
                }
            }
        }
    }

    let stdout = stdout();
    let wtr: Box<dyn Write> = match args.out {
        None => {
            Box::new(stdout.lock())
        },
        Some(p) => {
            let f = File::create(p)?;
            Box::new(BufWriter::new(f))
        },
    };
    let mut cwtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(wtr);

    for i in inputs {
        let events: Vec<Event> = match i {
            Left(()) => {
                let stdin = stdin();
                let stdin = stdin.lock();
                let brdr = BufReader::new(stdin);
                let mut rdr = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .delimiter(b'\t')
                    .from_reader(brdr);
                de::tsv(&mut rdr)?
            },
            Right(path) => {
                let f = File::open(&path)?;
                let brdr = BufReader::new(f);
                if path.ends_with(".zst") {
                    de::events_zst(brdr)?
                } else {
                    let mut rdr = csv::ReaderBuilder::new()
                        .has_headers(false)
                        .delimiter(b'\t')
                        .from_reader(brdr);
                    de::tsv(&mut rdr)?
                }
            },
        };
        let strobes = word::find_strobes(&events, &map);
        let words = word::decode(&events, &strobes, &map);
        let times: Vec<i64> = strobes.iter().map(|&i| events[i].timestamp).collect();
        ser::words_tsv(&mut cwtr, &words, &times)?;
    }
    cwtr.flush()?;
    Ok(())
}
