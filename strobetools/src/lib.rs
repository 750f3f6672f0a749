pub mod align;
pub mod bhv;
pub mod bit;
pub mod cfg;
pub mod de;
pub mod samp;
pub mod ser;
pub mod word;

/// One logic-level transition on one digital line
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct Event {
    /// Sample index on the acquisition clock, non-decreasing across the stream
    pub timestamp: i64,
    /// Line (1-indexed) the transition occurred on
    pub channel: u8,
    /// Line level after the transition: true = rising/ON
    pub state: bool,
}

/// Line reserved for the strobe in the default deployment
pub const STROBE_CHANNEL: u8 = 8;
/// Lines sampled into the low seven bits of each code word
pub const DATA_CHANNELS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];
