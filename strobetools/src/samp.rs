//! Timestamp windowing and decimation for the continuous stream

/// Every `step`-th element of `x`, starting at `start`
pub fn downsample<T: Copy>(x: &[T], step: usize, start: usize) -> Vec<T> {
    x.iter().skip(start).step_by(step).copied().collect()
}

/// Continuous-clock window selected by [`select_timestamps`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectedTimestamps {
    /// Decimated continuous timestamps from the window start onward
    pub timestamps: Vec<i64>,
    /// Index into the continuous array where the window opens
    pub start: usize,
    /// Absolute timestamps of the spikes
    pub spike_times: Vec<i64>,
}

/// Trim the continuous-clock timestamps to a window opening `t_before_event`
/// seconds before the first event, then decimate by `step`.
///
/// When the first event timestamp does not appear in the continuous clock
/// the window opens at 0; the backoff also clamps at 0. Spike indices are
/// mapped to absolute timestamps and must be in range.
pub fn select_timestamps(
    c_timestamps: &[i64],
    e_timestamps: &[i64],
    spike_indices: &[usize],
    fs: u64,
    t_before_event: u64,
    step: usize,
) -> SelectedTimestamps {
    let located = e_timestamps
        .first()
        .and_then(|&t| c_timestamps.iter().position(|&c| c == t))
        .unwrap_or(0);
    let start = located.saturating_sub((fs * t_before_event) as usize);
    SelectedTimestamps {
        timestamps: downsample(c_timestamps, step, start),
        start,
        spike_times: spike_indices.iter().map(|&i| c_timestamps[i]).collect(),
    }
}
