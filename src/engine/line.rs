//! Compaction/merge pass over one Line View.

use super::event::MoveEvent;

/// Per-line result of [`compact_line`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOutcome {
    /// Output differs from input at some index.
    pub changed: bool,
    /// Sum of merge results in this line.
    pub score: u64,
    /// Largest merge result in this line (0 if no merge).
    pub max_merged: u64,
}

/// Slide and merge `input` toward index 0, writing the result to `out`.
///
/// Single scan from the target edge outward. Each tile merges at most once;
/// after a merge the merged cell is no longer eligible. Tiles before the
/// first gap or merge report `Stayed`, everything after reports `Moved`.
/// Events for this line are appended to `events` in scan order. Merge
/// results and the line score saturate at `u64::MAX`.
///
/// ```
/// use slide_2048::engine::compact_line;
/// let mut out = [0u64; 4];
/// let mut events = Vec::new();
/// let outcome = compact_line(0, &[2, 2, 4, 0], &mut out, &mut events);
/// assert_eq!(out, [4, 4, 0, 0]);
/// assert!(outcome.changed);
/// assert_eq!(outcome.score, 4);
/// ```
pub fn compact_line(line: usize, input: &[u64], out: &mut [u64], events: &mut Vec<MoveEvent>) -> LineOutcome {
    debug_assert_eq!(input.len(), out.len());
    out.fill(0);
    let mut outcome = LineOutcome::default();
    let mut out_pos = 0usize;
    let mut last_value = 0u64;
    let mut last_index = 0usize;
    let mut moved = false;

    for (i, &v) in input.iter().enumerate() {
        if v == 0 {
            moved = true;
        } else if last_value == v {
            let result = last_value.saturating_add(v);
            let to = out_pos - 1;
            out[to] = result;
            outcome.score = outcome.score.saturating_add(result);
            outcome.max_merged = outcome.max_merged.max(result);
            events.push(MoveEvent::Moved { line, from: last_index, to, source: v, result });
            events.push(MoveEvent::Moved { line, from: i, to, source: v, result });
            last_value = 0;
            moved = true;
        } else {
            out[out_pos] = v;
            if moved {
                events.push(MoveEvent::Moved { line, from: i, to: out_pos, source: v, result: v });
            } else {
                events.push(MoveEvent::Stayed { line, slot: i });
            }
            last_value = v;
            last_index = i;
            out_pos += 1;
        }
    }

    outcome.changed = input != out;
    outcome
}
