use crate::engine::{Board, Direction};

/// Expected value approximation: sum of line scores over every row and column.
pub(crate) fn get_heuristic_score(board: &Board) -> f64 {
    let size = board.size();
    let mut exponents = vec![0u32; size];
    let mut score = 0.0;
    for direction in [Direction::Left, Direction::Up] {
        for line in 0..size {
            for (slot, value) in exponents.iter_mut().zip(board.line(direction, line)) {
                *slot = exponent(value);
            }
            score += calc_line_score(&exponents);
        }
    }
    score
}

#[inline]
fn exponent(value: u64) -> u32 {
    if value == 0 { 0 } else { value.ilog2() }
}

// Weights follow the classic nneonneo line heuristic.
fn calc_line_score(line: &[u32]) -> f64 {
    const LOST_PENALTY: f64 = 200_000.0;
    LOST_PENALTY + calc_empty(line) + calc_merges(line) - calc_monotonicity(line) - calc_sum(line)
}

fn calc_sum(line: &[u32]) -> f64 {
    const SUM_POWER: f64 = 3.5;
    const SUM_WEIGHT: f64 = 11.0;
    line.iter().fold(0., |acc, &e| acc + (e as f64).powf(SUM_POWER)) * SUM_WEIGHT
}

fn calc_empty(line: &[u32]) -> f64 {
    const EMPTY_WEIGHT: f64 = 270.0;
    line.iter().filter(|&&e| e == 0).count() as f64 * EMPTY_WEIGHT
}

fn calc_merges(line: &[u32]) -> f64 {
    const MERGES_WEIGHT: f64 = 700.0;
    let mut prev = 0;
    let mut counter = 0.;
    let mut merges = 0.;
    for &e in line {
        if prev == e && e != 0 {
            counter += 1.;
        } else if counter > 0. {
            merges += 1. + counter;
            counter = 0.;
        }
        prev = e;
    }
    if counter > 0. {
        merges += 1. + counter;
    }
    merges * MERGES_WEIGHT
}

fn calc_monotonicity(line: &[u32]) -> f64 {
    const MONOTONICITY_POWER: f64 = 4.0;
    const MONOTONICITY_WEIGHT: f64 = 47.0;
    let mut left = 0.;
    let mut right = 0.;
    for pair in line.windows(2) {
        let a = (pair[0] as f64).powf(MONOTONICITY_POWER);
        let b = (pair[1] as f64).powf(MONOTONICITY_POWER);
        if pair[0] > pair[1] {
            left += a - b;
        } else {
            right += b - a;
        }
    }
    left.min(right) * MONOTONICITY_WEIGHT
}

/// Number of distinct nonzero tile values on the board.
pub(crate) fn count_unique(board: &Board) -> u64 {
    let mut bitset = 0u64;
    for &value in board.cells().iter().filter(|&&v| v != 0) {
        bitset |= 1 << exponent(value);
    }
    bitset.count_ones() as u64
}
