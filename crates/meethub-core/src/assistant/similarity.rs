//! Ratcliff/Obershelp ("gestalt") string similarity.

/// Similarity in `[0, 1]`: twice the number of matched characters over the
/// combined length. Matched characters come from repeatedly taking the longest
/// common block and recursing on both sides of it. Two empty strings are
/// identical (1.0).
#[must_use]
pub fn sequence_ratio(a: &str, b: &str) -> f32 {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched = matching_characters(&a, &b);
    (2 * matched) as f32 / total as f32
}

fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = longest_common_block(a, b, alo..ahi, blo..bhi);
        if block.size == 0 {
            continue;
        }
        matched += block.size;
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        let a_end = block.a_start + block.size;
        let b_end = block.b_start + block.size;
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
    }
    matched
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Longest run shared by `a[a_range]` and `b[b_range]`. Ties go to the block
/// starting earliest in `a`, then earliest in `b`.
fn longest_common_block(
    a: &[char],
    b: &[char],
    a_range: std::ops::Range<usize>,
    b_range: std::ops::Range<usize>,
) -> Block {
    let width = b_range.len();
    let mut best = Block {
        a_start: a_range.start,
        b_start: b_range.start,
        size: 0,
    };
    // run[k + 1] = length of the common run ending at a[i], b[b_range.start + k]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    for i in a_range {
        for (k, j) in b_range.clone().enumerate() {
            if a[i] == b[j] {
                let run = prev[k] + 1;
                cur[k + 1] = run;
                if run > best.size {
                    best = Block {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        size: run,
                    };
                }
            } else {
                cur[k + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}
