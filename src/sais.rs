// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SA-IS: Suffix Array by Induced Sorting
//!
//! Linear-time O(n) suffix array construction over raw corpus bytes.
//!
//! # Algorithm Overview
//!
//! ```text
//! Input: "banana"
//!
//! Step 1: Append sentinel ($) and classify suffixes
//! ┌───┬───┬───┬───┬───┬───┬───┐
//! │ b │ a │ n │ a │ n │ a │ $ │
//! ├───┼───┼───┼───┼───┼───┼───┤
//! │ L │ S │ L │ S │ L │ L │ S │   (S = smaller than next, L = larger)
//! └───┴───┴───┴───┴───┴───┴───┘
//!
//! Step 2: LMS (leftmost S-type) positions: 1, 3, 6
//!
//! Step 3: Induced sort seeded with LMS positions at bucket tails,
//!         then L-types left-to-right, then S-types right-to-left
//!
//! Step 4: Name LMS substrings; recurse if any name repeats
//!
//! Step 5: Induce again from the correctly ordered LMS suffixes
//!
//! Output: [5, 3, 1, 0, 4, 2]   (sentinel dropped)
//! ```
//!
//! The sentinel must be unique and smaller than every input symbol. A corpus
//! may legitimately contain NUL bytes, so inputs that do are lifted into a
//! 257-symbol alphabet before construction instead of reusing byte 0.
//!
//! # References
//!
//! - Nong, Zhang, Chan (2009): "Linear Suffix Array Construction by Almost Pure Induced-Sorting"
//! - <https://doi.org/10.1109/DCC.2009.42>

/// Suffix type classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SuffixType {
    /// S-type: suffix is lexicographically smaller than the next suffix
    S,
    /// L-type: suffix is lexicographically larger than the next suffix
    L,
}

/// Sentinel byte for inputs that never contain it.
const SENTINEL: u8 = 0;

/// Marker for an unfilled suffix array slot.
const EMPTY: usize = usize::MAX;

/// Build the suffix array of `text` in O(n) time.
///
/// `sa[i]` is the starting byte offset of the i-th smallest suffix.
pub fn sais(text: &[u8]) -> Vec<usize> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sa = if text.contains(&SENTINEL) {
        let mut lifted: Vec<usize> = Vec::with_capacity(text.len() + 1);
        lifted.extend(text.iter().map(|&b| b as usize + 1));
        lifted.push(0);
        sais_core(&lifted, 257)
    } else {
        let mut with_sentinel = Vec::with_capacity(text.len() + 1);
        with_sentinel.extend_from_slice(text);
        with_sentinel.push(SENTINEL);
        sais_core(&with_sentinel, 256)
    };

    // The sentinel suffix always sorts first
    sa.retain(|&pos| pos < text.len());
    sa
}

/// SA-IS over any integer alphabet whose last symbol is a unique minimum.
fn sais_core<T>(text: &[T], alphabet_size: usize) -> Vec<usize>
where
    T: Copy + Ord + Into<usize>,
{
    let n = text.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![0],
        _ => {}
    }

    let types = classify_suffixes(text);
    let lms_positions: Vec<usize> = (1..n).filter(|&i| is_lms(&types, i)).collect();

    if lms_positions.is_empty() {
        // Non-decreasing input: nothing to induce from
        let mut sa: Vec<usize> = (0..n).collect();
        sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
        return sa;
    }

    let bucket_sizes = compute_bucket_sizes(text, alphabet_size);

    // First pass: sorts LMS substrings (not yet whole suffixes)
    let sa = induce(text, &types, &bucket_sizes, &lms_positions);

    let (lms_names, unique_count) = name_lms_substrings(text, &types, &sa);
    let reduced: Vec<usize> = lms_positions.iter().map(|&pos| lms_names[pos]).collect();
    drop(lms_names);

    let sorted_lms: Vec<usize> = if unique_count < lms_positions.len() {
        sais_core(&reduced, unique_count)
            .into_iter()
            .map(|i| lms_positions[i])
            .collect()
    } else {
        // Unique names are already ranks
        let mut sorted = vec![0usize; reduced.len()];
        for (i, &name) in reduced.iter().enumerate() {
            sorted[name] = lms_positions[i];
        }
        sorted
    };

    induce(text, &types, &bucket_sizes, &sorted_lms)
}

/// Place LMS suffixes at bucket tails, then induce L-types and S-types.
fn induce<T>(text: &[T], types: &[SuffixType], bucket_sizes: &[usize], lms: &[usize]) -> Vec<usize>
where
    T: Copy + Into<usize>,
{
    let n = text.len();
    let mut sa = vec![EMPTY; n];

    let mut tails = compute_bucket_tails(bucket_sizes);
    for &pos in lms.iter().rev() {
        let c = text[pos].into();
        tails[c] -= 1;
        sa[tails[c]] = pos;
    }

    let mut heads = compute_bucket_heads(bucket_sizes);
    for i in 0..n {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::L {
            let c = text[j].into();
            sa[heads[c]] = j;
            heads[c] += 1;
        }
    }

    let mut tails = compute_bucket_tails(bucket_sizes);
    for i in (0..n).rev() {
        let pos = sa[i];
        if pos == EMPTY || pos == 0 {
            continue;
        }
        let j = pos - 1;
        if types[j] == SuffixType::S {
            let c = text[j].into();
            tails[c] -= 1;
            sa[tails[c]] = j;
        }
    }

    sa
}

/// Assign each LMS position the rank of its LMS substring.
///
/// Returns names indexed by text position plus the number of distinct names.
fn name_lms_substrings<T>(text: &[T], types: &[SuffixType], sa: &[usize]) -> (Vec<usize>, usize)
where
    T: Copy + Eq,
{
    let mut names = vec![0usize; text.len()];
    let mut name = 0usize;
    let mut prev: Option<usize> = None;

    for &pos in sa {
        if !is_lms(types, pos) {
            continue;
        }
        if let Some(prev) = prev {
            if !lms_substrings_equal(text, types, prev, pos) {
                name += 1;
            }
        }
        names[pos] = name;
        prev = Some(pos);
    }

    (names, name + 1)
}

/// Classify each suffix as S-type or L-type.
fn classify_suffixes<T: Ord>(text: &[T]) -> Vec<SuffixType> {
    let n = text.len();
    let mut types = vec![SuffixType::S; n];

    for i in (0..n - 1).rev() {
        types[i] = match text[i].cmp(&text[i + 1]) {
            std::cmp::Ordering::Greater => SuffixType::L,
            std::cmp::Ordering::Less => SuffixType::S,
            std::cmp::Ordering::Equal => types[i + 1],
        };
    }

    types
}

#[inline]
fn is_lms(types: &[SuffixType], i: usize) -> bool {
    i > 0 && i < types.len() && types[i] == SuffixType::S && types[i - 1] == SuffixType::L
}

fn compute_bucket_sizes<T: Copy + Into<usize>>(text: &[T], alphabet_size: usize) -> Vec<usize> {
    let mut sizes = vec![0; alphabet_size];
    for &c in text {
        sizes[c.into()] += 1;
    }
    sizes
}

fn compute_bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            let head = sum;
            sum += size;
            head
        })
        .collect()
}

fn compute_bucket_tails(sizes: &[usize]) -> Vec<usize> {
    let mut sum = 0;
    sizes
        .iter()
        .map(|&size| {
            sum += size;
            sum
        })
        .collect()
}

/// Compare two LMS substrings (symbols and types up to the next LMS position).
fn lms_substrings_equal<T: Eq>(text: &[T], types: &[SuffixType], i: usize, j: usize) -> bool {
    if i == j {
        return true;
    }

    let n = text.len();
    let mut k = 0;

    loop {
        let pi = i + k;
        let pj = j + k;

        if pi >= n || pj >= n {
            return pi >= n && pj >= n;
        }
        if text[pi] != text[pj] || types[pi] != types[pj] {
            return false;
        }

        if k > 0 {
            let lms_i = is_lms(types, pi);
            let lms_j = is_lms(types, pj);
            if lms_i && lms_j {
                return true;
            }
            if lms_i != lms_j {
                return false;
            }
        }

        k += 1;
    }
}
