// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Ownership transfer between sequences.
//!
//! Elements are moved, never cloned. The same two primitives serve resource
//! groups, scope groups and leaf records.

use std::mem;

/// Moves the first `n` elements of `src` onto the end of `dst`, keeping their
/// order. `n` is clamped to `src.len()`.
pub fn move_front<T>(src: &mut Vec<T>, n: usize, dst: &mut Vec<T>) {
    let n = n.min(src.len());
    if n == 0 {
        return;
    }
    if dst.is_empty() {
        *dst = take_front(src, n);
    } else {
        dst.extend(src.drain(..n));
    }
}

/// Splits `src` in two: the first `n` elements are returned and the tail is
/// left in `src`. `n` is clamped to `src.len()`.
///
/// Whichever side is shorter is the one that gets moved, so taking most of a
/// long sequence does not shift the whole thing.
#[must_use]
pub fn take_front<T>(src: &mut Vec<T>, n: usize) -> Vec<T> {
    let len = src.len();
    let n = n.min(len);
    if n == len {
        return mem::take(src);
    }
    if n <= len - n {
        src.drain(..n).collect()
    } else {
        let tail = src.split_off(n);
        mem::replace(src, tail)
    }
}
