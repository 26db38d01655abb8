//! Kani proof harnesses for the claim rules.
//!
//! Bounded proofs that the structured rules agree with their plain
//! definitions for every small grid and announcement sequence.

use crate::rules::{is_early_five_complete, is_line_complete};
use crate::ticket::Cell;

const MAX_ANNOUNCED: usize = 4;

fn any_cell() -> Cell {
    let n: u8 = kani::any();
    kani::assume(n < 8);
    Cell::from(u32::from(n))
}

fn any_announced() -> ([u32; MAX_ANNOUNCED], usize) {
    let len: usize = kani::any();
    kani::assume(len <= MAX_ANNOUNCED);
    let mut announced = [0u32; MAX_ANNOUNCED];
    for slot in announced.iter_mut() {
        let n: u8 = kani::any();
        kani::assume(n < 8);
        *slot = u32::from(n);
    }
    (announced, len)
}

/// Proves: a line is accepted iff every row number was announced and the
/// last announcement is a row number.
#[kani::proof]
#[kani::unwind(6)]
fn verify_line_definition() {
    let row = [any_cell(), any_cell(), any_cell()];
    let (buf, len) = any_announced();
    let announced = &buf[..len];

    let all_called = row
        .iter()
        .filter_map(|cell| cell.number())
        .all(|n| announced.contains(&n));
    let last_on_row = announced
        .last()
        .is_some_and(|last| row.iter().any(|cell| cell.number() == Some(*last)));

    assert_eq!(is_line_complete(&row, announced), all_called && last_on_row);
}

/// Proves: an early five is never accepted with fewer than five
/// announcements.
#[kani::proof]
#[kani::unwind(6)]
fn verify_early_five_needs_five_calls() {
    let rows = [
        [any_cell(), any_cell(), any_cell()],
        [any_cell(), any_cell(), any_cell()],
    ];
    let (buf, len) = any_announced();

    assert!(!is_early_five_complete(&rows, &buf[..len]));
}
