//! Check catalog for the demo harness.
//!
//! Each check exercises one slice of the documented API, prints the sequence
//! it built, and reports one PASS/FAIL line per assertion. A check returns
//! `true` when every assertion held.

use textseq::{Sequence, SequenceError};

/// A named check.
pub type Check = (&'static str, fn() -> bool);

/// All checks, in presentation order.
pub fn all() -> Vec<Check> {
    vec![
        ("create_and_print", create_and_print),
        ("independent_sequences", independent_sequences),
        ("push_back", push_back),
        ("pop_back", pop_back),
        ("insert", insert),
        ("erase", erase),
        ("erase_range", erase_range),
        ("front_and_back", front_and_back),
        ("clear_empty_len", clear_empty_len),
        ("clone_independence", clone_independence),
        ("clone_from_assignment", clone_from_assignment),
        ("render_skips_empty", render_skips_empty),
        ("empty_sequence_errors", empty_sequence_errors),
        ("out_of_bounds_errors", out_of_bounds_errors),
        ("sort_by_slot", sort_by_slot),
    ]
}

/// Prints one PASS/FAIL line and passes the verdict through.
fn expect(condition: bool, label: &str) -> bool {
    if condition {
        println!("PASS: {label}");
    } else {
        println!("FAIL: {label}");
    }
    condition
}

fn create_and_print() -> bool {
    let mut s = Sequence::with_len(4);
    let mut ok = true;
    for (i, v) in ["A", "B", "C", "D"].iter().enumerate() {
        ok &= s.set(i, *v).is_ok();
    }
    println!("  sequence: {s}");
    ok &= expect(s.len() == 4, "size is 4 after filling");
    ok &= expect(s.to_string() == "<A, B, C, D>", "renders all four values");
    ok
}

fn independent_sequences() -> bool {
    let mut s1 = Sequence::with_len(3);
    let mut s2 = Sequence::with_len(3);
    let mut ok = true;
    for (i, (a, b)) in [("A", "X"), ("B", "Y"), ("C", "Z")].iter().enumerate() {
        ok &= s1.set(i, *a).is_ok();
        ok &= s2.set(i, *b).is_ok();
    }
    println!("  s1: {s1}, s2: {s2}");
    ok &= expect(
        s1.get(0) == Ok("A") && s2.get(0) == Ok("X"),
        "sequences store values separately",
    );
    ok
}

fn push_back() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");
    println!("  sequence: {s}");
    let mut ok = expect(s.len() == 3, "size after push_back");
    ok &= expect(s.back() == Ok("C"), "last pushed value is the back");
    ok
}

fn pop_back() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");
    let popped = s.pop_back();
    println!("  sequence after pop: {s}");
    let mut ok = expect(popped == Ok("C".to_string()), "pop_back returns the tail value");
    ok &= expect(s.len() == 2, "size after pop_back");
    ok &= expect(s.to_string() == "<A, B>", "remaining values unchanged");
    ok
}

fn insert() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("C");
    let mut ok = s.insert(1, "B").is_ok();
    println!("  sequence: {s}");
    ok &= expect(s.get(1) == Ok("B"), "insert in middle works");
    ok &= expect(s.len() == 3, "size after insert");

    ok &= s.insert(s.len(), "D").is_ok();
    ok &= expect(s.back() == Ok("D"), "insert at size() appends");
    ok
}

fn erase() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");
    let mut ok = s.erase(1).is_ok();
    println!("  sequence: {s}");
    ok &= expect(s.get(1) == Ok("C"), "erase middle element shifts later ones");
    ok &= expect(s.len() == 2, "size after erase");
    ok
}

fn erase_range() -> bool {
    let mut s = Sequence::new();
    for v in ["0", "1", "2", "3", "4"] {
        s.push_back(v);
    }
    let mut ok = s.erase_range(1, 3).is_ok();
    println!("  sequence: {s}");
    ok &= expect(s.to_string() == "<0, 4>", "window [1, 4) removed");
    ok &= expect(s.len() == 2, "size dropped by the window width");
    ok &= expect(s.erase_range(100, 0).is_ok(), "zero-count erase is a no-op");
    ok
}

fn front_and_back() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");
    println!("  front: {:?}, back: {:?}", s.front(), s.back());
    expect(s.front() == Ok("A") && s.back() == Ok("C"), "front and back access")
}

fn clear_empty_len() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.clear();
    println!("  after clear: {s}");
    let mut ok = expect(s.is_empty(), "sequence is empty after clear");
    ok &= expect(s.len() == 0, "size is 0 after clear");
    s.push_back("C");
    ok &= expect(s.len() == 1, "sequence is reusable after clear");
    ok
}

fn clone_independence() -> bool {
    let mut s1 = Sequence::new();
    s1.push_back("A");
    s1.push_back("B");

    let mut s2 = s1.clone();
    let mut ok = s2.set(0, "X").is_ok();
    println!("  original: {s1}, copy: {s2}");
    ok &= expect(s1.get(0) == Ok("A"), "original unchanged after mutating the copy");
    ok &= expect(s2.get(0) == Ok("X"), "copy took the mutation");
    ok
}

fn clone_from_assignment() -> bool {
    let mut s1 = Sequence::new();
    s1.push_back("A");
    s1.push_back("B");

    let mut s2 = Sequence::with_len(5);
    s2.clone_from(&s1);
    let mut ok = expect(s2 == s1, "assignment replaces previous contents");
    ok &= s2.set(0, "X").is_ok();
    println!("  original: {s1}, copy: {s2}");
    ok &= expect(s1.get(0) == Ok("A"), "original unchanged after assignment");
    ok
}

fn render_skips_empty() -> bool {
    let mut s = Sequence::with_len(3);
    let mut ok = s.set(0, "A").is_ok();
    ok &= s.set(1, "B").is_ok();
    // Third element deliberately left empty.
    println!("  sequence: {s}");
    ok &= expect(s.to_string() == "<A, B>", "empty values are skipped, no trailing comma");
    ok &= expect(Sequence::new().to_string() == "<>", "empty sequence renders as <>");
    ok
}

fn empty_sequence_errors() -> bool {
    let mut s = Sequence::new();
    let mut ok = expect(
        s.front() == Err(SequenceError::EmptyContainer),
        "front() on empty fails",
    );
    ok &= expect(
        s.back() == Err(SequenceError::EmptyContainer),
        "back() on empty fails",
    );
    ok &= expect(
        s.pop_back() == Err(SequenceError::EmptyContainer),
        "pop_back() on empty fails",
    );
    ok
}

fn out_of_bounds_errors() -> bool {
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");

    let mut ok = expect(
        s.get(s.len())
            == Err(SequenceError::IndexOutOfBounds {
                position: 3,
                length: 3,
            }),
        "get(size()) fails",
    );
    ok &= expect(
        s.insert(4, "X")
            == Err(SequenceError::IndexOutOfBounds {
                position: 4,
                length: 3,
            }),
        "insert past size() fails",
    );
    ok &= expect(
        s.erase_range(1, 3)
            == Err(SequenceError::IndexOutOfBounds {
                position: 4,
                length: 3,
            }),
        "erase window past the end fails",
    );
    ok &= expect(s.len() == 3, "failed calls leave the sequence untouched");
    ok
}

fn sort_by_slot() -> bool {
    // Slot churn: A, B, C fill slots 0..2; erasing A frees slot 0, which the
    // push of D then recycles.
    let mut s = Sequence::new();
    s.push_back("A");
    s.push_back("B");
    s.push_back("C");
    let mut ok = s.erase(0).is_ok();
    s.push_back("D");
    println!("  before: {s}");

    s.sort_by_slot(true);
    println!("  after ascending sort: {s}");
    ok &= expect(s.to_string() == "<D, B, C>", "traversal follows slot order");

    s.sort_by_slot(false);
    ok &= expect(s.to_string() == "<C, B, D>", "descending reverses the chain");
    ok
}
