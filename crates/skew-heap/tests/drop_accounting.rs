//! Every key is dropped exactly once, whichever path destroys it.

use skew_heap::{ArenaSkewHeap, MaxOrder, SkewHeap};
use skew_test_utils::{drain, DropLedger};

#[test]
fn popped_keys_drop_with_caller() {
    let ledger = DropLedger::new();
    let mut heap = SkewHeap::new();
    for k in 0..50 {
        heap.push(ledger.track(k));
    }
    let popped = drain(&mut heap);
    assert_eq!(ledger.dropped(), 0);
    drop(popped);
    assert_eq!(ledger.dropped(), 50);
}

#[test]
fn clear_and_drop_destroy_remaining_keys() {
    let ledger = DropLedger::new();
    let mut heap = SkewHeap::with_comparator(MaxOrder);
    for k in 0..100 {
        heap.push(ledger.track(k));
    }
    heap.clear();
    assert_eq!(ledger.dropped(), 100);

    for k in 0..30 {
        heap.push(ledger.track(k));
    }
    drop(heap);
    assert_eq!(ledger.dropped(), 130);
}

#[test]
fn partial_drain_drops_the_rest() {
    let ledger = DropLedger::new();
    let mut heap = SkewHeap::new();
    for k in 0..10 {
        heap.push(ledger.track(k));
    }
    let first = heap.drain_sorted().next();
    assert_eq!(first.as_ref().map(|t| t.key), Some(0));
    assert_eq!(ledger.dropped(), 9);
    drop(first);
    assert_eq!(ledger.dropped(), 10);
}

#[test]
fn arena_heap_drops_each_key_once() {
    let ledger = DropLedger::new();
    let mut a = ArenaSkewHeap::new();
    let mut b = ArenaSkewHeap::new();
    for k in 0..40 {
        a.push(ledger.track(k)).unwrap();
        b.push(ledger.track(k + 40)).unwrap();
    }
    a.merge(&mut b).unwrap();
    assert_eq!(ledger.dropped(), 0);

    let top = a.pop().unwrap();
    assert_eq!(top.key, 0);
    drop(top);
    assert_eq!(ledger.dropped(), 1);

    drop(b);
    assert_eq!(ledger.dropped(), 1);
    drop(a);
    assert_eq!(ledger.dropped(), 80);
}

#[test]
fn into_iter_drops_unconsumed_keys() {
    let ledger = DropLedger::new();
    let mut heap = SkewHeap::new();
    for k in 0..5 {
        heap.push(ledger.track(k));
    }
    let mut it = heap.into_iter();
    drop(it.next());
    drop(it);
    assert_eq!(ledger.dropped(), 5);
}
