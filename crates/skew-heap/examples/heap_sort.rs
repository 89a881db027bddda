//! Heap sort over stdin: whitespace-separated integers in, sorted out.
//!
//! Demonstrates:
//!   1. Filling a free-store or arena-backed heap from parsed input
//!   2. Swapping the ordering policy (`--max` for descending output)
//!   3. Draining in preference order, then returning arena blocks
//!
//! Run with:
//!   echo "5 3 7 2 9 1 8" | cargo run --example heap_sort
//!   echo "5 3 7 2 9 1 8" | cargo run --example heap_sort -- --max --arena

use std::io::{self, BufWriter, Read, Write};

use skew_heap::{ArenaSkewHeap, Compare, MaxOrder, MinOrder, SkewHeap};

fn parse(input: &str) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut keys = Vec::new();
    for tok in input.split_whitespace() {
        let k = tok
            .parse::<i64>()
            .map_err(|e| format!("bad integer {tok:?}: {e}"))?;
        keys.push(k);
    }
    Ok(keys)
}

fn sort_boxed<C: Compare<i64>>(cmp: C, keys: Vec<i64>) -> Vec<i64> {
    let mut heap = SkewHeap::with_comparator(cmp);
    heap.extend(keys);
    heap.into_sorted_vec()
}

fn sort_arena<C: Compare<i64>>(
    cmp: C,
    keys: Vec<i64>,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut heap = ArenaSkewHeap::with_comparator(cmp);
    heap.reserve_nodes(keys.len())?;
    for k in keys {
        heap.push(k)?;
    }
    let sorted: Vec<i64> = heap.drain_sorted().collect();
    heap.release_all_to_pool()?;
    Ok(sorted)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let descending = args.iter().any(|a| a == "--max");
    let arena = args.iter().any(|a| a == "--arena");

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let keys = parse(&input)?;

    let sorted = match (arena, descending) {
        (false, false) => sort_boxed(MinOrder, keys),
        (false, true) => sort_boxed(MaxOrder, keys),
        (true, false) => sort_arena(MinOrder, keys)?,
        (true, true) => sort_arena(MaxOrder, keys)?,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for (i, k) in sorted.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{k}")?;
    }
    writeln!(out)?;
    Ok(())
}
