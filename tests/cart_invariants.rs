//! Operation-sequence invariants for the cart store.
//!
//! After any sequence of mutations, the derived totals must equal a pure
//! fold over the current lines, every stored line must keep a quantity of
//! at least one, and no two lines may share an id.

use std::collections::HashSet;

use storefront_cart::{
    CartStore, CartTotals, MemorySnapshot, ProductDescriptor, ProductId,
};

/// A small descriptor pool with deliberately awkward rows: a negative list
/// price, an oversized discount, a reference price below the list price,
/// and a row carrying a suggested quantity.
fn pool_descriptor(index: usize) -> ProductDescriptor {
    let id = ProductId::new(format!("prod-{}", index));
    match index % 5 {
        0 => ProductDescriptor::new(id, "Refrigerator", 82990)
            .with_mrp(94990)
            .with_discount(12),
        1 => ProductDescriptor::new(id, "Washing Machine", 38990).with_mrp(35000),
        2 => ProductDescriptor::new(id, "Air Conditioner", -46490),
        3 => ProductDescriptor::new(id, "Microwave Oven", 14490).with_discount(150),
        _ => ProductDescriptor::new(id, "Ceiling Fan", 3490).with_quantity(2),
    }
}

fn pool_id(index: usize) -> ProductId {
    ProductId::new(format!("prod-{}", index))
}

fn assert_aggregate_invariants(store: &CartStore) {
    let lines = &store.state().lines;

    assert_eq!(store.totals(), CartTotals::calculate(lines));

    let expected_items: u32 = lines.iter().map(|l| l.quantity).sum();
    let expected_price: u64 = lines.iter().map(|l| l.line_total()).sum();
    assert_eq!(store.totals().total_items, expected_items);
    assert_eq!(store.totals().total_price, expected_price);

    let mut seen = HashSet::new();
    for line in lines {
        assert!(line.quantity >= 1, "stored line must keep quantity >= 1");
        assert!(seen.insert(line.id.clone()), "line ids must be unique");
    }
}

#[test]
fn scripted_sequence_keeps_totals_consistent() {
    let backend = MemorySnapshot::new();
    let mut store = CartStore::new(Box::new(backend.clone()));

    store.add_line(&pool_descriptor(0), Some(2));
    assert_aggregate_invariants(&store);

    store.add_line(&pool_descriptor(0), Some(3));
    assert_aggregate_invariants(&store);
    assert_eq!(store.state().line_count(), 1);
    assert_eq!(store.state().line(&pool_id(0)).expect("line").quantity, 5);

    store.add_line(&pool_descriptor(1), None);
    store.add_line(&pool_descriptor(4), None); // suggested quantity 2
    assert_aggregate_invariants(&store);
    assert_eq!(store.state().line(&pool_id(4)).expect("line").quantity, 2);

    store.set_quantity(&pool_id(1), 4);
    assert_aggregate_invariants(&store);

    store.remove_line(&pool_id(0));
    store.remove_line(&pool_id(0)); // second removal is a no-op
    assert_aggregate_invariants(&store);
    assert!(!store.contains_line(&pool_id(0)));

    store.add_line(&pool_descriptor(2), Some(1)); // negative list price
    store.add_line(&pool_descriptor(3), Some(2)); // oversized discount
    assert_aggregate_invariants(&store);

    // The persisted snapshot mirrors the in-memory aggregate after every
    // mutation.
    assert_eq!(backend.last_saved().expect("snapshot saved"), *store.state());

    store.clear();
    assert_aggregate_invariants(&store);
    assert!(store.state().is_empty());
    assert_eq!(store.totals(), CartTotals::default());
}

#[cfg(feature = "full-tests")]
mod properties {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add { index: usize, quantity: Option<u32> },
        Remove { index: usize },
        SetQuantity { index: usize, quantity: u32 },
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..5usize, proptest::option::of(1..6u32))
                .prop_map(|(index, quantity)| Op::Add { index, quantity }),
            (0..5usize).prop_map(|index| Op::Remove { index }),
            (0..5usize, 0..6u32)
                .prop_map(|(index, quantity)| Op::SetQuantity { index, quantity }),
            Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn totals_never_drift(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut store = CartStore::new(Box::new(MemorySnapshot::new()));

            for op in ops {
                match op {
                    Op::Add { index, quantity } => {
                        store.add_line(&pool_descriptor(index), quantity);
                    },
                    Op::Remove { index } => store.remove_line(&pool_id(index)),
                    Op::SetQuantity { index, quantity } => {
                        store.set_quantity(&pool_id(index), quantity);
                    },
                    Op::Clear => store.clear(),
                }
                assert_aggregate_invariants(&store);
            }
        }

        #[test]
        fn set_quantity_zero_always_removes(
            index in 0..5usize,
            quantity in 1..6u32,
        ) {
            let mut store = CartStore::new(Box::new(MemorySnapshot::new()));

            store.add_line(&pool_descriptor(index), Some(quantity));
            store.set_quantity(&pool_id(index), 0);

            prop_assert!(!store.contains_line(&pool_id(index)));
            prop_assert_eq!(store.totals(), CartTotals::default());
        }
    }
}
