use std::cell::Cell;
use std::rc::Rc;

use cyclic_dlist::{Deck, DeckConfig, Destructor, Duplicator, Error, Link};

const CHEESE: &str = "boursin";
const BREAD: &str = "baguette";
const WINE: &str = "bordeaux";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `[G, baguette, boursin, G', bordeaux]`
fn picnic() -> (Deck<&'static str>, Link, Link) {
    let mut deck = Deck::new();
    let head = deck.insert_after(None, None).unwrap();

    let node = deck.insert_after(Some(head), Some(CHEESE)).unwrap();
    assert!(std::ptr::eq(*deck.item(Some(node)).unwrap(), CHEESE));
    let node = deck.insert_after(Some(head), Some(BREAD)).unwrap();
    assert!(std::ptr::eq(*deck.item(Some(node)).unwrap(), BREAD));
    let guard = deck.insert_before(Some(head), None).unwrap();
    assert_eq!(deck.item(Some(guard)), None);
    let node = deck.insert_before(Some(head), Some(WINE)).unwrap();
    assert!(std::ptr::eq(*deck.item(Some(node)).unwrap(), WINE));

    (deck, head, guard)
}

#[test]
fn iterate_till_next_guard() {
    init_logger();
    let (deck, head, _) = picnic();

    let node = deck.first(Some(head), None);
    assert_eq!(deck.item(node), Some(&BREAD));
    let node = deck.next(node.unwrap(), None);
    assert_eq!(deck.item(node), Some(&CHEESE));
    assert_eq!(deck.next(node.unwrap(), None), None);
}

#[test]
fn iterate_all_the_way_around() {
    init_logger();
    let (deck, head, _) = picnic();

    let node = deck.first(Some(head), Some(head));
    assert_eq!(deck.item(node), Some(&BREAD));
    let node = deck.next(node.unwrap(), Some(head));
    assert_eq!(deck.item(node), Some(&CHEESE));
    let node = deck.next(node.unwrap(), Some(head));
    assert_eq!(deck.item(node), Some(&WINE));
    assert_eq!(deck.next(node.unwrap(), Some(head)), None);
    assert_eq!(deck.next(node.unwrap(), None), None);
}

#[test]
fn detach_front_until_exhausted() {
    init_logger();
    let (mut deck, head, guard) = picnic();
    let mut cursor = Some(head);

    let node = deck.detach(&mut cursor);
    assert_eq!(node, Some(head));
    assert_eq!(deck.item(node), None);
    assert_eq!(deck.item(cursor), Some(&BREAD));
    let mut node = node;
    deck.destroy(&mut node);
    assert_eq!(node, None);

    for (expected, next) in [(Some(BREAD), Some(CHEESE)), (Some(CHEESE), None)] {
        let mut node = deck.detach(&mut cursor);
        assert_eq!(deck.item(node).copied(), expected);
        assert_eq!(deck.item(cursor).copied(), next);
        deck.destroy(&mut node);
        assert_eq!(node, None);
    }

    assert_eq!(cursor, Some(guard));
    assert_eq!(deck.detach(&mut cursor), Some(guard));
    let node = deck.detach(&mut cursor);
    assert_eq!(deck.item(node), Some(&WINE));
    assert_eq!(cursor, None);

    deck.destroy(&mut cursor);
    assert_eq!(cursor, None);
    assert_eq!(deck.len(), 2);
}

#[test]
fn destructor_runs_once_per_live_member() {
    init_logger();
    let destroyed = Rc::new(Cell::new(0));
    let counter = Rc::clone(&destroyed);
    let destructor: Destructor<String> = Rc::new(move |_: String| counter.set(counter.get() + 1));
    let duplicator: Duplicator<String> = Rc::new(|s: &String| Some(s.clone()));

    let mut deck = Deck::new();
    let head = deck.construct(None).unwrap();
    deck.set_destructor(head, Some(destructor));
    deck.set_duplicator(head, Some(duplicator));

    let word = String::from("gruyère");
    for _ in 0..10 {
        deck.insert_before(Some(head), Some(word.clone())).unwrap();
    }
    let mut cursor = deck.first(Some(head), None);
    for _ in 0..3 {
        assert_eq!(deck.remove(&mut cursor).as_deref(), Some("gruyère"));
    }
    assert_eq!(destroyed.get(), 0);

    let mut cursor = Some(head);
    deck.destroy(&mut cursor);
    assert_eq!(destroyed.get(), 7);
    assert!(deck.is_empty());
}

#[test]
fn failed_insertions_leave_ring_untouched() {
    init_logger();
    let mut deck = Deck::with_config(DeckConfig::default().with_node_limit(3));
    let head = deck.construct(None).unwrap();
    let duplicator: Duplicator<u64> = Rc::new(|x: &u64| x.checked_mul(2));
    deck.set_duplicator(head, Some(duplicator));

    let a = deck.insert_after(Some(head), Some(1)).unwrap();
    assert_eq!(deck.item(Some(a)), Some(&2));
    let error = deck.insert_after(Some(a), Some(u64::MAX)).unwrap_err();
    assert_eq!(error.kind(), Error::DuplicationFailed);
    assert_eq!(error.into_item(), Some(u64::MAX));
    let b = deck.insert_after(Some(a), Some(2)).unwrap();
    // no destructor: the orphaned copy comes back with the item
    let error = deck.insert_after(Some(b), Some(3)).unwrap_err();
    assert_eq!(error.kind(), Error::OutOfMemory);
    assert_eq!(error.into_parts(), (Some(3), Some(6)));

    assert_eq!(deck.ring(head).collect::<Vec<_>>(), vec![head, a, b]);
    assert!(deck.is_well_formed(head));
}

#[test]
fn bucket_relocation() {
    init_logger();
    let mut deck = Deck::new();
    let buckets: Vec<Link> = (0..4).map(|_| deck.construct(None).unwrap()).collect();
    let nodes: Vec<Link> = (0..8)
        .map(|i| deck.insert_before(Some(buckets[0]), Some(i)).unwrap())
        .collect();

    for (i, &node) in nodes.iter().enumerate() {
        deck.move_before(node, buckets[i % buckets.len()]);
    }
    for (b, &bucket) in buckets.iter().enumerate() {
        let items: Vec<i32> = deck.items(Some(bucket), Some(bucket)).copied().collect();
        let expected: Vec<i32> = (0..8).filter(|i| *i as usize % buckets.len() == b).collect();
        assert_eq!(items, expected);
        assert!(deck.is_well_formed(bucket));
    }
    assert_eq!(deck.len(), 12);
}
