use std::fmt;
use std::iter::FusedIterator;

use crate::deck::{Deck, Link};

/// An iterator over the items met by a [`Deck::first`]/[`Deck::next`] pass.
///
/// Created by [`Deck::items`]. Besides the terminator and guard rules of
/// `next`, it stops before yielding the first node a second time, so it
/// never cycles on a ring without guards.
///
/// # Examples
///
/// ```
/// use cyclic_dlist::Deck;
///
/// let mut deck = Deck::new();
/// let a = deck.construct(Some('a')).unwrap();
/// deck.insert_after(Some(a), Some('b')).unwrap();
///
/// // No guard and no terminator: one round trip, then stop
/// let mut items = deck.items(Some(a), None);
/// assert_eq!(items.next(), Some(&'a'));
/// assert_eq!(items.next(), Some(&'b'));
/// assert_eq!(items.next(), None);
/// assert_eq!(items.next(), None);
/// ```
pub struct Items<'a, T: 'a> {
    deck: &'a Deck<T>,
    origin: Option<Link>,
    current: Option<Link>,
    terminator: Option<Link>,
}

impl<'a, T: 'a> Items<'a, T> {
    pub(crate) fn new(deck: &'a Deck<T>, start: Option<Link>, terminator: Option<Link>) -> Self {
        let current = deck.first(start, terminator);
        Self {
            deck,
            origin: current,
            current,
            terminator,
        }
    }
}

impl<'a, T: 'a> Iterator for Items<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        let origin = self.origin;
        self.current = self
            .deck
            .next(link, self.terminator)
            .filter(|&next| Some(next) != origin);
        self.deck.item(Some(link))
    }
}

impl<'a, T: 'a> FusedIterator for Items<'a, T> {}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Items<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Items")
            .field("current", &self.current)
            .field("terminator", &self.terminator)
            .finish()
    }
}

/// An iterator over every member of a ring, guards included.
///
/// Created by [`Deck::ring`]. It yields each [`Link`] exactly once, in `next`
/// order, starting with the link it was created from.
///
/// # Examples
///
/// ```
/// use cyclic_dlist::Deck;
///
/// let mut deck = Deck::new();
/// let head = deck.construct(None).unwrap();
/// let a = deck.insert_before(Some(head), Some(1)).unwrap();
/// let b = deck.insert_before(Some(head), Some(2)).unwrap();
///
/// assert_eq!(deck.ring(a).collect::<Vec<_>>(), vec![a, b, head]);
/// ```
#[derive(Clone)]
pub struct Ring<'a, T: 'a> {
    deck: &'a Deck<T>,
    start: Link,
    current: Option<Link>,
}

impl<'a, T: 'a> Ring<'a, T> {
    pub(crate) fn new(deck: &'a Deck<T>, start: Link) -> Self {
        assert!(deck.contains(start), "link refers to a released node");
        Self {
            deck,
            start,
            current: Some(start),
        }
    }
}

impl<'a, T: 'a> Iterator for Ring<'a, T> {
    type Item = Link;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        let next = self.deck.next_link(link);
        self.current = if next == self.start { None } else { Some(next) };
        Some(link)
    }
}

impl<'a, T: 'a> FusedIterator for Ring<'a, T> {}

impl<'a, T: 'a> fmt::Debug for Ring<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("start", &self.start)
            .field("current", &self.current)
            .finish()
    }
}

impl<T> Deck<T> {
    /// Provides an iterator over the items of a `first`/`next` pass from
    /// `start`, bounded by `terminator`.
    #[inline]
    pub fn items(&self, start: Option<Link>, terminator: Option<Link>) -> Items<'_, T> {
        Items::new(self, start, terminator)
    }

    /// Provides an iterator over the links of every member of the ring
    /// containing `link`, starting at `link`.
    ///
    /// # Panics
    ///
    /// Panics if `link` was released.
    #[inline]
    pub fn ring(&self, link: Link) -> Ring<'_, T> {
        Ring::new(self, link)
    }
}

#[cfg(test)]
mod tests {
    use crate::deck::Deck;

    #[test]
    fn items_bounded_and_unbounded() {
        let mut deck = Deck::new();
        let head = deck.construct(None).unwrap();
        for i in 1..=2 {
            deck.insert_before(Some(head), Some(i)).unwrap();
        }
        let guard = deck.insert_before(Some(head), None).unwrap();
        deck.insert_before(Some(head), Some(3)).unwrap();

        let unbounded: Vec<_> = deck.items(Some(head), None).copied().collect();
        assert_eq!(unbounded, vec![1, 2]);
        let bounded: Vec<_> = deck.items(Some(head), Some(head)).copied().collect();
        assert_eq!(bounded, vec![1, 2, 3]);
        let from_guard: Vec<_> = deck.items(Some(guard), Some(guard)).copied().collect();
        assert_eq!(from_guard, vec![3, 1, 2]);
        assert_eq!(deck.items(None, None).next(), None);
    }

    #[test]
    fn items_terminator_is_first_item() {
        let mut deck = Deck::new();
        let a = deck.construct(Some(1)).unwrap();
        deck.insert_after(Some(a), Some(2)).unwrap();
        deck.insert_after(Some(a), None).unwrap();
        // `first` returns its argument regardless of the terminator
        let items: Vec<_> = deck.items(Some(a), Some(a)).copied().collect();
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn ring_members() {
        let mut deck = Deck::new();
        let head = deck.construct(None).unwrap();
        assert_eq!(deck.ring(head).collect::<Vec<_>>(), vec![head]);

        let a = deck.insert_after(Some(head), Some('a')).unwrap();
        let g = deck.insert_after(Some(a), None).unwrap();
        assert_eq!(deck.ring(g).collect::<Vec<_>>(), vec![g, head, a]);
        assert_eq!(deck.ring(head).count(), 3);
    }

    #[test]
    #[should_panic(expected = "link refers to a released node")]
    fn ring_released_link() {
        let mut deck = Deck::new();
        let a = deck.construct(Some(1)).unwrap();
        let mut cursor = Some(a);
        deck.destroy(&mut cursor);
        let _ = deck.ring(a);
    }
}
