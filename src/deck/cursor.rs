//! Cursor-driven operations of a [`Deck`].
//!
//! The detach family takes the cursor as `&mut Option<Link>`: the node under
//! the cursor leaves its ring and the cursor moves on to the node's former
//! successor, or to `None` when the node was the last member of the ring.
//!
//! Traversal with [`Deck::first`] and [`Deck::next`] comes in two flavours,
//! picked by the terminator:
//!
//! - without terminator, the pass stops at the very next guard, so a guard
//!   delimits a run of items;
//! - with a terminator, guards are skipped and the pass stops when the
//!   terminator is reached, which makes a full round trip over a ring.
//!
//! # Examples
//!
//! ```
//! use cyclic_dlist::Deck;
//!
//! // [#, 1, 2, #', 3] where `#` and `#'` are guards
//! let mut deck = Deck::new();
//! let head = deck.construct(None).unwrap();
//! let one = deck.insert_before(Some(head), Some(1)).unwrap();
//! deck.insert_before(Some(head), Some(2)).unwrap();
//! deck.insert_before(Some(head), None).unwrap();
//! deck.insert_before(Some(head), Some(3)).unwrap();
//!
//! // Stop at the next guard
//! let node = deck.first(Some(head), None);
//! assert_eq!(node, Some(one));
//! let node = deck.next(one, None).unwrap();
//! assert_eq!(deck.item(Some(node)), Some(&2));
//! assert_eq!(deck.next(node, None), None);
//!
//! // Go all the way around
//! let all: Vec<_> = deck.items(Some(head), Some(head)).copied().collect();
//! assert_eq!(all, vec![1, 2, 3]);
//! ```

use log::trace;

use crate::deck::{Deck, Link};

impl<T> Deck<T> {
    /// Detaches the node under the cursor from its ring and returns it as a
    /// singleton ring, now owned by the caller. The cursor advances to the
    /// former successor, or becomes `None` if the node was alone.
    ///
    /// Returns `None` and does nothing if the cursor is `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let a = deck.construct(Some('a')).unwrap();
    /// let b = deck.insert_after(Some(a), Some('b')).unwrap();
    ///
    /// let mut cursor = Some(a);
    /// assert_eq!(deck.detach(&mut cursor), Some(a));
    /// assert_eq!(cursor, Some(b));
    /// assert_eq!(deck.next_link(a), a);
    /// assert_eq!(deck.next_link(b), b);
    ///
    /// assert_eq!(deck.detach(&mut cursor), Some(b));
    /// assert_eq!(cursor, None);
    /// ```
    pub fn detach(&mut self, cursor: &mut Option<Link>) -> Option<Link> {
        let link = (*cursor)?;
        let next = self.node(link).next;
        *cursor = if next == link { None } else { Some(next) };
        self.detach_node(link);
        trace!("detach {:?}, cursor at {:?}", link, cursor);
        Some(link)
    }

    /// Detaches the node under the cursor like [`Deck::detach`], releases the
    /// node and returns its item, leaving it to the caller. The destructor is
    /// not invoked.
    ///
    /// Returns `None` if the cursor is `None` or the node is a guard.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let a = deck.construct(Some("emmental")).unwrap();
    /// let mut cursor = Some(a);
    /// assert_eq!(deck.remove(&mut cursor), Some("emmental"));
    /// assert_eq!(cursor, None);
    /// assert!(!deck.contains(a));
    /// ```
    pub fn remove(&mut self, cursor: &mut Option<Link>) -> Option<T> {
        let link = self.detach(cursor)?;
        self.nodes.remove(link.key).element
    }

    /// Detaches the node under the cursor like [`Deck::detach`] and destroys
    /// it, handing its item to the destructor if one is set.
    pub fn destroy_one(&mut self, cursor: &mut Option<Link>) {
        if let Some(link) = self.detach(cursor) {
            self.release(link);
        }
    }

    /// Destroys every member of the ring under the cursor, guards and items
    /// alike, one at a time from the cursor on. The cursor ends up `None`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn destroy(&mut self, cursor: &mut Option<Link>) {
        while cursor.is_some() {
            self.destroy_one(cursor);
        }
    }

    /// Returns the first node holding an item, starting from `link` itself.
    ///
    /// Returns `link` if it holds an item, otherwise continues as
    /// [`Deck::next`] would. Returns `None` if `link` is `None`.
    pub fn first(&self, link: Option<Link>, terminator: Option<Link>) -> Option<Link> {
        let link = link?;
        if self.node(link).element.is_some() {
            return Some(link);
        }
        self.next(link, terminator)
    }

    /// Returns the next node holding an item after `last`.
    ///
    /// - Returns `None` if the successor is `terminator`;
    /// - returns the successor if it holds an item;
    /// - if the successor is a guard, returns `None` when there is no
    ///   terminator, and skips the guard otherwise.
    ///
    /// A walk that skips guards all the way back to `last` without meeting
    /// an item or the terminator returns `None`.
    pub fn next(&self, last: Link, terminator: Option<Link>) -> Option<Link> {
        let mut current = last;
        loop {
            current = self.node(current).next;
            if Some(current) == terminator {
                return None;
            }
            if self.node(current).element.is_some() {
                return Some(current);
            }
            if terminator.is_none() || current == last {
                return None;
            }
        }
    }
}
