use crate::deck::{Deck, Link};

impl<T> Deck<T> {
    /// Returns the number of members, guards included, of the ring
    /// containing `link`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn ring_len(&self, link: Link) -> usize {
        self.ring(link).count()
    }

    /// Returns `true` if `a` and `b` are members of the same ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn same_ring(&self, a: Link, b: Link) -> bool {
        self.ring(a).any(|link| link == b)
    }

    /// Checks the ring containing `link`: every member is the predecessor
    /// of its successor, walking `prev` retraces the `next` walk, and all
    /// members share one destructor and one duplicator.
    ///
    /// A node moved in from a ring with other capabilities keeps its own,
    /// so this is `false` until the capabilities are set again on the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::{Deck, Destructor};
    /// use std::rc::Rc;
    ///
    /// let mut deck = Deck::new();
    /// let a = deck.construct(None).unwrap();
    /// let x = deck.insert_after(Some(a), Some(1)).unwrap();
    /// let destructor: Destructor<i32> = Rc::new(|_: i32| {});
    /// deck.set_destructor(a, Some(destructor));
    ///
    /// let b = deck.construct(None).unwrap();
    /// deck.move_after(x, b);
    /// assert!(deck.is_well_formed(a));
    /// assert!(!deck.is_well_formed(b));
    ///
    /// deck.set_destructor(b, None);
    /// assert!(deck.is_well_formed(b));
    /// ```
    pub fn is_well_formed(&self, link: Link) -> bool {
        let hooks = &self.node(link).hooks;
        let forward: Vec<Link> = self.ring(link).collect();
        let linked = forward.iter().all(|&member| {
            let node = self.node(member);
            self.node(node.next).prev == member && self.node(node.prev).next == member
        });
        let mut backward = Vec::with_capacity(forward.len());
        let mut current = link;
        loop {
            backward.push(current);
            current = self.node(current).prev;
            if current == link || backward.len() > forward.len() {
                break;
            }
        }
        backward[1..].reverse();
        linked
            && backward == forward
            && forward.iter().all(|&member| self.node(member).hooks.same_as(hooks))
    }
}
