use std::fmt::{self, Debug, Formatter};

use log::{debug, trace, warn};
use slab::Slab;

use crate::config::DeckConfig;
use crate::error::{Error, InsertError, Result};

pub use self::hooks::{Destructor, Duplicator};
pub(crate) use self::hooks::Hooks;

pub mod cursor;
pub mod iterator;

mod algorithms;
mod hooks;

/// An arena of cyclic doubly-linked rings.
///
/// Every node of a `Deck` is a member of exactly one ring. A ring of a single
/// node is a self-loop. Nodes are addressed by [`Link`]s, which stay valid
/// while the node is alive, no matter which ring it is moved to.
///
/// A node either holds an item or is a *guard*. Guards bound the unbounded
/// traversals of [`Deck::first`] and [`Deck::next`], and can act as the
/// anchor of an otherwise empty ring.
///
/// # Naming Conventions
///
/// - `anchor`: the node an insertion is made relative to;
/// - `cursor`: an `&mut Option<Link>` that the detach family advances to the
///   next member, or to `None` once the ring is used up;
/// - `terminator`: the node at which a bounded traversal halts.
pub struct Deck<T> {
    nodes: Slab<Node<T>>,
    config: DeckConfig,
    stamp: u64,
}

/// Handle to a node in a [`Deck`].
///
/// A `Link` is only meaningful for the deck that produced it, and only until
/// its node is released by [`Deck::remove`], [`Deck::destroy_one`] or
/// [`Deck::destroy`]. Using it afterwards panics, even once the slot has
/// been reused by a newer node: every allocation stamps its node and link
/// with a fresh serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    key: usize,
    stamp: u64,
}

pub(crate) struct Node<T> {
    stamp: u64,
    pub(crate) next: Link,
    pub(crate) prev: Link,
    pub(crate) element: Option<T>,
    pub(crate) hooks: Hooks<T>,
}

// private methods
impl<T> Deck<T> {
    pub(crate) fn node(&self, link: Link) -> &Node<T> {
        self.nodes
            .get(link.key)
            .filter(|node| node.stamp == link.stamp)
            .expect("link refers to a released node")
    }

    pub(crate) fn node_mut(&mut self, link: Link) -> &mut Node<T> {
        self.nodes
            .get_mut(link.key)
            .filter(|node| node.stamp == link.stamp)
            .expect("link refers to a released node")
    }

    fn connect(&mut self, prev: Link, next: Link) {
        self.node_mut(prev).next = next;
        self.node_mut(next).prev = prev;
    }

    /// Allocate a self-looped node, handing `element` and `hooks` back when
    /// the node limit is reached.
    #[allow(clippy::type_complexity)]
    fn allocate(
        &mut self,
        element: Option<T>,
        hooks: Hooks<T>,
    ) -> Result<Link, (Option<T>, Hooks<T>)> {
        if !self.config.admits(self.nodes.len()) {
            return Err((element, hooks));
        }
        self.stamp += 1;
        let entry = self.nodes.vacant_entry();
        let link = Link {
            key: entry.key(),
            stamp: self.stamp,
        };
        entry.insert(Node {
            stamp: link.stamp,
            next: link,
            prev: link,
            element,
            hooks,
        });
        Ok(link)
    }

    /// Unlink `link` from its ring and turn it into a singleton ring.
    pub(crate) fn detach_node(&mut self, link: Link) {
        let (prev, next) = {
            let node = self.node(link);
            (node.prev, node.next)
        };
        self.connect(prev, next);
        self.connect(link, link);
    }

    /// Splice the singleton `link` between the adjacent `prev` and `next`.
    fn attach_node(&mut self, prev: Link, next: Link, link: Link) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, link);
        self.connect(link, next);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, link);
            self.assert_adjacent(link, next);
        }
    }

    /// Release a detached node, handing its item to the ring's destructor.
    pub(crate) fn release(&mut self, link: Link) {
        let node = self.nodes.remove(link.key);
        if let Some(element) = node.element {
            node.hooks.release(element);
        }
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Link, next: Link) {
        assert_eq!(self.node(prev).next, next);
        assert_eq!(self.node(next).prev, prev);
    }
}

impl<T> Deck<T> {
    /// Creates an empty `Deck`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_dlist::Deck;
    /// let deck: Deck<u32> = Deck::new();
    /// assert!(deck.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(DeckConfig::default())
    }

    /// Creates an empty `Deck` with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(DeckConfig::default().with_capacity(capacity))
    }

    /// Creates an empty `Deck` tuned by `config`.
    pub fn with_config(config: DeckConfig) -> Self {
        Self {
            nodes: Slab::with_capacity(config.capacity),
            config,
            stamp: 0,
        }
    }

    /// Returns the number of live nodes, guards included, over all rings.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the deck holds no node at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `link` refers to a live node of this deck.
    #[inline]
    pub fn contains(&self, link: Link) -> bool {
        self.nodes
            .get(link.key)
            .map_or(false, |node| node.stamp == link.stamp)
    }

    /// Returns `true` if the node holds no item.
    ///
    /// # Panics
    ///
    /// Panics if `link` was released.
    pub fn is_guard(&self, link: Link) -> bool {
        self.node(link).element.is_none()
    }

    /// The member following `link` in its ring, guards included.
    pub fn next_link(&self, link: Link) -> Link {
        self.node(link).next
    }

    /// The member preceding `link` in its ring, guards included.
    pub fn prev_link(&self, link: Link) -> Link {
        self.node(link).prev
    }

    /// Creates a new singleton ring holding `item`, or a guard if `item` is
    /// `None`. The node carries no destructor and no duplicator.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the node limit is reached. The error hands
    /// `item` back.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let node = deck.construct(Some("brie")).unwrap();
    /// assert_eq!(deck.next_link(node), node);
    /// assert_eq!(deck.prev_link(node), node);
    /// assert_eq!(deck.item(Some(node)), Some(&"brie"));
    /// ```
    pub fn construct(&mut self, item: Option<T>) -> Result<Link, InsertError<T>> {
        match self.allocate(item, Hooks::default()) {
            Ok(link) => {
                trace!("construct {:?}", link);
                Ok(link)
            }
            Err((item, _)) => {
                warn!("construct failed: node limit of {:?} reached", self.config.node_limit);
                Err(InsertError::new(Error::OutOfMemory, item, None))
            }
        }
    }

    /// Inserts `item` (or a guard if `None`) right after `anchor` and returns
    /// the new node. Creates a new ring like [`Deck::construct`] if `anchor`
    /// is `None`.
    ///
    /// The new node inherits the anchor's destructor and duplicator. If the
    /// ring has a duplicator, the node holds the copy it makes of `item`, and
    /// `item` itself is dropped once the node is linked.
    ///
    /// # Errors
    ///
    /// On error the anchor's ring is left untouched and `item` is handed back
    /// in the [`InsertError`]:
    ///
    /// - [`Error::DuplicationFailed`] if the duplicator returned `None`;
    /// - [`Error::OutOfMemory`] if the node limit is reached. A copy already
    ///   made by the duplicator goes to the destructor when the ring has
    ///   both capabilities; otherwise it is returned in the error too, and
    ///   releasing whatever it refers to is the caller's business.
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
    /// let guard = deck.construct(None).unwrap();
    /// let cheese = deck.insert_after(Some(guard), Some("boursin")).unwrap();
    /// let bread = deck.insert_after(Some(guard), Some("baguette")).unwrap();
    /// assert_eq!(deck.next_link(guard), bread);
    /// assert_eq!(deck.next_link(bread), cheese);
    /// assert_eq!(deck.next_link(cheese), guard);
    /// ```
    pub fn insert_after(
        &mut self,
        anchor: Option<Link>,
        item: Option<T>,
    ) -> Result<Link, InsertError<T>> {
        let anchor = match anchor {
            Some(anchor) => anchor,
            None => return self.construct(item),
        };
        let hooks = self.node(anchor).hooks.clone();
        let copy = match hooks.duplicate(item.as_ref()) {
            Some(copy) => copy,
            None => {
                warn!("insert after {:?} aborted: duplication failed", anchor);
                return Err(InsertError::new(Error::DuplicationFailed, item, None));
            }
        };
        let duplicated = copy.is_some();
        let (element, original) = if duplicated { (copy, item) } else { (item, None) };
        let link = match self.allocate(element, hooks) {
            Ok(link) => link,
            Err((element, hooks)) => {
                warn!("insert after {:?} aborted: node limit reached", anchor);
                let error = if !duplicated {
                    InsertError::new(Error::OutOfMemory, element, None)
                } else if hooks.owns_copies() {
                    if let Some(copy) = element {
                        hooks.release(copy);
                    }
                    InsertError::new(Error::OutOfMemory, original, None)
                } else {
                    InsertError::new(Error::OutOfMemory, original, element)
                };
                return Err(error);
            }
        };
        let next = self.node(anchor).next;
        self.attach_node(anchor, next, link);
        trace!("insert {:?} after {:?}", link, anchor);
        Ok(link)
    }

    /// Inserts `item` (or a guard if `None`) right before `anchor`. Same as
    /// [`Deck::insert_after`] on the anchor's predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let guard = deck.construct(None).unwrap();
    /// let wine = deck.insert_before(Some(guard), Some("bordeaux")).unwrap();
    /// let bread = deck.insert_before(Some(guard), Some("baguette")).unwrap();
    /// assert_eq!(deck.next_link(guard), wine);
    /// assert_eq!(deck.next_link(wine), bread);
    /// ```
    pub fn insert_before(
        &mut self,
        anchor: Option<Link>,
        item: Option<T>,
    ) -> Result<Link, InsertError<T>> {
        let anchor = anchor.map(|anchor| self.node(anchor).prev);
        self.insert_after(anchor, item)
    }

    /// Moves `link` out of its ring and splices it right after `destination`,
    /// which may belong to another ring. Nothing is copied or allocated and
    /// the node keeps its own destructor and duplicator, even if they differ
    /// from the destination ring's.
    ///
    /// Moving a node after itself does nothing.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if either link was released.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let a = deck.construct(None).unwrap();
    /// let x = deck.insert_after(Some(a), Some(1)).unwrap();
    /// let b = deck.construct(None).unwrap();
    ///
    /// deck.move_after(x, b);
    /// assert_eq!(deck.next_link(a), a);
    /// assert_eq!(deck.next_link(b), x);
    /// assert_eq!(deck.next_link(x), b);
    /// ```
    pub fn move_after(&mut self, link: Link, destination: Link) {
        assert!(
            self.contains(link) && self.contains(destination),
            "link refers to a released node"
        );
        if link == destination {
            return;
        }
        self.detach_node(link);
        let next = self.node(destination).next;
        self.attach_node(destination, next, link);
        trace!("move {:?} after {:?}", link, destination);
    }

    /// Moves `link` out of its ring and splices it right before
    /// `destination`. Same as [`Deck::move_after`] on the destination's
    /// predecessor.
    pub fn move_before(&mut self, link: Link, destination: Link) {
        let prev = self.node(destination).prev;
        self.move_after(link, prev);
    }

    /// Returns the item of a node, or `None` for a guard or an absent link.
    pub fn item(&self, link: Option<Link>) -> Option<&T> {
        link.and_then(|link| self.node(link).element.as_ref())
    }

    /// Returns the destructor held by the node.
    pub fn destructor(&self, link: Link) -> Option<Destructor<T>> {
        self.node(link).hooks.destructor.clone()
    }

    /// Returns the duplicator held by the node.
    pub fn duplicator(&self, link: Link) -> Option<Duplicator<T>> {
        self.node(link).hooks.duplicator.clone()
    }

    /// Sets the destructor of every member of the ring containing `link`,
    /// and returns the one `link` held before. By default a ring has none,
    /// and released items are simply dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, *n* being the size
    /// of the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_dlist::{Deck, Destructor};
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let freed = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&freed);
    /// let destructor: Destructor<&str> = Rc::new(move |_: &str| counter.set(counter.get() + 1));
    ///
    /// let mut deck = Deck::new();
    /// let guard = deck.construct(None).unwrap();
    /// deck.insert_after(Some(guard), Some("camembert")).unwrap();
    /// assert!(deck.set_destructor(guard, Some(destructor)).is_none());
    ///
    /// let mut cursor = Some(guard);
    /// deck.destroy(&mut cursor);
    /// assert_eq!(freed.get(), 1);
    /// ```
    pub fn set_destructor(
        &mut self,
        link: Link,
        destructor: Option<Destructor<T>>,
    ) -> Option<Destructor<T>> {
        let previous = self.node(link).hooks.destructor.clone();
        let touched = self.sweep(link, |hooks| hooks.destructor = destructor.clone());
        debug!("destructor set on {} nodes of the ring of {:?}", touched, link);
        previous
    }

    /// Sets the duplicator of every member of the ring containing `link`,
    /// and returns the one `link` held before. By default a ring has none,
    /// and inserted items are stored as given.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, *n* being the size
    /// of the ring.
    pub fn set_duplicator(
        &mut self,
        link: Link,
        duplicator: Option<Duplicator<T>>,
    ) -> Option<Duplicator<T>> {
        let previous = self.node(link).hooks.duplicator.clone();
        let touched = self.sweep(link, |hooks| hooks.duplicator = duplicator.clone());
        debug!("duplicator set on {} nodes of the ring of {:?}", touched, link);
        previous
    }

    fn sweep<F>(&mut self, link: Link, mut f: F) -> usize
    where
        F: FnMut(&mut Hooks<T>),
    {
        let mut touched = 0;
        let mut current = link;
        loop {
            let node = self.node_mut(current);
            f(&mut node.hooks);
            touched += 1;
            current = node.next;
            if current == link {
                return touched;
            }
        }
    }

    /// Releases every node of every ring, handing items to their ring's
    /// destructor. All outstanding links become invalid.
    pub fn clear(&mut self) {
        let released = self.nodes.len();
        for node in self.nodes.drain() {
            if let Some(element) = node.element {
                node.hooks.release(element);
            }
        }
        if released > 0 {
            debug!("cleared {} nodes", released);
        }
    }
}

impl<T: Debug> Debug for Deck<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut seen = vec![false; self.nodes.capacity()];
        let mut rings = f.debug_list();
        for (key, node) in self.nodes.iter() {
            if seen[key] {
                continue;
            }
            let start = Link {
                key,
                stamp: node.stamp,
            };
            let ring: Vec<Option<&T>> = self
                .ring(start)
                .map(|link| {
                    seen[link.key] = true;
                    self.node(link).element.as_ref()
                })
                .collect();
            rings.entry(&ring);
        }
        rings.finish()
    }
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deck<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
