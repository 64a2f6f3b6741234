//! This crate provides cyclic doubly-linked rings of nodes living in an arena,
//! the [`Deck`].
//!
//! Nodes are inserted, removed and moved from one ring to another in constant
//! time, and their [`Link`] handles stay valid across moves. This makes rings
//! convenient buckets for structures such as LRU lists or timeout wheels,
//! where elements hop between buckets all the time.
//!
//! Here is a quick example showing how the rings work.
//!
//! ```
//! use cyclic_dlist::Deck;
//!
//! let mut deck = Deck::new();
//!
//! // Two buckets, each anchored by a guard
//! let fresh = deck.construct(None).unwrap();
//! let stale = deck.construct(None).unwrap();
//!
//! let a = deck.insert_before(Some(fresh), Some("a")).unwrap();
//! deck.insert_before(Some(fresh), Some("b")).unwrap();
//!
//! // `a` goes stale, without any allocation
//! deck.move_before(a, stale);
//! assert_eq!(deck.items(Some(fresh), Some(fresh)).collect::<Vec<_>>(), vec![&"b"]);
//! assert_eq!(deck.items(Some(stale), Some(stale)).collect::<Vec<_>>(), vec![&"a"]);
//! ```
//!
//! # Memory Layout
//!
//! A ring with a guard and two items looks like the following graph:
//! ```text
//!     ┌───────────────────────────────────────────────────────────┐
//!     ↓                                                           │
//! ┌───────────┐          ╔═══════════╗          ╔═══════════╗     │
//! │   next    │ ───────→ ║   next    ║ ───────→ ║   next    ║ ────┘
//! ├───────────┤          ╟───────────╢          ╟───────────╢
//! │   prev    │ ←─────── ║   prev    ║ ←─────── ║   prev    ║ ←───┐
//! ├───────────┤          ╟───────────╢          ╟───────────╢     │
//! ┊  No item  ┊          ║  item T   ║          ║  item T   ║     │
//! ├───────────┤          ╟───────────╢          ╟───────────╢     │
//! │   hooks   │          ║   hooks   ║          ║   hooks   ║     │
//! └───────────┘          ╚═══════════╝          ╚═══════════╝     │
//!  Guard node ↑              Node 1                 Node 2        │
//!     │       └───────────────────────────────────────────────────┘
//!     └─ prev of the guard is Node 2
//! ```
//!
//! All nodes are stored in a slab owned by the `Deck`, and `next`/`prev` are
//! slab keys rather than pointers. Every node is always a member of exactly
//! one ring; a freshly created or detached node is a ring of its own whose
//! `next` and `prev` point to itself.
//!
//! A node either holds an item or is a *guard*, which holds none. A ring can
//! have no guard, one guard acting as its head, or several guards splitting
//! it into runs. Whether a node is a guard is fixed when it is created.
//!
//! # Destructors and Duplicators
//!
//! Each node carries a pair of optional hooks, the [`Destructor`] and the
//! [`Duplicator`]. [`Deck::set_destructor`] and [`Deck::set_duplicator`] set
//! them on a whole ring, and inserted nodes inherit them from their anchor.
//!
//! - with a duplicator, inserting stores a copy of the item; a failing copy
//!   aborts the insertion with [`Error::DuplicationFailed`], and the
//!   [`InsertError`] hands the item back;
//! - with a destructor, destroying a node hands its item to the destructor,
//!   otherwise the item is just dropped.
//!
//! Moving a node does not touch its hooks, so a node moved into a ring with
//! other hooks keeps its own until they are set again on that ring.
//!
//! # Traversal
//!
//! [`Deck::first`] and [`Deck::next`] walk a ring either up to the next guard
//! (no terminator) or all the way round to a terminator, skipping guards.
//! [`Deck::items`] wraps the pass into an iterator, and [`Deck::ring`] visits
//! every member, guards included.
//!
//! See more functions in [`Deck`] and the [`cursor`] module.
//!
//! [`Deck`]: crate::Deck
//! [`Link`]: crate::Link
//! [`cursor`]: crate::deck::cursor

#[doc(inline)]
pub use config::DeckConfig;
#[doc(inline)]
pub use deck::iterator::{Items, Ring};
#[doc(inline)]
pub use deck::{Deck, Destructor, Duplicator, Link};
#[doc(inline)]
pub use error::{Error, InsertError, Result};

pub mod deck;

mod config;
mod error;
