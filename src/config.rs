/// Tuning knobs of a [`Deck`](crate::Deck), fixed at construction.
///
/// # Examples
///
/// ```
/// use cyclic_dlist::{Deck, DeckConfig, Error};
///
/// let config = DeckConfig::default().with_capacity(16).with_node_limit(1);
/// let mut deck = Deck::<u32>::with_config(config);
///
/// let ring = deck.construct(Some(1)).unwrap();
/// let error = deck.insert_after(Some(ring), Some(2)).unwrap_err();
/// assert_eq!(error.kind(), Error::OutOfMemory);
/// assert_eq!(error.into_item(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckConfig {
    /// Number of nodes allocated up front.
    pub capacity: usize,
    /// Upper bound on the number of live nodes. Allocating past it fails
    /// with [`Error::OutOfMemory`](crate::Error::OutOfMemory). `None` means
    /// the deck grows as long as the allocator does.
    pub node_limit: Option<usize>,
}

impl DeckConfig {
    /// Sets the number of nodes allocated up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Caps the number of live nodes.
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    pub(crate) fn admits(&self, live: usize) -> bool {
        self.node_limit.map_or(true, |limit| live < limit)
    }
}
