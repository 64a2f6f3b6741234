use std::fmt;

/// Errors raised by the fallible [`Deck`](crate::Deck) operations.
///
/// A failed operation never leaves a partially spliced ring behind: the
/// ring the caller passed in is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No node could be allocated, because the deck reached its configured
    /// node limit.
    #[error("cannot allocate a ring node: node limit reached")]
    OutOfMemory,
    /// The ring's duplicator refused to copy the inserted item.
    #[error("the ring duplicator failed to copy the item")]
    DuplicationFailed,
}

/// Shorthand for results of fallible deck operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed construction or insertion, handing back what was not stored.
///
/// The item passed in is always returned untouched. If the ring's duplicator
/// already made a copy when allocation failed, that copy is either handed to
/// the ring's destructor (when the ring has both a destructor and a
/// duplicator) or returned as well, for the caller to release.
///
/// # Examples
///
/// ```
/// use cyclic_dlist::{Deck, DeckConfig, Error};
///
/// let mut deck = Deck::with_config(DeckConfig::default().with_node_limit(1));
/// let guard = deck.construct(None).unwrap();
///
/// let error = deck.insert_after(Some(guard), Some(String::from("comté"))).unwrap_err();
/// assert_eq!(error.kind(), Error::OutOfMemory);
/// assert_eq!(error.into_item().as_deref(), Some("comté"));
/// ```
#[derive(thiserror::Error)]
#[error("{kind}")]
pub struct InsertError<T> {
    kind: Error,
    item: Option<T>,
    copy: Option<T>,
}

impl<T> InsertError<T> {
    pub(crate) fn new(kind: Error, item: Option<T>, copy: Option<T>) -> Self {
        Self { kind, item, copy }
    }

    /// What went wrong.
    pub fn kind(&self) -> Error {
        self.kind
    }

    /// The item the caller tried to store.
    pub fn item(&self) -> Option<&T> {
        self.item.as_ref()
    }

    /// A copy made by the duplicator that no destructor could release.
    pub fn copy(&self) -> Option<&T> {
        self.copy.as_ref()
    }

    /// Returns the item, dropping any orphaned copy.
    pub fn into_item(self) -> Option<T> {
        self.item
    }

    /// Returns the item and the orphaned copy, if any.
    pub fn into_parts(self) -> (Option<T>, Option<T>) {
        (self.item, self.copy)
    }
}

impl<T> From<InsertError<T>> for Error {
    fn from(error: InsertError<T>) -> Self {
        error.kind
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .field("item", &self.item.is_some())
            .field("copy", &self.copy.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, InsertError};

    #[test]
    fn error_display() {
        assert_eq!(
            Error::OutOfMemory.to_string(),
            "cannot allocate a ring node: node limit reached"
        );
        assert_eq!(
            Error::DuplicationFailed.to_string(),
            "the ring duplicator failed to copy the item"
        );
    }

    #[test]
    fn insert_error_parts() {
        let error = InsertError::new(Error::OutOfMemory, Some(1), Some(2));
        assert_eq!(error.to_string(), Error::OutOfMemory.to_string());
        assert_eq!(error.item(), Some(&1));
        assert_eq!(error.copy(), Some(&2));
        assert_eq!(
            format!("{:?}", error),
            "InsertError { kind: OutOfMemory, item: true, copy: true }"
        );
        assert_eq!(error.into_parts(), (Some(1), Some(2)));

        let error = InsertError::new(Error::DuplicationFailed, Some("brie"), None);
        assert_eq!(Error::from(error), Error::DuplicationFailed);
    }
}
