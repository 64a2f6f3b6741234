use std::fmt;
use std::rc::Rc;

/// Releases the resources of an item. Handed the item by value when a node
/// holding it is destroyed.
pub type Destructor<T> = Rc<dyn Fn(T)>;

/// Produces an independent copy of an item, or `None` if it cannot.
pub type Duplicator<T> = Rc<dyn Fn(&T) -> Option<T>>;

/// The capability pair carried by every node of a ring.
pub(crate) struct Hooks<T> {
    pub(crate) destructor: Option<Destructor<T>>,
    pub(crate) duplicator: Option<Duplicator<T>>,
}

impl<T> Hooks<T> {
    /// Copies `item` with the duplicator. The outer `None` means the
    /// duplicator refused; the inner one that there was nothing to copy.
    pub(crate) fn duplicate(&self, item: Option<&T>) -> Option<Option<T>> {
        match (item, &self.duplicator) {
            (Some(item), Some(duplicator)) => duplicator(item).map(Some),
            _ => Some(None),
        }
    }

    /// Hands `item` to the destructor, or drops it if there is none.
    pub(crate) fn release(&self, item: T) {
        match &self.destructor {
            Some(destructor) => destructor(item),
            None => drop(item),
        }
    }

    /// Whether both capabilities are configured. Only then is a copy made
    /// by the duplicator known to be safe to destroy.
    pub(crate) fn owns_copies(&self) -> bool {
        self.destructor.is_some() && self.duplicator.is_some()
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        same_hook(&self.destructor, &other.destructor)
            && same_hook(&self.duplicator, &other.duplicator)
    }
}

fn same_hook<F: ?Sized>(a: &Option<Rc<F>>, b: &Option<Rc<F>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            destructor: None,
            duplicator: None,
        }
    }
}

impl<T> Clone for Hooks<T> {
    fn clone(&self) -> Self {
        Self {
            destructor: self.destructor.clone(),
            duplicator: self.duplicator.clone(),
        }
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("destructor", &self.destructor.is_some())
            .field("duplicator", &self.duplicator.is_some())
            .finish()
    }
}
