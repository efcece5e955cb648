//! Sorting strategy families.
//!
//! Each family borrows the sorter's container and exposes the operations it defines as
//! typed methods. Through [`Strategy::apply`] the same operations can be invoked from an
//! [`Operation`] value; operations the family does not define fail with
//! [`SortError::UnknownOperation`].

mod by_key;
mod by_value;
mod discard_key;
mod maintain_keys;

pub use by_key::ByKey;
pub use by_value::ByValue;
pub use discard_key::DiscardKey;
pub use maintain_keys::MaintainKeys;

use crate::core::Container;
use crate::error::SortError;
use crate::operation::{Operation, OperationName};
use crate::precedence::PrecedenceTag;

/// A family of sorting operations over one container.
pub trait Strategy<V> {
    /// Identity of the family.
    fn tag(&self) -> PrecedenceTag;

    /// Applies `operation`, returning a newly ordered container.
    fn apply(&self, operation: Operation<V>) -> Result<Container<V>, SortError>;

    fn defines(&self, operation: OperationName) -> bool {
        self.tag().defines(operation)
    }
}

pub(crate) fn undefined<V>(tag: PrecedenceTag, operation: &Operation<V>) -> SortError {
    tracing::debug!(operation = %operation.name(), %tag, "operation not defined by family");
    SortError::unknown_operation(operation.name().as_str())
}
