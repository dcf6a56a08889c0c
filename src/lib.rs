//! Generic append-only linked list and optional value.
//!
//! [`LinkedList`] is a node that doubles as the list starting at itself; its
//! payload is restricted to numbers and strings through the [`Data`] bound.
//! [`Optional`] holds zero or one value and tells presence apart from falsy
//! values. [`Value`] is the `number | string` union checked at runtime.

pub mod config;
pub mod data;
pub mod error;
pub mod linked_list;
pub mod optional;
pub mod session;

pub use config::{DisplayFormat, TlistConfig};
pub use data::{Data, Value};
pub use error::{Error, Result};
pub use linked_list::LinkedList;
pub use optional::Optional;
pub use session::{Flow, Session};
