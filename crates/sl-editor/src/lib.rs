//! sl-editor: mutation mediator over the economy graph.
//!
//! The editor owns the current graph and fans every successful mutation out
//! to its change subscribers, synchronously and in subscription order.
//! Subscribers see the graph only after it has been updated and its
//! invariants hold; mutating the editor from inside a callback does not
//! compile, which is exactly the re-entrancy policy the model asks for.

pub mod editor;

pub use editor::{EconomyEditor, SubscriptionId};
