//! Singly-linked, append-only list where every node is also a list.
//!
//! There is no wrapper that tracks a head: a `LinkedList<T>` value is a node,
//! and the nodes reachable through `next` form the list that starts at it.
//! Each node owns its successor through a `Box`, so a chain is always finite
//! and acyclic.
//!
//! Operations that walk the chain (`add`, `display`, `len`, `last`) start at
//! the receiver. Called on an inner node they see only the sub-list from that
//! node onward.

use std::fmt;
use std::io::{self, Write};

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::data::Data;

/// A list node holding `value` and owning the rest of the chain.
pub struct LinkedList<T: Data> {
    value: T,
    next: Option<Box<LinkedList<T>>>,
}

impl<T: Data> LinkedList<T> {
    /// Create a single-node list.
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Build a chain from `values` in order. Returns `None` for an empty
    /// iterator, since a list always has at least one node.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Option<Self> {
        let mut values = values.into_iter();
        let mut head = LinkedList::new(values.next()?);
        let mut cursor = &mut head.next;
        for value in values {
            let node = cursor.insert(Box::new(LinkedList::new(value)));
            cursor = &mut node.next;
        }
        Some(head)
    }

    /// The value this node was constructed with.
    pub fn head(&self) -> &T {
        &self.value
    }

    /// Append `value` after the last node reachable from this one.
    pub fn add(&mut self, value: T) {
        let mut cursor = &mut self.next;
        let mut depth = 1usize;
        while let Some(node) = cursor {
            cursor = &mut node.next;
            depth += 1;
        }
        *cursor = Some(Box::new(LinkedList::new(value)));
        trace!(position = depth, "appended node");
    }

    /// Print every value from this node to the end, one per line, on stdout.
    pub fn display(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.display_to(&mut out)
    }

    /// Write every value from this node to the end, one per line.
    pub fn display_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for value in self.iter() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    /// Join every value from this node to the end with `separator`.
    pub fn render(&self, separator: &str) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The successor node, if any.
    pub fn next(&self) -> Option<&LinkedList<T>> {
        self.next.as_deref()
    }

    /// Mutable access to the successor, e.g. to append from an inner node.
    pub fn next_mut(&mut self) -> Option<&mut LinkedList<T>> {
        self.next.as_deref_mut()
    }

    /// The last node reachable from this one.
    pub fn last(&self) -> &LinkedList<T> {
        let mut curr = self;
        while let Some(next) = curr.next.as_deref() {
            curr = next;
        }
        curr
    }

    /// Number of nodes reachable from this one, itself included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether this node has no successor.
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Iterate over the values from this node to the end.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { node: Some(self) }
    }
}

impl<T: Data> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time so long chains don't recurse.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Data> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut head = LinkedList::new(self.value.clone());
        let mut cursor = &mut head.next;
        for value in self.iter().skip(1) {
            let node = cursor.insert(Box::new(LinkedList::new(value.clone())));
            cursor = &mut node.next;
        }
        head
    }
}

impl<T: Data + PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Data + fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Data + Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Borrowing iterator over the values from a node to the end of its chain.
pub struct Iter<'a, T: Data> {
    node: Option<&'a LinkedList<T>>,
}

impl<'a, T: Data> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T: Data> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
