//! Depth-first traversal of a JSON value into `(key, terminal)` pairs.
//!
//! Containers (objects and arrays) never yield a pair of their own; only the
//! scalars beneath them do, each tagged with the object key or array index
//! that led to it. A bare scalar document yields one pair tagged
//! [`AssocKey::Root`].
//!
//! The walk keeps its own stack of container iterators, so document depth is
//! bounded by heap, not by the thread's call stack.

use serde_json::Value;
use std::fmt;
use std::iter::{Enumerate, FusedIterator};

/// The key or index through which a value was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssocKey<'a> {
    /// Sentinel for the outermost value, which has no parent.
    Root,
    /// Reached through an object member.
    Key(&'a str),
    /// Reached through an array element.
    Index(usize),
}

impl<'a> AssocKey<'a> {
    /// Object key, if this value was reached through an object member.
    pub fn as_key(&self) -> Option<&'a str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Root | Self::Index(_) => None,
        }
    }
}

impl fmt::Display for AssocKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("$"),
            Self::Key(k) => write!(f, "{:?}", k),
            Self::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// A terminal value together with its associating key.
pub type Pair<'a> = (AssocKey<'a>, &'a Value);

enum Frame<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(Enumerate<std::slice::Iter<'a, Value>>),
}

/// Lazy pre-order iterator over the terminal pairs of a JSON value.
///
/// Created by [`pairs`].
pub struct Pairs<'a> {
    root: Option<&'a Value>,
    stack: Vec<Frame<'a>>,
}

/// Walk `value` depth-first, yielding every terminal pair.
///
/// Object members are visited in document order, array elements by ascending
/// index. The borrow is shared, so the same value can be walked any number of
/// times with identical results.
pub fn pairs(value: &Value) -> Pairs<'_> {
    Pairs {
        root: Some(value),
        stack: Vec::new(),
    }
}

impl<'a> Pairs<'a> {
    /// Enter `value`: containers are pushed for later, terminals are returned.
    fn descend(&mut self, key: AssocKey<'a>, value: &'a Value) -> Option<Pair<'a>> {
        match value {
            Value::Object(map) => {
                self.stack.push(Frame::Object(map.iter()));
                None
            }
            Value::Array(items) => {
                self.stack.push(Frame::Array(items.iter().enumerate()));
                None
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Some((key, value))
            }
        }
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Some(pair) = self.descend(AssocKey::Root, root) {
                return Some(pair);
            }
        }

        loop {
            let child = match self.stack.last_mut()? {
                Frame::Object(members) => members
                    .next()
                    .map(|(k, v)| (AssocKey::Key(k.as_str()), v)),
                Frame::Array(items) => items.next().map(|(i, v)| (AssocKey::Index(i), v)),
            };

            match child {
                Some((key, value)) => {
                    if let Some(pair) = self.descend(key, value) {
                        return Some(pair);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for Pairs<'_> {}
