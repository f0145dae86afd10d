// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Known route table: the ordered nesting levels a page stack supports.
//!
//! ## Overview
//!
//! A [`RouteTable`] is a root-first list of paths. The index of an entry is its
//! depth in the page stack and therefore its paint order: lower indices render
//! first and sit beneath later ones.
//!
//! Tables are validated on construction so that the stack builder can rely on
//! the ordering contract:
//!
//! - a non-empty table starts with `/`;
//! - every entry is a well-formed path and appears once;
//! - no entry precedes one of its own ancestors.
//!
//! ```
//! use understory_page_stack::route::{RouteTable, RouteTableError};
//!
//! let table = RouteTable::new(["/", "/more", "/more/more"]).unwrap();
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.depth_of("/more"), Some(1));
//!
//! let err = RouteTable::new(["/", "/more/more", "/more"]).unwrap_err();
//! assert!(matches!(err, RouteTableError::AncestorAfterDescendant { .. }));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::path::{self, ROOT};

/// Reasons a list of paths cannot form a [`RouteTable`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    /// The first entry is not the root path.
    #[error("route table must start with `/`, found `{0}`")]
    MissingRoot(String),
    /// An entry does not start with `/`.
    #[error("invalid route path `{0}`")]
    InvalidPath(String),
    /// An entry appears more than once.
    #[error("duplicate route path `{0}`")]
    Duplicate(String),
    /// An entry is listed before one of its ancestors.
    #[error("route `{ancestor}` must precede its descendant `{descendant}`")]
    AncestorAfterDescendant {
        /// The ancestor listed too late.
        ancestor: String,
        /// The descendant listed before it.
        descendant: String,
    },
}

/// A validated, root-first ordered list of known paths.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct RouteTable {
    paths: Vec<String>,
}

impl RouteTable {
    /// Validate `paths` and build a table.
    ///
    /// Entries are stored normalized (no trailing `/` except on the root).
    pub fn new<I, S>(paths: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for p in paths {
            let p = p.as_ref();
            if !path::is_well_formed(p) {
                return Err(RouteTableError::InvalidPath(p.to_string()));
            }
            let p = path::normalize(p);
            if out.is_empty() && p != ROOT {
                return Err(RouteTableError::MissingRoot(p.to_string()));
            }
            for prev in &out {
                if prev == p {
                    return Err(RouteTableError::Duplicate(p.to_string()));
                }
                if path::is_strict_prefix(p, prev) {
                    return Err(RouteTableError::AncestorAfterDescendant {
                        ancestor: p.to_string(),
                        descendant: prev.clone(),
                    });
                }
            }
            out.push(p.to_string());
        }
        Ok(Self { paths: out })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True if the table has no entries; every stack built from it is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Entries in depth order.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Iterate `(depth, path)` pairs, root first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.paths.iter().map(String::as_str).enumerate()
    }

    /// Table index of `path`, if it is a known route.
    pub fn depth_of(&self, path: &str) -> Option<usize> {
        self.iter()
            .find(|(_, p)| path::same_path(p, path))
            .map(|(i, _)| i)
    }
}

impl Default for RouteTable {
    /// The three-level table `["/", "/more", "/more/more"]`.
    fn default() -> Self {
        Self {
            paths: ["/", "/more", "/more/more"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for RouteTable {
    type Error = RouteTableError;

    fn try_from(paths: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(paths)
    }
}

impl From<RouteTable> for Vec<String> {
    fn from(table: RouteTable) -> Self {
        table.paths
    }
}
