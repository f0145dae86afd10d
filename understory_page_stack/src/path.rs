// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path matcher: segment-aligned prefix tests over `/`-delimited paths.
//!
//! ## Overview
//!
//! Paths form a prefix hierarchy: `/more/more` is below `/more`, which is
//! below `/`. A candidate is *active* for a current path when the current path
//! starts with the candidate on a segment boundary, so `/more` is active for
//! `/more` and `/more/more` but not for `/moreover`.
//!
//! All functions are pure and total. Malformed paths (empty, or not starting
//! with `/`) never match anything.
//!
//! ```
//! use understory_page_stack::path::is_prefix_active;
//!
//! assert!(is_prefix_active("/", "/more"));
//! assert!(is_prefix_active("/more", "/more/more"));
//! assert!(!is_prefix_active("/more", "/moreover"));
//! assert!(!is_prefix_active("/more/more", "/more"));
//! ```

/// The root path.
pub const ROOT: &str = "/";

/// True if `path` is non-empty and starts with `/`.
pub fn is_well_formed(path: &str) -> bool {
    path.starts_with('/')
}

/// Strip trailing `/` from a non-root path.
///
/// `"/more/"` becomes `"/more"`; `"/"` and `"//"` both become `"/"`.
/// Malformed input is returned unchanged.
pub fn normalize(path: &str) -> &str {
    if !is_well_formed(path) {
        return path;
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT } else { trimmed }
}

/// True if `path` is the root after normalization.
pub fn is_root(path: &str) -> bool {
    is_well_formed(path) && normalize(path) == ROOT
}

/// True iff `current` starts with `candidate` on a segment boundary.
///
/// The root is active for every well-formed path. Both inputs must be well
/// formed, otherwise the result is `false`.
pub fn is_prefix_active(candidate: &str, current: &str) -> bool {
    if !is_well_formed(candidate) || !is_well_formed(current) {
        return false;
    }
    let candidate = normalize(candidate);
    if candidate == ROOT {
        return true;
    }
    match current.strip_prefix(candidate) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// True iff `ancestor` is an active prefix of `path` and the two differ.
pub fn is_strict_prefix(ancestor: &str, path: &str) -> bool {
    is_prefix_active(ancestor, path) && !same_path(ancestor, path)
}

/// True if both paths are well formed and equal after normalization.
pub fn same_path(a: &str, b: &str) -> bool {
    is_well_formed(a) && is_well_formed(b) && normalize(a) == normalize(b)
}
