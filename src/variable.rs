// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use lazy_static::lazy_static;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{self, AtomicUsize};
use std::sync::{Arc, Mutex, PoisonError};

lazy_static! {
    static ref NAMED_VARIABLES: Mutex<HashMap<String, Variable>> = Mutex::new(HashMap::new());
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct VariableData {
    name: String,
    /// `(base, index)` for variables made by [`Variable::indexed`]
    indexed: Option<(String, usize)>,
    id: usize,
}

/// An opaque symbolic identifier.
///
/// Two variables are equal only if they come from the same `new` name or
/// the same `fresh` call. Variables are ordered by name and then by
/// creation, which fixes the lexicographic term order of [`Polynomial`].
/// Indexed variables compare by their base name and then numerically by
/// index, so `alpha[2] < alpha[10]`.
///
/// [`Polynomial`]: crate::polynomial::Polynomial
#[derive(Clone)]
pub struct Variable(Arc<VariableData>);

impl Variable {
    fn create(name: String, indexed: Option<(String, usize)>) -> Self {
        let id = NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed);
        Variable(Arc::new(VariableData { name, indexed, id }))
    }
    /// returns the variable named `name`, creating it on first use
    pub fn new(name: &str) -> Self {
        let mut named = NAMED_VARIABLES
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        named
            .entry(name.to_owned())
            .or_insert_with(|| Variable::create(name.to_owned(), None))
            .clone()
    }
    /// returns a new variable that is distinct from every other variable,
    /// including named variables that print the same
    pub fn fresh(name: &str) -> Self {
        Variable::create(name.to_owned(), None)
    }
    /// returns `count` fresh variables printed as `base[0]`, `base[1]`, ...
    pub fn indexed(base: &str, count: usize) -> Vec<Self> {
        (0..count)
            .map(|index| {
                Variable::create(
                    format!("{}[{}]", base, index),
                    Some((base.to_owned(), index)),
                )
            })
            .collect()
    }
    pub fn name(&self) -> &str {
        &self.0.name
    }
    fn sort_key(&self) -> (&str, Option<usize>) {
        match &self.0.indexed {
            Some((base, index)) => (base.as_str(), Some(*index)),
            None => (self.0.name.as_str(), None),
        }
    }
}

impl PartialEq for Variable {
    fn eq(&self, rhs: &Self) -> bool {
        self.0.id == rhs.0.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state)
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Variable {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.sort_key()
            .cmp(&rhs.sort_key())
            .then_with(|| self.0.id.cmp(&rhs.0.id))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.0.name, self.0.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_variables_are_interned() {
        let x1 = Variable::new("x");
        let x2 = Variable::new("x");
        let y = Variable::new("y");
        assert_eq!(x1, x2);
        assert_ne!(x1, y);
        assert!(x1 < y);
        assert_eq!(format!("{}", x1), "x");
    }

    #[test]
    fn test_fresh_variables_are_distinct() {
        let named = Variable::new("t");
        let fresh = Variable::fresh("t");
        let fresh2 = Variable::fresh("t");
        assert_ne!(named, fresh);
        assert_ne!(fresh, fresh2);
        assert_eq!(format!("{}", fresh), "t");
        assert_eq!(named.cmp(&fresh), Ordering::Less);
    }

    #[test]
    fn test_indexed() {
        let alpha = Variable::indexed("alpha", 3);
        assert_eq!(alpha.len(), 3);
        assert_eq!(alpha[1].name(), "alpha[1]");
        assert_ne!(alpha[0], alpha[1]);
        assert!(alpha[0] < alpha[1]);
        assert!(alpha[1] < alpha[2]);
    }

    #[test]
    fn test_indexed_order_is_numeric() {
        let alpha = Variable::indexed("alpha", 12);
        assert_eq!(alpha[10].name(), "alpha[10]");
        assert!(alpha[2] < alpha[10]);
        assert!(alpha[9] < alpha[10]);
        assert!(alpha[10] < alpha[11]);
        let mut sorted = alpha.clone();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, alpha);
    }
}
