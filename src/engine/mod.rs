//! Rule engine module
//!
//! The advisor treats the rule engine as a black box: it consults a knowledge
//! base once and answers goal strings with zero or more variable bindings.
//! [`PrologEngine`] embeds a Scryer Prolog machine; test stubs plug in
//! through [`RuleEngine`].

pub mod error;
pub mod prolog;
pub mod term;

use std::path::Path;

pub use error::{EngineError, Result};
pub use prolog::PrologEngine;
pub use term::Term;

/// One consistent assignment of values to the named variables of a goal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solution {
    bindings: Vec<(String, Term)>,
}

impl Solution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind<S: Into<String>>(&mut self, name: S, value: Term) {
        let name = name.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.bindings.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Term)> for Solution {
    fn from_iter<I: IntoIterator<Item = (S, Term)>>(iter: I) -> Self {
        let mut solution = Solution::new();
        for (name, value) in iter {
            solution.bind(name, value);
        }
        solution
    }
}

/// A logic engine that answers goals against a consulted knowledge base
pub trait RuleEngine {
    /// Load a knowledge base file, replacing whatever was loaded before
    fn consult(&mut self, path: &Path) -> Result<()>;

    /// Run a goal and return every solution in the order the engine yields them
    fn query(&self, goal: &str) -> Result<Vec<Solution>>;
}

impl<E: RuleEngine + ?Sized> RuleEngine for Box<E> {
    fn consult(&mut self, path: &Path) -> Result<()> {
        (**self).consult(path)
    }

    fn query(&self, goal: &str) -> Result<Vec<Solution>> {
        (**self).query(goal)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::PrologEngine;

    /// Write knowledge-base source to a temporary `.pl` file
    pub fn write_source(source: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".pl")
            .tempfile()
            .unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    /// Consult source text into a fresh engine
    pub fn load_source(source: &str) -> PrologEngine {
        let file = write_source(source);
        PrologEngine::load(file.path()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_rebinding_keeps_position() {
        let mut solution: Solution = [("A", Term::Int(1)), ("B", Term::Int(2))]
            .into_iter()
            .collect();
        solution.bind("A", Term::Int(3));

        let names: Vec<&str> = solution.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(solution.get("A"), Some(&Term::Int(3)));
        assert_eq!(solution.get("C"), None);
        assert_eq!(solution.len(), 2);
    }
}
