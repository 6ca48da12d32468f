//! Rule engine backed by an embedded Scryer Prolog machine

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use scryer_prolog::{LeafAnswer, Machine, MachineBuilder};
use tracing::{debug, info, instrument};

use super::error::{EngineError, Result};
use super::term::Term;
use super::{RuleEngine, Solution};

/// Prolog engine that consults knowledge-base files and answers goals with full
/// rule resolution and backtracking
pub struct PrologEngine {
    machine: RefCell<Machine>,
    source: Option<PathBuf>,
}

impl Default for PrologEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PrologEngine {
    /// Create an engine with nothing consulted yet
    #[must_use]
    pub fn new() -> Self {
        Self {
            machine: RefCell::new(MachineBuilder::default().build()),
            source: None,
        }
    }

    /// Create an engine and consult the given file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut engine = Self::new();
        engine.consult(path.as_ref())?;
        Ok(engine)
    }

    /// The file most recently consulted, if any
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Run a goal to completion, collecting bindings or the raised exception
    fn run(machine: &mut Machine, goal: &str) -> Result<Vec<Solution>> {
        let mut solutions = Vec::new();
        for answer in machine.run_query(goal.to_string()) {
            match answer {
                Ok(LeafAnswer::LeafAnswer { bindings, .. }) => solutions.push(
                    bindings
                        .into_iter()
                        .map(|(name, value)| (name, Term::from(value)))
                        .collect(),
                ),
                Ok(LeafAnswer::True) => solutions.push(Solution::new()),
                Ok(LeafAnswer::False) => break,
                Ok(LeafAnswer::Exception(exception)) | Err(exception) => {
                    return Err(classify_exception(Term::from(exception)));
                }
            }
        }
        Ok(solutions)
    }

    /// Read every clause of `path` so that syntax errors surface before loading
    fn check_syntax(&mut self, path: &Path) -> Result<()> {
        let file = Term::atom(path.to_string_lossy());
        let goal = format!(
            "open({file}, read, S), \
             catch((repeat, read_term(S, T, []), T == end_of_file, !), E, (close(S), throw(E))), \
             close(S)."
        );
        match Self::run(self.machine.get_mut(), &goal) {
            Ok(solutions) if !solutions.is_empty() => Ok(()),
            Ok(_) => Err(EngineError::Consult(format!("could not read {}", path.display()))),
            Err(EngineError::Exception(message)) => Err(EngineError::Syntax(message)),
            Err(other) => Err(other),
        }
    }
}

/// Turn a Prolog exception term into the matching engine fault
fn classify_exception(exception: Term) -> EngineError {
    if let Term::Compound(functor, args) = &exception
        && functor == "error"
    {
        match args.first() {
            Some(Term::Compound(kind, details)) if kind == "existence_error" => {
                if let [Term::Atom(what), Term::Compound(slash, indicator)] = details.as_slice()
                    && what == "procedure"
                    && slash == "/"
                    && let [Term::Atom(name), Term::Int(arity)] = indicator.as_slice()
                {
                    return EngineError::UnknownProcedure {
                        name: name.clone(),
                        arity: usize::try_from(*arity).unwrap_or_default(),
                    };
                }
            }
            Some(Term::Compound(kind, _)) if kind == "syntax_error" => {
                return EngineError::Syntax(exception.to_string());
            }
            _ => {}
        }
    }
    EngineError::Exception(exception.to_string())
}

impl RuleEngine for PrologEngine {
    fn consult(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(EngineError::FileNotFound(path.to_path_buf()));
        }
        self.check_syntax(path)?;

        let goal = format!("consult({}).", Term::atom(path.to_string_lossy()));
        match Self::run(self.machine.get_mut(), &goal) {
            Ok(solutions) if !solutions.is_empty() => {}
            Ok(_) => {
                return Err(EngineError::Consult(format!(
                    "{} did not load",
                    path.display()
                )));
            }
            Err(EngineError::Exception(message)) => return Err(EngineError::Consult(message)),
            Err(other) => return Err(other),
        }

        info!("Loaded knowledge base {}", path.display());
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn query(&self, goal: &str) -> Result<Vec<Solution>> {
        if self.source.is_none() {
            return Err(EngineError::NotLoaded(
                "no knowledge base has been consulted".to_string(),
            ));
        }

        let goal = goal.trim();
        let goal = if goal.ends_with('.') {
            goal.to_string()
        } else {
            format!("{goal}.")
        };

        let mut machine = self.machine.borrow_mut();
        let solutions = Self::run(&mut machine, &goal)?;
        debug!("{} solutions", solutions.len());
        Ok(solutions)
    }
}
