use std::fmt::{self, Display};

/// A logic term as exchanged with the rule engine
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(String),
    Str(String),
    Int(i64),
    Float(f64),
    List(Vec<Term>),
    Compound(String, Vec<Term>),
    Var(String),
    /// A value with no direct counterpart here (big integers, rationals), kept as text
    Opaque(String),
}

impl Term {
    pub fn atom<S: Into<String>>(name: S) -> Self {
        Term::Atom(name.into())
    }

    pub fn string<S: Into<String>>(text: S) -> Self {
        Term::Str(text.into())
    }

    pub fn var<S: Into<String>>(name: S) -> Self {
        Term::Var(name.into())
    }

    /// True when no unbound variable occurs anywhere in the term
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::List(items) | Term::Compound(_, items) => items.iter().all(Term::is_ground),
            _ => true,
        }
    }

    /// Textual value of an atom, string, or list of those (joined with ", ")
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Term::Atom(s) | Term::Str(s) => Some(s.clone()),
            Term::List(items) => items
                .iter()
                .map(|item| match item {
                    Term::Atom(s) | Term::Str(s) => Some(s.as_str()),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(|parts| parts.join(", ")),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Term::Int(n) => Some(*n as f64),
            Term::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Term::Atom(s) => Some(s),
            _ => None,
        }
    }
}

/// Whether an atom can be written without quotes
fn is_plain_atom(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str, quote: char) -> fmt::Result {
    write!(f, "{quote}")?;
    for c in text.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) if is_plain_atom(name) => write!(f, "{name}"),
            Term::Atom(name) => write_escaped(f, name, '\''),
            Term::Str(text) => write_escaped(f, text, '"'),
            Term::Int(n) => write!(f, "{n}"),
            Term::Float(x) => write!(f, "{x:?}"),
            Term::List(items) => {
                write!(f, "[")?;
                write_args(f, items)?;
                write!(f, "]")
            }
            Term::Compound(functor, args) => {
                Term::Atom(functor.clone()).fmt(f)?;
                write!(f, "(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Term::Var(name) | Term::Opaque(name) => write!(f, "{name}"),
        }
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, items: &[Term]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl From<scryer_prolog::Term> for Term {
    fn from(term: scryer_prolog::Term) -> Self {
        use scryer_prolog::Term as Prolog;

        match term {
            Prolog::Integer(n) => {
                let text = n.to_string();
                text.parse().map(Term::Int).unwrap_or(Term::Opaque(text))
            }
            Prolog::Float(x) => Term::Float(x),
            Prolog::Atom(name) => Term::Atom(name),
            Prolog::String(text) => Term::Str(text),
            Prolog::List(items) => Term::List(items.into_iter().map(Term::from).collect()),
            Prolog::Compound(functor, args) => {
                Term::Compound(functor, args.into_iter().map(Term::from).collect())
            }
            Prolog::Var(name) => Term::Var(name),
            other => Term::Opaque(format!("{other:?}")),
        }
    }
}
