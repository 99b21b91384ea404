//! Parameter annotations
//!
//! An [`Annotation`] is the structural description of a declared parameter
//! type. It is parsed from `std::any::type_name` output, so the textual form
//! of any node is the exact key a container sees for that type.
//!
//! ```text
//! "core::option::Option<my_app::UserService>"
//!            │
//!            ▼
//! Generic { origin: core::option::Option,
//!           args:   [Leaf(my_app::UserService)] }
//! ```

use std::any::type_name;
use std::fmt;

use crate::constants::{
    ORIGIN_CONST_POINTER, ORIGIN_MUT_POINTER, ORIGIN_MUT_REFERENCE, ORIGIN_REFERENCE,
    ORIGIN_SLICE, ORIGIN_TUPLE,
};
use crate::value_objects::type_path::TypePath;

/// Declared type of a callback parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// No annotation was declared; never injected
    Empty,
    /// A non-generic type
    Leaf(TypePath),
    /// A generic type and its type arguments
    Generic {
        /// The generic type itself, without arguments
        origin: TypePath,
        /// Type arguments in declaration order
        args: Vec<Annotation>,
    },
    /// A type paired with metadata markers
    Annotated {
        /// The annotated type
        base: Box<Annotation>,
        /// Metadata marker types
        metadata: Vec<TypePath>,
    },
}

impl Annotation {
    /// Annotation describing `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::parse(type_name::<T>())
    }

    /// Parse a textual type
    ///
    /// Parsing is total: text that does not follow type syntax becomes an
    /// opaque leaf, and empty text becomes [`Annotation::Empty`].
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::Empty;
        }
        let mut parser = Parser::new(text);
        match parser.parse_type() {
            Some(annotation) if parser.at_end() => annotation,
            _ => Self::Leaf(TypePath::new(text)),
        }
    }

    /// Pair a base annotation with metadata markers
    pub fn annotated(base: Annotation, metadata: Vec<TypePath>) -> Self {
        Self::Annotated {
            base: Box::new(base),
            metadata,
        }
    }

    /// Whether no annotation was declared
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The leaf path or generic origin
    pub fn origin(&self) -> Option<&TypePath> {
        match self {
            Self::Empty => None,
            Self::Leaf(path) => Some(path),
            Self::Generic { origin, .. } => Some(origin),
            Self::Annotated { base, .. } => base.origin(),
        }
    }

    /// Generic type arguments (empty for non-generic annotations)
    pub fn args(&self) -> &[Annotation] {
        match self {
            Self::Generic { args, .. } => args,
            Self::Annotated { base, .. } => base.args(),
            _ => &[],
        }
    }

    /// Key under which a container resolves this annotation
    pub fn key(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Annotated { base, .. } => base.key(),
            _ => Some(self.to_string()),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("_"),
            Self::Leaf(path) => write!(f, "{path}"),
            Self::Generic { origin, args } => {
                let joined = args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                match origin.as_str() {
                    ORIGIN_REFERENCE => write!(f, "&{joined}"),
                    ORIGIN_MUT_REFERENCE => write!(f, "&mut {joined}"),
                    ORIGIN_CONST_POINTER => write!(f, "*const {joined}"),
                    ORIGIN_MUT_POINTER => write!(f, "*mut {joined}"),
                    ORIGIN_TUPLE if args.len() == 1 => write!(f, "({joined},)"),
                    ORIGIN_TUPLE => write!(f, "({joined})"),
                    ORIGIN_SLICE => write!(f, "[{joined}]"),
                    array if array.starts_with("[; ") => {
                        let len = array
                            .trim_start_matches("[; ")
                            .trim_end_matches(']');
                        write!(f, "[{joined}; {len}]")
                    }
                    _ => write!(f, "{origin}<{joined}>"),
                }
            }
            Self::Annotated { base, metadata } => {
                write!(f, "Annotated<{base}")?;
                for marker in metadata {
                    write!(f, ", {marker}")?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Recursive-descent parser over `type_name` output
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn at_end(&mut self) -> bool {
        self.skip_ws();
        self.pos == self.src.len()
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        let matched = self
            .rest()
            .strip_prefix(keyword)
            .is_some_and(|after| after.starts_with(char::is_whitespace));
        if matched {
            self.pos += keyword.len();
            true
        } else {
            false
        }
    }

    fn skip_lifetime(&mut self) {
        self.skip_ws();
        if self.rest().starts_with('\'') {
            self.pos += 1;
            let rest = self.rest();
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            self.pos += end;
        }
    }

    fn parse_type(&mut self) -> Option<Annotation> {
        self.skip_ws();
        if self.eat("&") {
            self.skip_lifetime();
            let origin = if self.eat_keyword("mut") {
                ORIGIN_MUT_REFERENCE
            } else {
                ORIGIN_REFERENCE
            };
            return self.wrap_one(origin);
        }
        if self.eat("*const ") {
            return self.wrap_one(ORIGIN_CONST_POINTER);
        }
        if self.eat("*mut ") {
            return self.wrap_one(ORIGIN_MUT_POINTER);
        }
        if self.eat("(") {
            let args = self.parse_list(')')?;
            if args.is_empty() {
                return Some(Annotation::Leaf(TypePath::new("()")));
            }
            return Some(Annotation::Generic {
                origin: TypePath::new(ORIGIN_TUPLE),
                args,
            });
        }
        if self.eat("[") {
            let element = self.parse_type()?;
            let origin = if self.eat(";") {
                let rest = self.rest();
                let end = rest.find(']')?;
                let len = rest[..end].trim().to_string();
                self.pos += end;
                format!("[; {len}]")
            } else {
                ORIGIN_SLICE.to_string()
            };
            if !self.eat("]") {
                return None;
            }
            return Some(Annotation::Generic {
                origin: TypePath::new(origin),
                args: vec![element],
            });
        }

        let rest = self.rest();
        if ["dyn ", "impl ", "fn(", "unsafe ", "extern ", "<"]
            .iter()
            .any(|prefix| rest.starts_with(prefix))
        {
            let raw = self.take_raw();
            return Some(Annotation::Leaf(TypePath::new(raw)));
        }

        let path = TypePath::new(self.take_path()?);
        if self.rest().starts_with('<') {
            self.pos += 1;
            let args = self.parse_list('>')?;
            return Some(Annotation::Generic { origin: path, args });
        }
        Some(Annotation::Leaf(path))
    }

    fn wrap_one(&mut self, origin: &str) -> Option<Annotation> {
        let inner = self.parse_type()?;
        Some(Annotation::Generic {
            origin: TypePath::new(origin),
            args: vec![inner],
        })
    }

    fn parse_list(&mut self, close: char) -> Option<Vec<Annotation>> {
        let close = close.to_string();
        let mut items = Vec::new();
        loop {
            if self.eat(&close) {
                return Some(items);
            }
            items.push(self.parse_type()?);
            if self.eat(",") {
                continue;
            }
            if self.eat(&close) {
                return Some(items);
            }
            return None;
        }
    }

    fn take_path(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | ':' | '{' | '}' | '#')))
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        self.pos += end;
        Some(&rest[..end])
    }

    /// Read an opaque type up to the next delimiter at nesting depth zero
    fn take_raw(&mut self) -> &'a str {
        let start = self.pos;
        let bytes = self.src.as_bytes();
        let mut depth = 0usize;
        let mut i = self.pos;
        while i < bytes.len() {
            match bytes[i] {
                b'-' if bytes.get(i + 1) == Some(&b'>') => {
                    i += 2;
                    continue;
                }
                b'<' | b'(' | b'[' => depth += 1,
                b'>' | b')' | b']' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                b',' | b';' if depth == 0 => break,
                _ => {}
            }
            i += 1;
        }
        self.pos = i;
        &self.src[start..i]
    }
}
