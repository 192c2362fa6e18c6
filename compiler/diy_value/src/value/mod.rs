//! Runtime values, which double as the syntax tree.
//!
//! # Construction
//!
//! Heap-backed variants wrap a [`Heap`], whose constructor is private to this
//! module. Build them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");
//! let xs = Value::list(vec![Value::int(1), Value::int(2)]);
//! let f = Value::closure(Closure::new(env, params, body));
//! ```
//!
//! # Printing
//!
//! `Display` is the printer used for REPL output and inside error messages:
//! it produces text the reader parses back to an equal value (closures
//! excepted).

mod closure;
mod heap;

use std::fmt;

pub use closure::Closure;
pub use heap::Heap;

use crate::Symbol;

/// A DIY Lisp value or syntax-tree node.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// `#t` or `#f`.
    Bool(bool),
    /// Immutable string.
    Str(Heap<String>),
    /// Unevaluated name. Only produced by the reader and by `quote`.
    Symbol(Symbol),
    /// Ordered sequence; also every compound expression in the AST.
    List(Heap<Vec<Value>>),
    /// User-defined function.
    Closure(Heap<Closure>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// The empty list, `()`.
    #[inline]
    pub fn nil() -> Self {
        Value::list(Vec::new())
    }

    #[inline]
    pub fn closure(closure: Closure) -> Self {
        Value::Closure(Heap::new(closure))
    }
}

// Value Methods

impl Value {
    /// Truth value used by `if` and `cond`.
    ///
    /// `#f`, `0`, `""` and `()` are false; everything else is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Symbol(_) | Value::Closure(_) => true,
        }
    }

    /// Integers, booleans, strings and symbols are atoms; lists and closures
    /// are not.
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Bool(_) | Value::Str(_) | Value::Symbol(_)
        )
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The symbol, if this is an unevaluated name.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// The elements, if this is a list. The empty list yields an empty slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// The closure, if this is a function value.
    pub fn as_closure(&self) -> Option<&Closure> {
        match self {
            Value::Closure(closure) => Some(closure),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Closure(_) => "closure",
        }
    }
}

/// Render a node as source text.
pub fn unparse(node: &Value) -> String {
    node.to_string()
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Symbol(sym) => write!(f, "Symbol({sym})"),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Closure(closure) => write!(f, "{:?}", &**closure),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Str(s) => write_escaped(f, s),
            Value::Symbol(sym) => write!(f, "{sym}"),
            Value::List(items) => match &items[..] {
                [Value::Symbol(head), quoted] if head.as_str() == "quote" => {
                    write!(f, "'{quoted}")
                }
                _ => {
                    write!(f, "(")?;
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{item}")?;
                    }
                    write!(f, ")")
                }
            },
            Value::Closure(closure) => write!(f, "<closure/{}>", closure.arity()),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Structural equality for atoms and lists; closures compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Closure(a), Value::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}
