//! Chained binding frames.
//!
//! An [`Environment`] is a handle to one frame. Cloning the handle shares the
//! frame; [`Environment::extend`] creates a child frame that points back at
//! its parent. Children never become visible to their parents, so the frame
//! graph is a tree rooted at the global environment.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::errors::{undefined_name, LispResult};
use crate::{Symbol, Value};

/// Single-threaded shared mutable cell behind every frame.
///
/// All frame allocations go through `LocalScope::new`, which keeps the
/// `Rc<RefCell<_>>` pairing in one place.
///
/// # Borrowing
///
/// Borrows are short: `lookup` and `set` release the frame before
/// evaluating anything, so a closure body can `define` into a frame that a
/// caller is also reading without a `BorrowMutError`.
#[repr(transparent)]
struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope plus the scope it was created in.
struct Frame {
    bindings: FxHashMap<Symbol, Value>,
    parent: Option<Environment>,
}

/// Handle to a binding frame and, through it, its chain of ancestors.
///
/// # Sharing
///
/// Cloning an `Environment` clones the handle, not the bindings. Closures
/// hold such a handle, so a binding added to their defining frame after they
/// were created is visible when they run.
///
/// # Lifetime
///
/// A closure stored in its own defining frame keeps that frame alive through
/// an `Rc` cycle. Frames created by `defn` therefore live until the process
/// exits.
#[derive(Clone)]
pub struct Environment {
    frame: LocalScope<Frame>,
}

impl Environment {
    /// Create an empty root environment.
    pub fn new() -> Self {
        Self::root(FxHashMap::default())
    }

    /// Create a root environment holding `bindings`.
    pub fn with_bindings(bindings: impl IntoIterator<Item = (Symbol, Value)>) -> Self {
        Self::root(bindings.into_iter().collect())
    }

    fn root(bindings: FxHashMap<Symbol, Value>) -> Self {
        Environment {
            frame: LocalScope::new(Frame {
                bindings,
                parent: None,
            }),
        }
    }

    /// Look up `symbol` in this frame, then in each ancestor in turn.
    pub fn lookup(&self, symbol: &Symbol) -> LispResult {
        self.find(symbol, Value::clone)
            .ok_or_else(|| undefined_name(symbol))
    }

    /// Whether `symbol` is bound anywhere in the chain.
    pub fn is_defined(&self, symbol: &Symbol) -> bool {
        self.find(symbol, |_| ()).is_some()
    }

    /// Walk the chain outward and apply `f` to the nearest binding of
    /// `symbol`, without cloning the value or building an error on a miss.
    fn find<R>(&self, symbol: &Symbol, f: impl FnOnce(&Value) -> R) -> Option<R> {
        let mut frame = self.frame.clone();
        loop {
            let parent = {
                let current = frame.borrow();
                if let Some(value) = current.bindings.get(symbol) {
                    return Some(f(value));
                }
                current.parent.as_ref().map(|env| env.frame.clone())
            };
            frame = parent?;
        }
    }

    /// Bind `symbol` in this frame, replacing any binding it already has
    /// here. Ancestor frames are never touched.
    pub fn set(&self, symbol: Symbol, value: Value) {
        self.frame.borrow_mut().bindings.insert(symbol, value);
    }

    /// Create a child frame holding `bindings`, parented to this one.
    ///
    /// When a symbol appears more than once in `bindings`, the last
    /// occurrence wins.
    #[must_use]
    pub fn extend(&self, bindings: impl IntoIterator<Item = (Symbol, Value)>) -> Environment {
        Environment {
            frame: LocalScope::new(Frame {
                bindings: bindings.into_iter().collect(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// The frame this one was extended from, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.frame.borrow().parent.clone()
    }

    /// Number of frames from this one up to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.parent();
        while let Some(env) = current {
            depth += 1;
            current = env.parent();
        }
        depth
    }

    /// Whether both handles refer to the same frame.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.frame.ptr_eq(&other.frame)
    }

    /// Names bound directly in this frame, sorted.
    pub fn local_names(&self) -> Vec<Symbol> {
        let mut names: Vec<Symbol> = self.frame.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Values are left out: a frame usually holds closures that capture it.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("names", &self.local_names())
            .finish()
    }
}
