//! Per-iteration loop context synthesis.
//!
//! Each element of a repeat collection is rendered with a fresh `loop`
//! namespace describing where that element sits in the collection, in the
//! style template authors know from Jinja-family `{% for %}` blocks.

use minijinja::value::{Rest, Value};
use minijinja::{Error, ErrorKind, context};

/// Nesting depth of the current repetition. Repetition is currently
/// top-level only, so both fields are constants reserved for future
/// nested collections.
const DEPTH: i64 = 0;
const DEPTH0: i64 = -1;

/// Derived metadata for one iteration of a repeat collection.
///
/// Pure function of `(position, total)`; building one has no side effects
/// and two builds with the same inputs are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopContext {
    /// 1-based position within the collection.
    pub index: usize,
    /// 0-based position within the collection.
    pub index0: usize,
    /// 1-based position counting from the end.
    pub revindex: usize,
    /// 0-based position counting from the end.
    pub revindex0: usize,
    /// Whether this is the first element.
    pub first: bool,
    /// Whether this is the last element.
    pub last: bool,
}

impl LoopContext {
    /// Build the context for `position` within a collection of `total`
    /// elements. `position` must be less than `total`.
    pub fn build(position: usize, total: usize) -> Self {
        debug_assert!(position < total, "position {position} out of range for total {total}");

        Self {
            index: position + 1,
            index0: position,
            revindex: total - position,
            revindex0: total - position - 1,
            first: position == 0,
            last: position == total - 1,
        }
    }

    /// The template-facing `loop` value: every field of this context plus
    /// the `cycle(...)` accessor and the nesting-depth placeholders.
    pub fn value(&self) -> Value {
        context! {
            index => self.index,
            index0 => self.index0,
            revindex => self.revindex,
            revindex0 => self.revindex0,
            first => self.first,
            last => self.last,
            cycle => cycle_value(self.index0),
            depth => DEPTH,
            depth0 => DEPTH0,
        }
    }
}

/// A `cycle(...)` accessor bound to one position.
///
/// Called as `{{ loop.cycle("odd", "even") }}`, it returns the argument at
/// `position mod argcount`. The position is captured when the context is
/// built, so the accessor needs no engine-side loop state.
fn cycle_value(position: usize) -> Value {
    Value::from_function(move |values: Rest<Value>| -> Result<Value, Error> {
        if values.is_empty() {
            return Err(Error::new(
                ErrorKind::MissingArgument,
                "cycle() takes at least one value",
            ));
        }
        Ok(values[cycle_pick(position, values.len())].clone())
    })
}

/// Index selected by `cycle` at `position` for a call with `count` values.
fn cycle_pick(position: usize, count: usize) -> usize {
    position % count
}
