//! Recognizers over a token cursor.
//!
//! Recognition never builds anything: each pass only moves a cursor and
//! reports whether what it walked over had the right shape. The atomic
//! acceptors on [`Cursor`](crate::parse::Cursor) leave the cursor unmoved
//! when they fail; everything layered on top consumes what it looked at,
//! successful or not, so the whole-stream passes each run on a fresh cursor.

mod degree;
mod equation;
mod expr;
mod variables;

pub use degree::{compute_degree, validate_exponents};
pub use equation::{accept_equation, has_single_equals};
pub use expr::{accept_expression, accept_monomial};
pub use variables::accept_single_variable;
