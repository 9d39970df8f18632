//! Algebraic structures and the action protocol used by the range-query
//! structures in this workspace.
//!
//! A structure is parameterized by an [`Action`]: the *operand* monoid is
//! what the structure stores and folds, the *operator* monoid is what callers
//! apply to it. Capabilities such as inverse elements are expressed as
//! traits ([`Group`], [`Commutative`]) so that requesting an unsupported
//! operation is a type error rather than a runtime failure.

mod action;
mod integer;
mod monoid;
mod structures;

pub mod actions;

pub use action::{Action, Flags};
pub use integer::Integer;
pub use monoid::{Commutative, Group, Idempotent, Monoid};
pub use structures::{Addition, Affine, Assignment, BitAnd, BitOr, BitXor, Maximum, Minimum, Null};
