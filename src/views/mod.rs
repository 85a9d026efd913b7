//! # Builtin Views
//!
//! [`Label`] and [`Stack`] build page content; [`BreakpointGate`] and its
//! [`desktop`], [`tablet`] and [`mobile`] shorthands mount content only while
//! the viewport is at a matching breakpoint.

mod label;
pub use label::*;

mod stack;
pub use stack::*;

mod gate;
pub use gate::*;
