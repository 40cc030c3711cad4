//! Track-level effects.

pub mod echo;

pub use echo::apply_echo;
