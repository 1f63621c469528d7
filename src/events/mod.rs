//! Event types and observers.
//!
//! Submodules:
//! - [`labeldiagnostic`] – problems found while resolving a label against its font
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod labeldiagnostic;
pub mod switchdebug;
