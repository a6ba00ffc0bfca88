//! Step definitions for RUT scenarios

mod then;
mod when;
