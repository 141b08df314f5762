//! Unit test harness for shutter-drive.
//!
//! This target organizes unit tests for each component of the library.

mod command_decode;
mod config_parsing;
mod config_validation;
