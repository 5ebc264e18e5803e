//! Core domain types and pure functions for the clubhouse project.
//!
//! This crate follows the Functional Core pattern: everything in here is
//! pure data or pure functions, with no I/O. The storage module defines the
//! repository contract that the application crate implements.

pub mod member;
pub mod storage;
