//! jnibridge code generation.
//!
//! Turns a native module [`Schema`](jnibridge_core::Schema) into source text for a
//! runtime ↔ native bridge. Each target surface lives in its own module:
//! - `jni` - JNI method-descriptor bridge (`<spec>-generated.cpp`)

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod jni;

pub use jni::{Artifact, Config, DuplicateModules, Error, Position, Result, generate};
