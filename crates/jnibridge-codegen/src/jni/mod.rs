//! JNI bridge emitter.
//!
//! Pipeline, leaves first:
//! - `kind` - return annotation → dispatch kind
//! - `abi` - annotation → JNI type descriptor token
//! - `signature` - method → full JNI method descriptor
//! - `method` - method → invocation thunk + registration entry
//! - `assemble` - modules → output document → artifact
//!
//! Text is produced only by rendering the [`Document`] built by the assembler.

mod abi;
mod assemble;
mod config;
mod document;
mod error;
mod kind;
mod method;
mod naming;
mod signature;


pub use abi::{AbiToken, Position, abi_token, resolve_alias};
pub use assemble::{Artifact, FlatModules, assemble, flatten_modules, generate};
pub use config::{Config, DEFAULT_HEADER, DuplicateModules};
pub use document::{
    BridgeClass, Document, Item, ModuleProvider, ProviderCase, RegistrationEntry, Thunk,
};
pub use error::{Error, Result};
pub use kind::{DispatchKind, dispatch_kind};
pub use method::{EmittedMethod, emit_method};
pub use naming::{HEADER_EXT, SOURCE_EXT};
pub use signature::{MethodDescriptor, build_signature};
