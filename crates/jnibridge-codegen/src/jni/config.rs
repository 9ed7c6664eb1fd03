//! Configuration types for JNI bridge emission.

/// Header written at the top of every generated file.
pub const DEFAULT_HEADER: &str = "\
/**
 * This file is generated by jnibridge. Do not edit it by hand.
 *
 * @generated
 */";

/// What to do when two schema groups declare a module with the same name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateModules {
    /// Later declaration replaces the earlier one, keeping the earlier position.
    #[default]
    Overwrite,
    /// Fail with [`Error::DuplicateModule`](super::Error::DuplicateModule).
    Reject,
}

/// Configuration for JNI bridge emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Policy for colliding module names
    pub(crate) duplicate_modules: DuplicateModules,
    /// Render each thunk's argument names as a comment
    pub(crate) arg_comments: bool,
    /// License/attribution header
    pub(crate) header: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_modules: DuplicateModules::default(),
            arg_comments: true,
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate module name policy.
    pub fn duplicate_modules(mut self, value: DuplicateModules) -> Self {
        self.duplicate_modules = value;
        self
    }

    /// Set whether thunks carry an argument-name comment.
    pub fn arg_comments(mut self, value: bool) -> Self {
        self.arg_comments = value;
        self
    }

    /// Replace the file header.
    pub fn header(mut self, value: impl Into<String>) -> Self {
        self.header = value.into();
        self
    }
}
