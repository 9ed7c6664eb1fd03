//! Output document model and rendering.
//!
//! The assembler builds a [`Document`] from typed nodes; text exists only after
//! [`Document::render`]. Every generated value is written exactly once, in place.

use std::fmt;

use super::{DispatchKind, MethodDescriptor};

/// A complete generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub header: String,
    /// Path of the included header, written between quotes.
    pub include: String,
    /// Enclosing namespaces, outermost first.
    pub namespaces: Vec<String>,
    pub items: Vec<Item>,
    /// Render thunk argument names as comments.
    pub arg_comments: bool,
}

/// Top-level declarations, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Thunk(Thunk),
    BridgeClass(BridgeClass),
    ModuleProvider(ModuleProvider),
}

/// Host function forwarding one call to the generic native invoker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thunk {
    pub name: String,
    pub kind: DispatchKind,
    pub method: String,
    pub descriptor: MethodDescriptor,
    /// Declared parameter names plus the synthetic promise name.
    pub arg_names: Vec<String>,
}

/// One `methodMap_` line in a bridge constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationEntry {
    pub method: String,
    /// Declared parameters only.
    pub arity: usize,
    pub thunk: String,
}

/// Constructor of one module's bridge class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeClass {
    pub name: String,
    pub entries: Vec<RegistrationEntry>,
}

/// Module lookup function: first matching case wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleProvider {
    pub name: String,
    pub cases: Vec<ProviderCase>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderCase {
    pub module: String,
    pub class: String,
}

impl Document {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn thunks(&self) -> impl Iterator<Item = &Thunk> {
        self.items.iter().filter_map(|item| match item {
            Item::Thunk(thunk) => Some(thunk),
            _ => None,
        })
    }

    pub fn bridge_classes(&self) -> impl Iterator<Item = &BridgeClass> {
        self.items.iter().filter_map(|item| match item {
            Item::BridgeClass(class) => Some(class),
            _ => None,
        })
    }

    pub fn provider(&self) -> Option<&ModuleProvider> {
        self.items.iter().find_map(|item| match item {
            Item::ModuleProvider(provider) => Some(provider),
            _ => None,
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.trim_end())?;
        writeln!(f)?;
        writeln!(f, "#include \"{}\"", self.include)?;
        writeln!(f)?;
        for ns in &self.namespaces {
            writeln!(f, "namespace {ns} {{")?;
        }

        for item in &self.items {
            writeln!(f)?;
            match item {
                Item::Thunk(thunk) => thunk.write(f, self.arg_comments)?,
                Item::BridgeClass(class) => write!(f, "{class}")?,
                Item::ModuleProvider(provider) => write!(f, "{provider}")?,
            }
        }

        writeln!(f)?;
        for ns in self.namespaces.iter().rev() {
            writeln!(f, "}} // namespace {ns}")?;
        }
        Ok(())
    }
}

impl Thunk {
    fn write(&self, f: &mut fmt::Formatter<'_>, arg_comments: bool) -> fmt::Result {
        writeln!(
            f,
            "static facebook::jsi::Value {}(facebook::jsi::Runtime& rt, TurboModule &turboModule, const facebook::jsi::Value* args, size_t count) {{",
            self.name
        )?;
        if arg_comments && !self.arg_names.is_empty() {
            writeln!(f, "  // args: {}", self.arg_names.join(", "))?;
        }
        writeln!(
            f,
            "  return static_cast<JavaTurboModule &>(turboModule).invokeJavaMethod(rt, {}, \"{}\", \"{}\", args, count);",
            self.kind, self.method, self.descriptor
        )?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for BridgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{0}::{0}(const JavaTurboModule::InitParams &params)",
            self.name
        )?;
        writeln!(f, "  : JavaTurboModule(params) {{")?;
        for entry in &self.entries {
            writeln!(
                f,
                "  methodMap_[\"{}\"] = MethodMetadata {{{}, {}}};",
                entry.method, entry.arity, entry.thunk
            )?;
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for ModuleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "std::shared_ptr<TurboModule> {}(const std::string moduleName, const JavaTurboModule::InitParams &params) {{",
            self.name
        )?;
        for case in &self.cases {
            writeln!(f, "  if (moduleName == \"{}\") {{", case.module)?;
            writeln!(f, "    return std::make_shared<{}>(params);", case.class)?;
            writeln!(f, "  }}")?;
        }
        writeln!(f, "  return nullptr;")?;
        writeln!(f, "}}")
    }
}
