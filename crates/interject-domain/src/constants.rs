//! Domain constants
//!
//! Names and namespaces that decide how annotations are classified.

/// Name of the implicit instance receiver parameter
pub const RECEIVER_NAME: &str = "self";

/// Namespace prefix shared by every crate of this library
pub const ADAPTER_NAMESPACE_PREFIX: &str = "interject";

/// Namespaces of the Rust standard library
pub const BUILTIN_NAMESPACES: &[&str] = &["core", "alloc", "std"];

/// Primitive type names as reported by `std::any::type_name`
pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool", "char", "str", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64",
    "u128", "usize", "f32", "f64", "()", "!",
];

/// Default namespaces of the host interaction framework
pub const DEFAULT_FRAMEWORK_NAMESPACES: &[&str] = &["serenity", "poise", "twilight_model"];

/// Default namespaces whose metadata marks an annotated type as container-owned
pub const DEFAULT_CONTAINER_NAMESPACES: &[&str] = &["dill", "interject_domain"];

/// Description used when a command is registered without one
pub const DEFAULT_COMMAND_DESCRIPTION: &str = "-";

// Origin names used for structural (non-path) generic forms
pub const ORIGIN_REFERENCE: &str = "&";
pub const ORIGIN_MUT_REFERENCE: &str = "&mut";
pub const ORIGIN_CONST_POINTER: &str = "*const";
pub const ORIGIN_MUT_POINTER: &str = "*mut";
pub const ORIGIN_TUPLE: &str = "(..)";
pub const ORIGIN_SLICE: &str = "[]";

/// Every fixed structural origin; arrays use `[; N]`
pub const STRUCTURAL_ORIGINS: &[&str] = &[
    ORIGIN_REFERENCE,
    ORIGIN_MUT_REFERENCE,
    ORIGIN_CONST_POINTER,
    ORIGIN_MUT_POINTER,
    ORIGIN_TUPLE,
    ORIGIN_SLICE,
];
