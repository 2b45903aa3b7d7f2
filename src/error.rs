//! Error types for dashboard-ui
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings file access)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// The same export name is declared twice in one widget surface
    #[snafu(display("{widget}: export `{name}` is declared more than once"))]
    DuplicateExport {
        widget: &'static str,
        name: &'static str,
    },

    /// An alias or type binding points at a name the surface does not export
    #[snafu(display("{widget}: `{name}` refers to `{target}`, which is not exported"))]
    UnresolvedExport {
        widget: &'static str,
        name: &'static str,
        target: &'static str,
    },

    /// An alias is bound to a different item than the export it mirrors
    #[snafu(display("{widget}: alias `{name}` is not the same item as `{target}`"))]
    AliasMismatch {
        widget: &'static str,
        name: &'static str,
        target: &'static str,
    },

    /// A part declared as a primitive pass-through is not the primitive's own type
    #[snafu(display("{widget}: `{name}` is not the unmodified primitive part `{part}`"))]
    PassthroughMismatch {
        widget: &'static str,
        name: &'static str,
        part: &'static str,
    },

    /// A local part that composes no primitive part
    #[snafu(display("{widget}: local part `{name}` composes no primitive part"))]
    OrphanPart {
        widget: &'static str,
        name: &'static str,
    },

    /// A props/events type that describes something other than an exported part
    #[snafu(display("{widget}: type `{name}` describes `{describes}`, which is not an exported part"))]
    OrphanType {
        widget: &'static str,
        name: &'static str,
        describes: &'static str,
    },

    /// A props/events type whose name does not pair with the part it describes
    #[snafu(display("{widget}: type `{name}` is not named after the part `{describes}` it describes"))]
    MislabelledType {
        widget: &'static str,
        name: &'static str,
        describes: &'static str,
    },

    /// A second props (or events) type for a part that already has one
    #[snafu(display("{widget}: `{describes}` already has a type of this kind, `{name}` is a second one"))]
    DuplicateType {
        widget: &'static str,
        name: &'static str,
        describes: &'static str,
    },

    /// A local or pass-through part names a part the primitive does not provide
    #[snafu(display("{widget}: `{name}` refers to primitive part `{part}`, which does not exist"))]
    UnknownPrimitivePart {
        widget: &'static str,
        name: &'static str,
        part: &'static str,
    },

    /// The root part has no domain alias
    #[snafu(display("{widget}: root is not exported under its domain alias `{expected}`"))]
    MissingDomainAlias {
        widget: &'static str,
        expected: String,
    },

    /// A root props/events type lacks its domain-qualified alias
    #[snafu(display("{widget}: `{name}` has no domain-qualified alias `{expected}`"))]
    MissingDomainType {
        widget: &'static str,
        name: &'static str,
        expected: String,
    },

    /// Two widgets claim the same domain alias
    #[snafu(display("domain alias `{alias}` is claimed by both `{first}` and `{second}`"))]
    DomainAliasCollision {
        alias: String,
        first: &'static str,
        second: &'static str,
    },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
