//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crudgen_core::domain::EnumRuleMatching;

use crate::config::ScaffolderBackend;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate CRUD resources for Laravel-style projects",
    long_about = "crudgen scaffolds an entity, its migration columns, an API \
                  controller, a form request, a resource route and view stubs \
                  from one compact field/relation description.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen crud project --fields \"name:string, status:enum(open,closed)\"\n\
        \x20 crudgen crud project --relations \"tasks:hasMany,owner:belongsTo\"\n\
        \x20 crudgen crud task --fields \"title:string\" --dry-run\n\
        \x20 crudgen completions bash > /usr/share/bash-completion/completions/crudgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate CRUD artifacts for one entity.
    #[command(
        visible_alias = "make:crud",
        about = "Generate CRUD artifacts for an entity",
        after_help = "EXAMPLES:\n\
            \x20 crudgen crud project --fields \"name:string, status:enum(open,closed)\"\n\
            \x20 crudgen make:crud project --relations \"tasks:hasMany\"\n\
            \x20 crudgen crud project --fields \"name:string\" --scaffolder stub"
    )]
    Crud(CrudArgs),

    /// Initialise a crudgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 crudgen init           # global config\n\
            \x20 crudgen init --local   # .crudgen.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get scaffold.backend\n\
            \x20 crudgen config list\n\
            \x20 crudgen config path"
    )]
    Config(ConfigCommands),
}

// ── crud ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen crud`.
#[derive(Debug, Args)]
pub struct CrudArgs {
    /// Singular entity name, e.g. `project` or `blog_post`.
    #[arg(value_name = "ENTITY", help = "Singular entity name")]
    pub entity: String,

    /// Fields as `name:type` pairs separated by ", ".
    #[arg(
        long = "fields",
        value_name = "FIELDS",
        default_value = "",
        hide_default_value = true,
        help = "Fields, e.g. \"name:string, status:enum(open,closed)\""
    )]
    pub fields: String,

    /// Relations as `name:kind` pairs separated by ",".
    #[arg(
        long = "relations",
        value_name = "RELATIONS",
        default_value = "",
        hide_default_value = true,
        help = "Relations, e.g. \"tasks:hasMany,owner:belongsTo\""
    )]
    pub relations: String,

    /// Override `scaffold.backend`.
    #[arg(
        long = "scaffolder",
        value_enum,
        value_name = "BACKEND",
        help = "How blank entity/migration/request files are created"
    )]
    pub scaffolder: Option<ScaffolderBackend>,

    /// Override `rules.enum_matching`.
    #[arg(
        long = "enum-rules",
        value_enum,
        value_name = "MODE",
        help = "Enum validation rules: exact `enum(open,closed)` only, or any enum"
    )]
    pub enum_rules: Option<EnumRules>,

    /// Print the rendered artifacts without touching any file.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

/// CLI spelling of [`EnumRuleMatching`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnumRules {
    Literal,
    Structural,
}

impl From<EnumRules> for EnumRuleMatching {
    fn from(value: EnumRules) -> Self {
        match value {
            EnumRules::Literal => EnumRuleMatching::Literal,
            EnumRules::Structural => EnumRuleMatching::Structural,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `crudgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.crudgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffold.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
