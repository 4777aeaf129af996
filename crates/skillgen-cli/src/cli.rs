//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Generate skills from a documentation tree.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "skillgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "SKILLGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Documentation root containing the category directories
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory for generated skills and collection manifests
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Category directory to scan (repeatable; replaces the configured list)
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Collection metadata JSON; enables catalog generation
    #[arg(long, value_name = "FILE")]
    pub metadata: Option<PathBuf>,

    /// Collection version table JSON
    #[arg(long, value_name = "FILE")]
    pub versions: Option<PathBuf>,

    /// Path of the generated catalog
    #[arg(long, value_name = "FILE")]
    pub catalog_output: Option<PathBuf>,

    /// Body line count above which reference.md is generated
    #[arg(long, value_name = "LINES")]
    pub reference_threshold: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "skillgen",
            "--source",
            "docs",
            "-o",
            "plugins",
            "--category",
            "patterns",
            "--category",
            "build",
            "--reference-threshold",
            "500",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("docs")));
        assert_eq!(cli.output, Some(PathBuf::from("plugins")));
        assert_eq!(cli.categories, vec!["patterns", "build"]);
        assert_eq!(cli.reference_threshold, Some(500));
        assert!(cli.verbose);
        assert!(cli.metadata.is_none());
    }
}
