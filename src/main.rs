use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use version_sync::cli::orchestration::{self, BumpOutcome, VersionRequest};
use version_sync::config::{self, Config};
use version_sync::domain::{RuleSet, Version, VersionBump};
use version_sync::tree::{DryRunTree, FsTree};
use version_sync::ui;

/// A check found mismatches, or a bump failed.
const EXIT_FAILURE: i32 = 1;
/// A check could not run at all.
const EXIT_INTERNAL: i32 = 2;

#[derive(Parser)]
#[command(
    name = "version-sync",
    version,
    about = "Keep one release version consistent across every project file that embeds it"
)]
struct Args {
    #[arg(long, global = true, default_value = ".", help = "Project root the rules are relative to")]
    root: PathBuf,

    #[arg(short, long, global = true, help = "Custom rule configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print the outcome of every rule")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify all version references match the canonical version
    Check,

    /// Update all version references to X.Y.Z
    Bump {
        #[arg(
            required_unless_present = "next",
            conflicts_with = "next",
            value_name = "VERSION",
            help = "Target version (X.Y.Z)"
        )]
        target: Option<String>,

        #[arg(long, value_enum, help = "Derive the target from the canonical version")]
        next: Option<VersionBump>,

        #[arg(long, help = "Preview what would change without writing files")]
        dry_run: bool,
    },

    /// Show the canonical source and every rule in application order
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let failure_code = match args.command {
        Command::Check => EXIT_INTERNAL,
        _ => EXIT_FAILURE,
    };

    let config = match config::load_config(&args.root, args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            process::exit(failure_code);
        }
    };
    let rules = config.rule_set();
    let tree = FsTree::new(&args.root);

    match args.command {
        Command::List => {
            ui::display_rules(&config.canonical, &rules);
        }
        Command::Check => {
            let report =
                match orchestration::run_check(&tree, &config.canonical, &rules, args.verbose) {
                    Ok(report) => report,
                    Err(e) => {
                        ui::display_error(&e.to_string());
                        process::exit(EXIT_INTERNAL);
                    }
                };
            ui::display_check_result(&report.version, &report.mismatches);
            if !report.is_consistent() {
                process::exit(EXIT_FAILURE);
            }
        }
        Command::Bump {
            target,
            next,
            dry_run,
        } => {
            let request = match (target, next) {
                (Some(target), _) => VersionRequest::Exact(target),
                (None, Some(bump)) => VersionRequest::Next(bump),
                (None, None) => {
                    ui::display_error("bump requires a version or --next");
                    process::exit(EXIT_FAILURE);
                }
            };
            if let Err(e) = bump(&tree, &config, &rules, &request, dry_run, args.verbose) {
                ui::display_error(&e.to_string());
                process::exit(EXIT_FAILURE);
            }
        }
    }

    Ok(())
}

fn bump(
    tree: &FsTree,
    config: &Config,
    rules: &RuleSet,
    request: &VersionRequest,
    dry_run: bool,
    verbose: bool,
) -> version_sync::Result<()> {
    let requested = orchestration::resolve_version_request(tree, &config.canonical, request)?;

    if dry_run {
        let staged = DryRunTree::new(tree);
        orchestration::run_bump(&staged, rules, &requested, verbose)?;
        let version = Version::parse(&requested)?;
        ui::display_dry_run(&version, &staged.staged_paths());
        return Ok(());
    }

    match orchestration::run_bump(tree, rules, &requested, verbose)? {
        BumpOutcome::Changed { files } => {
            if verbose {
                for file in &files {
                    ui::display_status(&format!("wrote {}", file));
                }
            }
            ui::display_success(&format!("updated version references to {}", requested));
        }
        BumpOutcome::Unchanged => {
            ui::display_success(&format!("no changes needed for {}", requested));
        }
    }
    Ok(())
}
