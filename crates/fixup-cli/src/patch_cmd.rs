//! Shared driver for the two source patchers

use crate::config::FixupConfig;
use crate::logging;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fixup_patch::{PatchLayer, PatchOptions, PatchRecipe, PatchReport};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Parsed patcher flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchArgs {
    /// Overrides the configured target file
    pub file: Option<PathBuf>,
    /// Optional TOML config
    pub config: Option<PathBuf>,
    /// Report without writing
    pub dry_run: bool,
    /// Fail when a step's anchor is missing
    pub strict: bool,
    /// Print the report as JSON
    pub json: bool,
}

impl PatchArgs {
    /// Extract from matches produced by [`command`]
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            file: matches.get_one::<PathBuf>("file").cloned(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            dry_run: matches.get_flag("dry-run"),
            strict: matches.get_flag("strict"),
            json: matches.get_flag("json"),
        }
    }
}

/// Build the argument parser for a patcher binary
///
/// Every flag is optional; the bare invocation patches the default target.
#[must_use]
pub fn command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(crate::VERSION)
        .about(about)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Source file to patch [default: components/PokerBattleTable.tsx]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report what would change without writing"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Exit with an error if any anchor is missing"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output the patch report as JSON"),
        )
}

/// Run `recipe` with `args`, writing the user-facing output to `out`
///
/// # Errors
/// Config, read or write failures, and strict-mode refusals.
pub fn execute(
    recipe: &PatchRecipe,
    args: &PatchArgs,
    out: &mut impl Write,
) -> anyhow::Result<PatchReport> {
    let config = FixupConfig::load(args.config.as_deref())?;
    let mut patch = config.patch;
    if let Some(file) = &args.file {
        patch.target.clone_from(file);
    }

    let options = PatchOptions {
        dry_run: args.dry_run,
        strict: args.strict || patch.strict,
    };
    let report = PatchLayer::from_config(&patch)
        .run(recipe, &patch.target, options)
        .with_context(|| format!("{} failed on {}", recipe.name(), patch.target.display()))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_summary(recipe, &report, out)?;
    }
    Ok(report)
}

/// Success line followed by one line per step
///
/// # Errors
/// Only if `out` fails.
pub fn write_summary(
    recipe: &PatchRecipe,
    report: &PatchReport,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "{}", recipe.success_message())?;
    for step in &report.steps {
        writeln!(out, "  {step}")?;
    }
    if !report.written {
        writeln!(out, "  (dry run, {} not written)", report.target.display())?;
    }
    Ok(())
}

/// Entry point shared by the patcher binaries
#[must_use]
pub fn main(recipe: &PatchRecipe, name: &'static str, about: &'static str) -> ExitCode {
    logging::init();
    let matches = command(name, about).get_matches();
    let args = PatchArgs::from_matches(&matches);

    let mut stdout = std::io::stdout().lock();
    match execute(recipe, &args, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
