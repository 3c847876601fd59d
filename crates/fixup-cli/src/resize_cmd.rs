//! Screenshot resizer front end
//!
//! The resizer reports failure in its output but always exits 0; the
//! messages are in Portuguese, as the store listing team reads them.

use crate::config::FixupConfig;
use crate::logging;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fixup_image::{resize_screenshot, ResizeError, ResizeReport, ResizeSpec};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const BANNER: &str = "Farcaster Screenshot Resizer";
const RULE_WIDTH: usize = 50;

/// Build the argument parser for `resize-screenshot`
#[must_use]
pub fn command() -> Command {
    Command::new("resize-screenshot")
        .version(crate::VERSION)
        .about("Resize the store screenshot to 1200x800, keeping a backup")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Screenshot to resize in place [default: public/screenshot.jpg]"),
        )
        .arg(
            Arg::new("backup")
                .long("backup")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Where to keep the original-size copy"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Output the resize report as JSON on success"),
        )
}

/// Merge flags over the config's `[screenshot]` section
///
/// # Errors
/// If the config file cannot be loaded.
pub fn spec_from_matches(matches: &ArgMatches) -> anyhow::Result<ResizeSpec> {
    let config = FixupConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let mut spec = config.screenshot;
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        spec = spec.with_input(input);
    }
    if let Some(backup) = matches.get_one::<PathBuf>("backup") {
        spec = spec.with_backup(backup);
    }
    Ok(spec)
}

/// Resize and narrate; returns whether the resize succeeded
///
/// # Errors
/// Only if `out` fails.
pub fn execute(spec: &ResizeSpec, json: bool, out: &mut impl Write) -> io::Result<bool> {
    if !json {
        writeln!(out, "{BANNER}")?;
        writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(out, "Redimensionando {}...", spec.input.display())?;
    }

    match resize_screenshot(spec) {
        Ok(report) if json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(true)
        }
        Ok(report) => {
            write_success(&report, out)?;
            Ok(true)
        }
        Err(e) => {
            tracing::error!(error = %e, "resize failed");
            write_failure(&e, out)?;
            Ok(false)
        }
    }
}

fn write_success(report: &ResizeReport, out: &mut impl Write) -> io::Result<()> {
    let (w, h) = report.original;
    let (nw, nh) = report.resized;
    writeln!(out, "   Dimensoes originais: {w}x{h}")?;
    writeln!(out, "   Aspect ratio original: {:.2}:1", report.original_aspect())?;
    writeln!(out, "OK - Backup salvo em: {}", report.backup.display())?;
    writeln!(out, "OK - Imagem redimensionada!")?;
    writeln!(out, "   Novas dimensoes: {nw}x{nh}")?;
    writeln!(out, "   Aspect ratio: {}", report.resized_aspect_label())?;
    writeln!(out, "   Tamanho do arquivo: {:.1} KB", report.output_kib())?;
    writeln!(out)?;
    writeln!(out, "Proximos passos:")?;
    writeln!(out, "   1. git add {}", report.output.display())?;
    writeln!(
        out,
        "   2. git commit -m 'fix: resize screenshot to {} aspect ratio'",
        report.resized_ratio()
    )?;
    writeln!(out, "   3. git push")?;
    writeln!(out)?;
    writeln!(out, "✨ Sucesso! A imagem está pronta para o Farcaster!")
}

fn write_failure(err: &ResizeError, out: &mut impl Write) -> io::Result<()> {
    match err {
        ResizeError::InputMissing { path } => {
            writeln!(out, "ERRO: {} nao encontrado!", path.display())?;
        }
        other => writeln!(out, "ERRO ao redimensionar: {other}")?,
    }
    writeln!(out)?;
    writeln!(out, "💡 Consulte RESIZE-IMAGE-INSTRUCTIONS.md para alternativas")
}

/// Entry point for the `resize-screenshot` binary
///
/// Exits 0 whether or not the resize worked; only an unreadable config
/// file exits 1.
#[must_use]
pub fn main() -> ExitCode {
    logging::init();
    let matches = command().get_matches();
    let spec = match spec_from_matches(&matches) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = execute(&spec, matches.get_flag("json"), &mut stdout) {
        tracing::warn!(error = %e, "could not write to stdout");
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_default_paths() {
        let matches = command().try_get_matches_from(["resize-screenshot"]).unwrap();
        assert_eq!(spec_from_matches(&matches).unwrap(), ResizeSpec::default());
    }

    #[test]
    fn input_flag_moves_output_and_backup() {
        let matches = command()
            .try_get_matches_from(["resize-screenshot", "--input", "art/shot.jpg"])
            .unwrap();
        let spec = spec_from_matches(&matches).unwrap();
        assert_eq!(spec.input, Path::new("art/shot.jpg"));
        assert_eq!(spec.output, Path::new("art/shot.jpg"));
        assert_eq!(spec.backup, Path::new("art/shot-backup.jpg"));
    }

    #[test]
    fn explicit_backup_wins() {
        let matches = command()
            .try_get_matches_from(["resize-screenshot", "-i", "a.jpg", "--backup", "keep/a.jpg"])
            .unwrap();
        let spec = spec_from_matches(&matches).unwrap();
        assert_eq!(spec.backup, Path::new("keep/a.jpg"));
    }

    #[test]
    fn missing_input_message() {
        let spec = ResizeSpec::new().with_input("/nonexistent/screenshot.jpg");
        let mut out = Vec::new();
        assert!(!execute(&spec, false, &mut out).unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Farcaster Screenshot Resizer\n"));
        assert!(text.contains("ERRO: /nonexistent/screenshot.jpg nao encontrado!"));
        assert!(text.contains("RESIZE-IMAGE-INSTRUCTIONS.md"));
    }
}
