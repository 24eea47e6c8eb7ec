// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::infra::source::{DEFAULT_JOB, DEFAULT_WORKFLOW, MatrixSource};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // clap also accepts the `--lang=VALUE` spelling.
    if let Some(lang) = args.iter().find_map(|arg| arg.strip_prefix("--lang=")) {
        return lang.to_string();
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("matrix-jobs")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(with_source_args(
            Command::new("names")
                .about(t!("cmd_names_about", locale = locale).to_string())
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .help(t!("arg_prefix", locale = locale).to_string())
                        .value_name("PREFIX")
                        .default_value(crate::core::render::DEFAULT_PREFIX)
                        .action(ArgAction::Set),
                ),
            locale,
        ))
        .subcommand(with_source_args(
            Command::new("expand")
                .about(t!("cmd_expand_about", locale = locale).to_string())
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help(t!("arg_pretty", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
            locale,
        ))
}

/// Adds the matrix-acquisition arguments shared by every subcommand.
fn with_source_args(command: Command, locale: &str) -> Command {
    command
        .arg(
            Arg::new("workflow")
                .short('w')
                .long("workflow")
                .help(t!("arg_workflow", locale = locale).to_string())
                .value_name("WORKFLOW")
                .default_value(DEFAULT_WORKFLOW)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("job")
                .short('j')
                .long("job")
                .help(t!("arg_job", locale = locale).to_string())
                .value_name("JOB")
                .default_value(DEFAULT_JOB)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("from-json")
                .long("from-json")
                .help(t!("arg_from_json", locale = locale).to_string())
                .value_name("PATH")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("extract-cmd")
                .long("extract-cmd")
                .help(t!("arg_extract_cmd", locale = locale).to_string())
                .value_name("COMMAND")
                .conflicts_with("from-json")
                .action(ArgAction::Set),
        )
}

/// Builds the `MatrixSource` a subcommand's arguments describe.
/// `--from-json` takes precedence over the workflow extraction path;
/// `-` means standard input.
fn source_from_matches(matches: &ArgMatches) -> MatrixSource {
    if let Some(raw) = matches.get_one::<String>("from-json") {
        if raw == "-" {
            MatrixSource::Stdin
        } else {
            MatrixSource::JsonFile(expand_path(raw))
        }
    } else {
        let workflow = matches
            .get_one::<String>("workflow")
            .unwrap() // Has default
            .clone();
        let job = matches
            .get_one::<String>("job")
            .unwrap() // Has default
            .clone();
        MatrixSource::Workflow {
            path: expand_path(&workflow),
            job,
            extract_cmd: matches.get_one::<String>("extract-cmd").cloned(),
        }
    }
}

/// Expands `~` in user-supplied paths.
fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("names", sub_matches)) => {
            let source = source_from_matches(sub_matches);
            let prefix = sub_matches
                .get_one::<String>("prefix")
                .unwrap() // Has default
                .clone();
            commands::names::execute(source, prefix, &language).await?;
        }
        Some(("expand", sub_matches)) => {
            let source = source_from_matches(sub_matches);
            let pretty = sub_matches.get_flag("pretty");
            commands::expand::execute(source, pretty, &language).await?;
        }
        _ => {
            // Unreachable: a subcommand is required, so clap has already
            // exited with help output.
        }
    }
    Ok(())
}
