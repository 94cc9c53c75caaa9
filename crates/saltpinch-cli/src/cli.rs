//! Command line definition
//!
//! Mirrors the argument vector a Synthesis-style runner passes to a patcher.
//! Every long option also accepts its PascalCase spelling.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use saltpinch_patcher::{CheckRequest, RunRequest};
use std::path::PathBuf;

/// Supported game releases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum GameRelease {
    #[default]
    #[value(name = "SkyrimLE")]
    SkyrimLe,
    #[value(name = "SkyrimSE")]
    SkyrimSe,
    #[value(name = "SkyrimVR")]
    SkyrimVr,
}

/// Options shared by both subcommands
#[derive(Debug, Clone)]
pub(crate) struct CommonArgs {
    pub(crate) data_folder: PathBuf,
    pub(crate) load_order_path: PathBuf,
    pub(crate) game_release: GameRelease,
    pub(crate) extra_data_folder: Option<PathBuf>,
}

/// Parsed invocation
#[derive(Debug, Clone)]
pub(crate) enum Invocation {
    RunPatcher {
        common: CommonArgs,
        output_path: PathBuf,
        source_path: Option<PathBuf>,
    },
    CheckRunnability {
        common: CommonArgs,
    },
}

impl Invocation {
    pub(crate) fn common(&self) -> &CommonArgs {
        match self {
            Self::RunPatcher { common, .. } | Self::CheckRunnability { common } => common,
        }
    }
}

impl CommonArgs {
    pub(crate) fn check_request(&self) -> CheckRequest {
        CheckRequest {
            data_folder: self.data_folder.clone(),
            load_order_path: self.load_order_path.clone(),
        }
    }

    pub(crate) fn run_request(&self, output_path: PathBuf, source_path: Option<PathBuf>) -> RunRequest {
        RunRequest {
            data_folder: self.data_folder.clone(),
            load_order_path: self.load_order_path.clone(),
            output_path,
            source_path,
        }
    }
}

fn path_arg(id: &'static str, long: &'static str, alias: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .alias(alias)
        .value_parser(value_parser!(PathBuf))
}

fn common_args(command: Command) -> Command {
    command
        .arg(
            path_arg("data-folder-path", "data-folder-path", "DataFolderPath")
                .required(true)
                .help("Folder holding the plugin files"),
        )
        .arg(
            path_arg("load-order-file-path", "load-order-file-path", "LoadOrderFilePath")
                .required(true)
                .help("plugins.txt style load order file"),
        )
        .arg(
            Arg::new("game-release")
                .long("game-release")
                .alias("GameRelease")
                .value_parser(value_parser!(GameRelease))
                .ignore_case(true)
                .help("Game release being patched"),
        )
        .arg(
            path_arg("extra-data-folder", "extra-data-folder", "ExtraDataFolder")
                .help("Folder searched for settings.toml"),
        )
        .arg(
            Arg::new("internal-data-folder")
                .long("internal-data-folder")
                .alias("InternalDataFolder")
                .action(ArgAction::Set)
                .hide(true),
        )
}

/// Build the command definition
pub(crate) fn command() -> Command {
    Command::new("saltpinch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Redirects Salt Pile in food recipes to the Salt Pinch item")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            common_args(
                Command::new("run-patcher")
                    .alias("RunPatcher")
                    .about("Build the patch and write it to the output path"),
            )
            .arg(
                path_arg("output-path", "output-path", "OutputPath")
                    .required(true)
                    .help("Patch file to write"),
            )
            .arg(
                path_arg("source-path", "source-path", "SourcePath")
                    .help("Previous patch to build on"),
            ),
        )
        .subcommand(common_args(
            Command::new("check-runnability")
                .alias("CheckRunnability")
                .about("Check the required plugin and item are present"),
        ))
}

fn common_from(matches: &ArgMatches) -> CommonArgs {
    CommonArgs {
        data_folder: required_path(matches, "data-folder-path"),
        load_order_path: required_path(matches, "load-order-file-path"),
        game_release: matches
            .get_one::<GameRelease>("game-release")
            .copied()
            .unwrap_or_default(),
        extra_data_folder: matches.get_one::<PathBuf>("extra-data-folder").cloned(),
    }
}

fn required_path(matches: &ArgMatches, id: &str) -> PathBuf {
    matches.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

/// Parse an argument vector
///
/// # Errors
/// Returns the clap error for unknown or missing arguments
pub(crate) fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    let invocation = match matches.subcommand() {
        Some(("run-patcher", sub)) => Invocation::RunPatcher {
            common: common_from(sub),
            output_path: required_path(sub, "output-path"),
            source_path: sub.get_one::<PathBuf>("source-path").cloned(),
        },
        Some(("check-runnability", sub)) => Invocation::CheckRunnability {
            common: common_from(sub),
        },
        _ => {
            return Err(command().error(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required",
            ))
        }
    };
    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_kebab_case_run() {
        let invocation = parse([
            "saltpinch",
            "run-patcher",
            "--data-folder-path",
            "Data",
            "--load-order-file-path",
            "plugins.txt",
            "--output-path",
            "Data/Patch.esp",
            "--game-release",
            "SkyrimSE",
        ])
        .unwrap();

        match invocation {
            Invocation::RunPatcher {
                common,
                output_path,
                source_path,
            } => {
                assert_eq!(common.data_folder, PathBuf::from("Data"));
                assert_eq!(common.game_release, GameRelease::SkyrimSe);
                assert_eq!(output_path, PathBuf::from("Data/Patch.esp"));
                assert!(source_path.is_none());
            }
            Invocation::CheckRunnability { .. } => panic!("expected run-patcher"),
        }
    }

    #[test]
    fn parses_pascal_case_aliases() {
        let invocation = parse([
            "saltpinch",
            "RunPatcher",
            "--DataFolderPath",
            "Data",
            "--LoadOrderFilePath",
            "plugins.txt",
            "--OutputPath",
            "out.esp",
            "--SourcePath",
            "prev.esp",
            "--ExtraDataFolder",
            "extra",
            "--InternalDataFolder",
            "internal",
        ])
        .unwrap();

        let common = invocation.common();
        assert_eq!(common.game_release, GameRelease::SkyrimLe);
        assert_eq!(common.extra_data_folder, Some(PathBuf::from("extra")));
        match invocation {
            Invocation::RunPatcher { source_path, .. } => {
                assert_eq!(source_path, Some(PathBuf::from("prev.esp")));
            }
            Invocation::CheckRunnability { .. } => panic!("expected run-patcher"),
        }
    }

    #[test]
    fn check_runnability_needs_no_output() {
        let invocation = parse([
            "saltpinch",
            "check-runnability",
            "--data-folder-path",
            "Data",
            "--load-order-file-path",
            "plugins.txt",
        ])
        .unwrap();
        assert!(matches!(invocation, Invocation::CheckRunnability { .. }));
    }

    #[test]
    fn missing_required_argument_is_rejected() {
        assert!(parse(["saltpinch", "run-patcher", "--data-folder-path", "Data"]).is_err());
        assert!(parse(["saltpinch", "check-runnability", "--game-release", "Oblivion"]).is_err());
    }
}
