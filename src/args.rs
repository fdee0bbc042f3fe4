mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
    ArgAction,
};

use crate::io::CfgFormat;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Waveguide spiral delay-line generator
#[derive(Debug, Parser)]
#[command(name = "wgspiral")]
pub struct WgSpiralCli {
    #[clap(subcommand)]
    pub sub_command: Command,

    /// Increase diagnostic output (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Parser for the subcommands of the wgspiral binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "run")]
    /// Solve a spiral from a config file and save its waypoints
    Run(RunArgs),

    #[command(name = "example")]
    /// Print an example spiral config file
    Example(ExampleArgs),
}

/// Arguments for the run command. Compiled with clap.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the spiral config file (.yaml/.yml, .json or .toml)
    pub cfg_file: String,

    #[arg(short, long = "output")]
    /// Path of the output spiral file (.json), overrides the config
    pub output_path: Option<String>,

    #[arg(short, long)]
    /// Renderer to use, overrides the config
    pub renderer: Option<String>,
}

/// Arguments for the example command. Compiled with clap.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value_t = CfgFormat::Yaml)]
    /// Format of the printed config
    pub format: CfgFormat,
}

/// Parse the command line arguments, returning clap's error instead of exiting.
pub fn parse_cli_args<I, T>(args: I) -> ProcResult<WgSpiralCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(WgSpiralCli::try_parse_from(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_overrides() {
        let cli = parse_cli_args(["wgspiral", "-vv", "run", "spiral.yaml", "-o", "out.json", "--renderer", "manhattan"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.sub_command {
            Command::Run(run_args) => {
                assert_eq!(run_args.cfg_file, "spiral.yaml");
                assert_eq!(run_args.output_path.as_deref(), Some("out.json"));
                assert_eq!(run_args.renderer.as_deref(), Some("manhattan"));
            },
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn example_defaults_to_yaml() {
        let cli = parse_cli_args(["wgspiral", "example"]).unwrap();
        match cli.sub_command {
            Command::Example(example_args) => assert_eq!(example_args.format, CfgFormat::Yaml),
            other => panic!("expected example, got {:?}", other),
        }
    }

    #[test]
    fn unknown_format_is_a_clap_error() {
        assert!(matches!(
            parse_cli_args(["wgspiral", "example", "--format", "gds"]),
            Err(ArgError::ClapError(_))
        ));
    }
}
