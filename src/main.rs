use wgspiral::args::{self, Command};

fn main() {

    // 1. Parse commandline arguments
    let cli = match args::parse_cli_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(args::ArgError::ClapError(err)) => err.exit(),
        Err(err) => {
            eprintln!("CLI ERROR!\n{}", err);
            std::process::exit(2);
        },
    };
    wgspiral::init_logging(cli.verbose);

    // 2. Run the requested command
    let result = match cli.sub_command {
        Command::Example(example_args) => wgspiral::example_config(&example_args).map(|_| ()),
        Command::Run(run_args) => wgspiral::build_target(&run_args)
            .and_then(|target| wgspiral::run_process(&target))
            .map(|_| ()),
    };

    if let Err(err) = result {
        eprintln!("PROCESS ERROR!");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
