mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, process, quote};
use libris_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(cfg.quiet);
    print::banner(&cfg);

    let result = match commands.command {
        Commands::Demo => {
            print::header("library loan walkthrough", cfg.quiet);
            demo::demo(&cfg)
        }
        Commands::Quote { days, policy } => {
            print::header("loan quote", cfg.quiet);
            quote::quote(days, policy, &cfg)
        }
        Commands::Process(args) => {
            print::header("processing loan", cfg.quiet);
            process::process(args, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
