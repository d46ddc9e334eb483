mod commands;
mod terminal;

use commands::{CommandLine, Commands, abc, abc_words, brackets, list, longest, search, zigzag};
use kata_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        no_color: commands.no_color,
    };

    logging::init(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::List => {
            print::header("exercises", cfg.quiet);
            list::list(&cfg);
            Ok(())
        }
        Commands::Longest { text } => {
            print::header("longest unique substring", cfg.quiet);
            longest::longest(&text, &cfg);
            Ok(())
        }
        Commands::Zigzag { text, rows, grid } => {
            print::header("zigzag conversion", cfg.quiet);
            zigzag::zigzag(&text, rows, grid, &cfg);
            Ok(())
        }
        Commands::Brackets { text } => {
            print::header("bracket validation", cfg.quiet);
            brackets::brackets(&text, &cfg);
            Ok(())
        }
        Commands::Search { nums, target } => {
            print::header("rotated array search", cfg.quiet);
            search::search(&nums, target, &cfg);
            Ok(())
        }
        Commands::Abc { phrases, ignore_case } => {
            print::header("abc strings", cfg.quiet);
            abc::abc(&phrases, ignore_case, &cfg);
            Ok(())
        }
        Commands::AbcWords { file } => {
            print::header("abc words", cfg.quiet);
            abc_words::abc_words(&file, &cfg)
        }
    }
}
