// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pose_classifier::cli::args::{Cli, Commands};
use pose_classifier::cli::classify::{run_classify, run_rules};
use pose_classifier::cli::logging::set_verbose;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Classify(args) => {
            set_verbose(args.verbose && !args.json);
            run_classify(args);
        }
        Commands::Rules => run_rules(),
    }
}
