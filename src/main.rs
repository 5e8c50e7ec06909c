use clap::Parser;

use tokmatch::{rank_documents, EditWeights};

mod cli;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let weights = match EditWeights::new(
        cli.sub_weight,
        cli.ins_weight,
        cli.del_weight,
        cli.trans_weight,
    ) {
        Ok(weights) => weights,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let matches = rank_documents(&cli.query, &cli.documents, cli.min_distance, &weights);

    if cli.json {
        match serde_json::to_string_pretty(&matches) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize matches: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        for m in &matches {
            println!("{}", m);
        }
    }
}
