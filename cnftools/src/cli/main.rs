/*!
A simple CLI interface to the library.

# Use

```sh
cnftools <tool> file.cnf [--patterns=bool] [--semantic=bool] [--repeat N]
```

`tool` selects one of `gbdhash`, `normalize`, `isp`, `extract`, `gates`, `solve`; an unrecognised
name falls back to `gbdhash`.
*/

use clap::Parser;

use cnftools::{config::AnalyzerConfig, dispatch};

mod args;
use args::Cli;

fn main() {
    let args = Cli::parse();

    let dimacs = match std::fs::read(&args.input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("c could not read {:?}: {e}", args.input);
            std::process::exit(1);
        }
    };

    let tool = dispatch::Tool::parse(&args.tool);
    let config = AnalyzerConfig::new(args.patterns, args.semantic, args.repeat);

    match dispatch::run(tool, &dimacs, config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("c {e}");
            std::process::exit(1);
        }
    }
}
