/*!
Command-line argument parsing for the `cnftools` binary.
*/

use clap::Parser;

/// A toolbox for analysing CNF formulas.
#[derive(Parser, Debug)]
#[command(name = "cnftools", about = "Analyse propositional formulas in conjunctive normal form")]
pub struct Cli {
    /// Which tool to run: gbdhash, normalize, isp, extract, gates, solve.
    ///
    /// An unrecognised name falls back to `gbdhash`.
    pub tool: String,

    /// Path to the input DIMACS CNF file.
    pub input: std::path::PathBuf,

    /// Enables structural pattern classification in the gate analyzer.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub patterns: bool,

    /// Enables the semantic oracle fallback in the gate analyzer.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub semantic: bool,

    /// The maximum number of root-estimation passes. Clamped to at least 1.
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}
