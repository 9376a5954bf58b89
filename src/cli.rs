//! CLI argument parsing with clap.

use clap::Parser;

/// Generate randomized bingo cards from a newline-separated list of values.
#[derive(Parser, Debug)]
#[command(name = "cardgen", version, about)]
pub struct Cli {
    /// Path to a file containing values separated by newlines.
    #[arg(short, long)]
    pub input: String,

    /// Output file path, or directory when generating multiple cards.
    #[arg(short, long)]
    pub output: String,

    /// Number of cards to generate.
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Place a FREE space in the center cell (requires an odd board length).
    #[arg(long)]
    pub free: bool,

    /// Board length in cells per side [default: 5].
    #[arg(short, long)]
    pub length: Option<u32>,

    /// Target resolution of the resulting image(s) [default: 1024].
    #[arg(short, long, conflicts_with = "cell_size")]
    pub resolution: Option<u32>,

    /// Explicit cell size in pixels, instead of fitting a target resolution.
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Gridline stroke width in pixels [default: 5].
    #[arg(long)]
    pub outline: Option<u32>,

    /// Border around the board in pixels, all four sides [default: 20].
    #[arg(long)]
    pub border: Option<u32>,

    /// Font size for tile text [default: 20].
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Characters to try to fit on one line of tile text [default: 19].
    #[arg(short, long)]
    pub wrap: Option<usize>,

    /// Output format: jpeg, png [default: jpeg].
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to a TrueType font for tile text.
    #[arg(long)]
    pub font: Option<String>,

    /// Seed for reproducible card sampling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses() {
        let cli = Cli::parse_from(["cardgen", "-i", "pool.txt", "-o", "board.jpg"]);
        assert_eq!(cli.input, "pool.txt");
        assert_eq!(cli.output, "board.jpg");
        assert_eq!(cli.count, 1);
        assert!(!cli.free);
        assert!(cli.length.is_none());
    }

    #[test]
    fn resolution_conflicts_with_cell_size() {
        let result = Cli::try_parse_from([
            "cardgen", "-i", "p.txt", "-o", "b.jpg", "-r", "512", "--cell-size", "90",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["cardgen", "-o", "b.jpg"]).is_err());
    }
}
