use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 fasta_stats version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   record count, length distribution and base composition of a FASTA file";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser, Debug)]
#[command(
    name = "fasta_stats",
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// the input FASTA file
    pub input_file: String,

    /// write the JSON report to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// emit the report on a single line rather than indented
    #[arg(long, action)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn single_positional() {
        let cli = Cli::try_parse_from(["fasta_stats", "reads.fa"]).unwrap();
        assert_eq!(cli.input_file, "reads.fa");
        assert!(cli.output.is_none());
        assert!(!cli.compact);
    }

    #[test]
    fn missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["fasta_stats"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["fasta_stats", "a.fa", "b.fa"]).is_err());
    }

    #[test]
    fn flags_do_not_count_as_positionals() {
        let cli =
            Cli::try_parse_from(["fasta_stats", "a.fa", "-o", "out.json", "--compact"]).unwrap();
        assert_eq!(cli.output.as_deref(), Some("out.json"));
        assert!(cli.compact);
    }
}
