//! Subcommand handlers.

use clap::Args;
use edurank_common::{DegeneratePolicy, EduRankConfig, OutputFormat, Result};

use crate::pipeline::{self, Input};
use crate::render::{render, render_input};

/// Output and scoring overrides shared by `rank` and `interactive`.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output format: table, csv or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Show only the best N technologies
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Positional weights, comma separated, in schema criterion order
    #[arg(short, long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    /// Rescale weights to sum to 1.0
    #[arg(long)]
    pub normalise_weights: bool,

    /// Let constant criterion columns contribute 0 instead of NaN
    #[arg(long)]
    pub zero_degenerate: bool,

    /// Print the parsed input table before the ranking
    #[arg(long)]
    pub show_input: bool,
}

impl RenderArgs {
    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, mut config: EduRankConfig) -> Result<EduRankConfig> {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(n) = self.top {
            config.output.top_n = Some(n);
        }
        if let Some(weights) = &self.weights {
            config.scoring.weights = weights.clone();
            config.scoring.weights_by_name = None;
        }
        if self.normalise_weights {
            config.scoring.normalise_weights = true;
        }
        if self.zero_degenerate {
            config.scoring.degenerate = DegeneratePolicy::ZeroContribution;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    /// CSV/TSV/TXT file, or `-` for stdin
    pub input: String,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Rank one input and render it, optionally preceded by the parsed input.
pub fn rank_to_string(input: &Input, config: &EduRankConfig, show_input: bool) -> Result<String> {
    let ranked = pipeline::run(input, config)?;
    let mut out = String::new();
    if show_input && config.output.format == OutputFormat::Table {
        out.push_str("Input data\n\n");
        out.push_str(&render_input(ranked.table()));
        out.push_str("\nRanking based on MOORA\n\n");
    }
    out.push_str(&render(&ranked, &config.output)?);
    Ok(out)
}

pub fn rank(args: &RankArgs, config: EduRankConfig) -> Result<()> {
    let config = args.render.apply(config)?;
    let input = Input::parse(&args.input);
    print!("{}", rank_to_string(&input, &config, args.render.show_input)?);
    Ok(())
}

pub fn validate(input: &str, config: &EduRankConfig) -> Result<()> {
    let input = Input::parse(input);
    let table = pipeline::load(&input, config)?;
    println!(
        "OK: {} has {} rows and every required column ({})",
        input,
        table.n_rows(),
        config.schema.required_columns().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

pub fn schema(config: &EduRankConfig, dump: bool) -> Result<()> {
    if dump {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    let weights = pipeline::weights(config)?;
    println!("Identifier column: {}", config.schema.identifier);
    println!("Criteria (weight applied by position):");
    for (i, (name, w)) in config.schema.criteria.iter().zip(weights.as_slice()).enumerate() {
        println!("  {}. {name:<20} {w}", i + 1);
    }
    println!("Constant columns: {:?}", config.scoring.degenerate);
    Ok(())
}

pub fn interactive(args: &RenderArgs, config: EduRankConfig) -> Result<()> {
    let config = args.apply(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    crate::interactive::run(stdin.lock(), stdout.lock(), &config, args.show_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use edurank_test_utils::{temp_file, SAMPLE_CSV};

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        render: RenderArgs,
    }

    #[test]
    fn test_overrides_applied() {
        let cli = TestCli::parse_from([
            "edurank", "--format", "json", "--top", "2", "--weights", "0.5,0.1,0.1,0.1,0.2",
            "--zero-degenerate",
        ]);
        let config = cli.render.apply(EduRankConfig::default()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.top_n, Some(2));
        assert_eq!(config.scoring.weights, vec![0.5, 0.1, 0.1, 0.1, 0.2]);
        assert_eq!(config.scoring.degenerate, DegeneratePolicy::ZeroContribution);
    }

    #[test]
    fn test_wrong_weight_count_is_config_error() {
        let cli = TestCli::parse_from(["edurank", "--weights", "0.5,0.5"]);
        let err = cli.render.apply(EduRankConfig::default()).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rank_with_input_preview() {
        let file = temp_file(SAMPLE_CSV, "csv");
        let input = Input::Path(file.path().to_path_buf());
        let out = rank_to_string(&input, &EduRankConfig::default(), true).unwrap();
        assert!(out.starts_with("Input data\n"));
        assert!(out.contains("Ranking based on MOORA"));
        assert!(out.contains("Online Quiz Platform"));
    }
}
