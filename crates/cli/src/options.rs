use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    /// One JSON object per line
    Jsonl,
    Yaml,
}

/// How `count` computes its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Count over digit positions (fast for any range width)
    #[default]
    #[value(name = "dp", alias = "digit-dp")]
    DigitDp,
    /// Visit every number in the range
    #[value(name = "scan", alias = "exhaustive")]
    Scan,
}
