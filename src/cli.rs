use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "savannah")]
#[command(about = "Geopolitical risk and intelligence analytics engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output: no colors or terminal decorations
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess entity risk and network influence from a snapshot file
    Analyze {
        /// Intelligence snapshot (JSON)
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N entities by risk
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Minimum risk level to display
        #[arg(long = "min-level", value_enum)]
        min_level: Option<RiskLevelArg>,

        /// Score entities serially instead of on the thread pool
        #[arg(long = "no-parallel")]
        no_parallel: bool,
    },

    /// Score a hypothetical scenario from named variables
    Scenario {
        /// Scenario variable as key=value; numbers are detected (repeatable)
        #[arg(short = 'V', long = "var")]
        variables: Vec<String>,

        /// JSON file of scenario variables (name -> number|string)
        #[arg(long = "variables-file")]
        variables_file: Option<PathBuf>,

        /// Planning horizon label carried into the results
        #[arg(long = "time-horizon", default_value = "12 months")]
        time_horizon: String,

        /// Scenario is backed by historical data
        #[arg(long = "historical-data")]
        historical_data: bool,

        /// Region the scenario applies to
        #[arg(long)]
        region: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Inspect the data-source catalog
    Sources {
        #[command(subcommand)]
        command: SourcesCommand,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SourcesCommand {
    /// List catalog sources, optionally filtered
    List {
        /// Keep only these source types
        #[arg(long, value_enum, value_delimiter = ',')]
        types: Option<Vec<SourceTypeArg>>,

        /// Keep only these categories
        #[arg(long, value_enum, value_delimiter = ',')]
        categories: Option<Vec<SourceCategoryArg>>,

        /// Keep sources covering any of these regions
        #[arg(long, value_delimiter = ',')]
        regions: Option<Vec<String>>,

        /// Keep sources covering any of these countries
        #[arg(long, value_delimiter = ',')]
        countries: Option<Vec<String>>,

        /// Minimum reliability (0-100)
        #[arg(long = "min-reliability")]
        min_reliability: Option<u8>,

        /// Keep sources updated within the last N days
        #[arg(long = "max-age-days")]
        max_age_days: Option<i64>,

        /// Case-insensitive search over name, description, and tags
        #[arg(long)]
        search: Option<String>,

        /// Keep sources carrying any of these tags
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Emit the filtered catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score the aggregate quality of a source selection
    Quality {
        /// Source ids to score; falls back to saved preferred sources
        ids: Vec<String>,

        /// Persist this selection as the preferred sources
        #[arg(long = "save-selection")]
        save_selection: bool,
    },

    /// Recommend sources for a region and analysis focus
    Recommend {
        /// Region to cover; falls back to the saved default region
        #[arg(long)]
        region: Option<String>,

        /// Analysis focus driving the type allow-list
        #[arg(long, value_enum, default_value = "comprehensive")]
        focus: AnalysisFocus,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum RiskLevelArg {
    Low,
    Medium,
    High,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AnalysisFocus {
    Security,
    Economic,
    Political,
    Geospatial,
    Comprehensive,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceTypeArg {
    News,
    Government,
    Intelligence,
    Social,
    Economic,
    Security,
    Satellite,
    Academic,
    Ngo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceCategoryArg {
    OpenSource,
    Commercial,
    Government,
    Internal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<RiskLevelArg> for crate::core::RiskLevel {
    fn from(level: RiskLevelArg) -> Self {
        match level {
            RiskLevelArg::Low => crate::core::RiskLevel::Low,
            RiskLevelArg::Medium => crate::core::RiskLevel::Medium,
            RiskLevelArg::High => crate::core::RiskLevel::High,
        }
    }
}

impl From<AnalysisFocus> for crate::catalog::AnalysisType {
    fn from(focus: AnalysisFocus) -> Self {
        match focus {
            AnalysisFocus::Security => crate::catalog::AnalysisType::Security,
            AnalysisFocus::Economic => crate::catalog::AnalysisType::Economic,
            AnalysisFocus::Political => crate::catalog::AnalysisType::Political,
            AnalysisFocus::Geospatial => crate::catalog::AnalysisType::Geospatial,
            AnalysisFocus::Comprehensive => crate::catalog::AnalysisType::Comprehensive,
        }
    }
}

impl From<SourceTypeArg> for crate::catalog::SourceType {
    fn from(t: SourceTypeArg) -> Self {
        use crate::catalog::SourceType;
        match t {
            SourceTypeArg::News => SourceType::News,
            SourceTypeArg::Government => SourceType::Government,
            SourceTypeArg::Intelligence => SourceType::Intelligence,
            SourceTypeArg::Social => SourceType::Social,
            SourceTypeArg::Economic => SourceType::Economic,
            SourceTypeArg::Security => SourceType::Security,
            SourceTypeArg::Satellite => SourceType::Satellite,
            SourceTypeArg::Academic => SourceType::Academic,
            SourceTypeArg::Ngo => SourceType::Ngo,
        }
    }
}

impl From<SourceCategoryArg> for crate::catalog::SourceCategory {
    fn from(c: SourceCategoryArg) -> Self {
        use crate::catalog::SourceCategory;
        match c {
            SourceCategoryArg::OpenSource => SourceCategory::OpenSource,
            SourceCategoryArg::Commercial => SourceCategory::Commercial,
            SourceCategoryArg::Government => SourceCategory::Government,
            SourceCategoryArg::Internal => SourceCategory::Internal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
