pub mod input;
pub mod output;

pub use input::{load_scenario_variables, load_snapshot};
pub use output::{create_writer, OutputFormat, OutputWriter};
