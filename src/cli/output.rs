pub use graphkit_core::format::OutputFormat;
use clap::builder::{PossibleValuesParser, TypedValueParser};

/// Clap parser for `--format`: lists the accepted values in help and
/// errors, then defers to `OutputFormat::from_str`
pub fn format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(["human", "json"]).try_map(|value| value.parse::<OutputFormat>())
}
