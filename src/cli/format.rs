//! Format output dispatch helpers

/// Dispatch output by format.
///
/// The JSON branch is an expression returning `Result`; the human branch is
/// a block that prints and cannot fail.
///
/// ```rust,ignore
/// output_by_format!(ctx.format,
///     json => print_json(&report),
///     human => { println!("{} components", report.count); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
