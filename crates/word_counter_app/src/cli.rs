use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use word_counter_engine::ReportFormat;

use crate::settings::SETTINGS_FILENAME;

pub(crate) const USAGE: &str = "Usage: word_counter [INPUT] [OUTPUT_DIR] [--format html|json] \
[--settings PATH] [--write-settings]\n\nINPUT may be `-` to read standard input. Missing \
INPUT or OUTPUT_DIR are prompted for.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliArgs {
    pub input: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub settings_path: PathBuf,
    pub write_settings: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: None,
            format: None,
            settings_path: PathBuf::from(SETTINGS_FILENAME),
            write_settings: false,
            help: false,
        }
    }
}

/// Parses arguments, excluding the program name.
pub(crate) fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--write-settings" => parsed.write_settings = true,
            "--format" => {
                let value = args.next().context("--format needs a value")?;
                parsed.format = Some(value.parse()?);
            }
            "--settings" => {
                let value = args.next().context("--settings needs a path")?;
                parsed.settings_path = PathBuf::from(value);
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    parsed.input = positional.next();
    parsed.output_dir = positional.next().map(PathBuf::from);
    if let Some(extra) = positional.next() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(parsed)
}

/// Writes `message` and reads one trimmed line of the answer.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
