mod cli;
mod logging;
mod settings;

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use counter_logging::{counter_error, counter_info, counter_warn};
use word_counter_engine::{build_report, ReportInput};

use cli::{parse_args, prompt, USAGE};
use settings::{load_settings, save_settings};

fn main() {
    if let Err(err) = run() {
        counter_error!("{:#}", err);
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let loaded = load_settings(&args.settings_path);
    let settings = loaded.settings;
    logging::initialize(settings.log_destination, settings.verbose);
    if let Some(problem) = &loaded.problem {
        counter_warn!("{}", problem);
    }
    if let Some(path) = &loaded.source {
        counter_info!("Loaded settings from {}", path.display());
    }

    let mut options = settings.report_options()?;
    if let Some(format) = args.format {
        options.format = format;
    }
    if args.write_settings {
        let mut effective = settings.clone();
        effective.format = options.format.to_string();
        save_settings(&args.settings_path, &effective)?;
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let input = match args.input {
        Some(input) => input,
        None => prompt(&mut stdin.lock(), &mut stdout, "Enter the file to be read: ")?,
    };
    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => PathBuf::from(prompt(
            &mut stdin.lock(),
            &mut stdout,
            "Enter the desired location of the index: ",
        )?),
    };
    if input.is_empty() {
        bail!("no input file given");
    }
    if output_dir.as_os_str().is_empty() {
        bail!("no output location given");
    }

    let report_input = if input == "-" {
        options.title.get_or_insert_with(|| "standard input".to_string());
        ReportInput::Reader {
            label: "<stdin>".to_string(),
            reader: Box::new(BufReader::new(io::stdin())),
        }
    } else {
        ReportInput::File(PathBuf::from(&input))
    };
    options.generated_utc = Some(chrono::Utc::now().to_rfc3339());

    let summary = build_report(report_input, &output_dir, &options)
        .with_context(|| format!("failed to build word report for {input}"))?;
    println!(
        "Counted {} words ({} distinct); report written to {}",
        summary.total_words,
        summary.distinct_words,
        summary.output_path.display()
    );
    Ok(())
}
