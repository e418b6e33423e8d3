use crossterm::style::Stylize;
use katapayadi_core::config::resolve_table_path;
use katapayadi_core::persistence::save_tables;
use katapayadi_core::{DigitStatus, KatapayadiEngine, NumeralResult, TableSet};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "usage: katapayadi [--json] [--decode] [--tables <path>] [--dump-tables <path>] [phrase...]";

#[derive(Default)]
struct Options {
    json: bool,
    decode: bool,
    tables: Option<PathBuf>,
    dump_tables: Option<PathBuf>,
    phrases: Vec<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--decode" => options.decode = true,
            "--tables" => {
                let path = args.next().ok_or("--tables needs a path")?;
                options.tables = Some(PathBuf::from(path));
            }
            "--dump-tables" => {
                let path = args.next().ok_or("--dump-tables needs a path")?;
                options.dump_tables = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.to_string()),
            s if s.starts_with("--") => return Err(format!("unknown option {s}\n{USAGE}")),
            _ => options.phrases.push(arg),
        }
    }
    Ok(options)
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    if let Some(path) = &options.dump_tables {
        if let Err(e) = save_tables(&TableSet::builtin(), path) {
            eprintln!("[ERROR] Could not write tables: {e}");
            process::exit(1);
        }
        println!("Built-in tables written to '{}'", path.display());
        return Ok(());
    }

    let engine = match resolve_table_path(options.tables.as_deref()) {
        Some(path) => KatapayadiEngine::from_file_or_default(&path),
        None => KatapayadiEngine::new(),
    };

    let mut stdout = io::stdout();
    if options.phrases.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            run_phrase(&engine, &options, &line, &mut stdout)?;
        }
    } else {
        for phrase in &options.phrases {
            run_phrase(&engine, &options, phrase, &mut stdout)?;
        }
    }
    stdout.flush()
}

fn run_phrase(
    engine: &KatapayadiEngine,
    options: &Options,
    phrase: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    if options.decode {
        let numeral = engine.calculate(phrase.trim());
        if options.json {
            writeln!(out, "{}", serde_json::to_string(&numeral)?)?;
        } else {
            print_numeral(&numeral, out)?;
        }
        return Ok(());
    }

    let evaluation = engine.evaluate(phrase);
    if options.json {
        writeln!(out, "{}", serde_json::to_string(&evaluation)?)?;
        return Ok(());
    }

    writeln!(out, "\nInput: [{}]", phrase.trim())?;
    writeln!(
        out,
        "Transliteration -> {} ({})",
        evaluation.transliteration.symbolic.as_str().bold(),
        evaluation.transliteration.method
    )?;
    print_numeral(&evaluation.numeral, out)
}

fn print_numeral(numeral: &NumeralResult, out: &mut impl Write) -> io::Result<()> {
    if numeral.log.is_empty() {
        writeln!(out, "No digits found.")?;
    }
    for entry in &numeral.log {
        let value = entry.value.map_or_else(|| "-".to_string(), |v| v.to_string());
        let status = match entry.status {
            DigitStatus::Kept => entry.status.to_string().green(),
            DigitStatus::Warned => entry.status.to_string().yellow(),
            DigitStatus::Dropped => entry.status.to_string().red(),
        };
        writeln!(out, "  {:<6} {:>2}  {}", entry.text, value, status)?;
    }
    let digits: String = numeral.reversed.iter().map(u8::to_string).collect();
    writeln!(out, "Reversed: {}", if digits.is_empty() { "-" } else { digits.as_str() })?;
    writeln!(out, "Sum: {}  Rashi: {}", numeral.sum, numeral.rashi.to_string().cyan())
}
