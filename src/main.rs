use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use wordle_hinter::cli::{Cli, parse_cli, read_setup};
use wordle_hinter::{
    ConsoleDiagnostics, Diagnostics, HttpSource, LogDiagnostics, WordStoreBuilder, hint_loop,
    logging, print_loaded, run_patterns,
};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout();

    let setup = match read_setup(&cli, &mut reader, &mut out) {
        Ok(setup) => setup,
        Err(e) => {
            eprintln!("Failed to read setup: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("setup: {setup:?}");

    let builder = WordStoreBuilder::new(setup.word_length)
        .source_locator(&setup.dictionary_path)
        .fallback_source(HttpSource::new(&cli.url).with_timeout(cli.timeout()));

    if cli.quiet {
        run(builder.diagnostics(LogDiagnostics), &cli, reader, &mut out)
    } else {
        run(builder.diagnostics(ConsoleDiagnostics), &cli, reader, &mut out)
    }
}

fn run<D: Diagnostics, R: BufRead, W: Write>(
    builder: WordStoreBuilder<D>,
    cli: &Cli,
    reader: R,
    out: &mut W,
) -> ExitCode {
    let store = match builder.populate() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = print_loaded(&store, cli.list, out) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let result = if cli.patterns.is_empty() {
        hint_loop(&store, reader, out).map(|()| 0)
    } else {
        run_patterns(&store, &cli.patterns, out)
    };

    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
