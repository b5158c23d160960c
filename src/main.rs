use clap::Parser;
use rawget::client::HttpClient;
use rawget::logging;
use std::io;
use std::process::ExitCode;

/// Fetch a url with a single HTTP/1.1 GET and write the raw response to stdout.
#[derive(Debug, Parser)]
#[command(name = "rawget", version)]
#[command(about = "Fetch a url and print the raw HTTP response", long_about = None)]
struct Cli {
    /// Url of the form [http://|https://]HOST[:PORT][/PATH].
    url: String,
}

fn main() -> ExitCode {
    // Initialize logging as early as possible.
    logging::init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version also come back as errors.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    match HttpClient::new().get(&cli.url, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rawget: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
