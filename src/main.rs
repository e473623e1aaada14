use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use navlink::config::Config;
use navlink::entities::TripRequest;
use navlink::error::Error;
use navlink::links;
use navlink::scheme::Encoding;

#[derive(Parser)]
#[command(name = "navlink", about = "Build ArcGIS Navigator deep links")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the navigator link for a JSON trip file
    Uri {
        file: PathBuf,
        /// Print the view intent as JSON instead of the bare link
        #[arg(long)]
        intent: bool,
        /// form or component, overrides NAVLINK_ENCODING
        #[arg(long)]
        encoding: Option<Encoding>,
    },
    /// Print an HTML page for a CSV list of links (columns: uri,title)
    Page { title: String, csv: PathBuf },
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli, Config::from_env) {
        tracing::error!(code = err.code, "{}", err.message);
        std::process::exit(exit_code(&err));
    }
}

// 2 for bad input from the user, 1 for everything else
fn exit_code(err: &Error) -> i32 {
    if err.is_caller_error() {
        2
    } else {
        1
    }
}

fn run<F>(cli: Cli, load_config: F) -> Result<(), Error>
where
    F: FnOnce() -> Result<Config, Error>,
{
    match cli.command {
        Command::Uri {
            file,
            intent,
            encoding,
        } => {
            let config = load_config()?;

            let mut request = TripRequest::from_json(&fs::read_to_string(&file)?)?;
            config.apply_callback(&mut request);

            let builder = request
                .into_builder()
                .set_encoding(encoding.unwrap_or(config.encoding));

            if intent {
                let intent = builder.try_build_intent()?;
                println!("{}", serde_json::to_string_pretty(&intent)?);
            } else {
                println!("{}", builder.try_build()?);
            }
        }
        Command::Page { title, csv } => {
            let links = links::read_links(fs::File::open(&csv)?)?;
            print!("{}", links::render_link_page(&title, &links));
        }
    }

    Ok(())
}

#[test]
fn exit_code_test() {
    use navlink::error::{invalid_input_error, io_error, missing_stop_error};

    assert_eq!(exit_code(&missing_stop_error()), 2);
    assert_eq!(exit_code(&invalid_input_error("bad")), 2);
    assert_eq!(
        exit_code(&io_error(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))),
        1
    );
}

#[test]
fn page_ignores_config_test() {
    use navlink::error::invalid_input_error;

    let csv = std::env::temp_dir().join(format!("navlink-page-{}.csv", std::process::id()));
    fs::write(&csv, "uri,title\narcgis-navigator://?stop=Portland,Portland\n").unwrap();

    let cli = Cli::parse_from(["navlink", "page", "Trips", csv.to_str().unwrap()]);
    let result = run(cli, || Err(invalid_input_error("unknown encoding \"rot13\"")));

    fs::remove_file(&csv).ok();
    assert!(result.is_ok());
}

#[test]
fn uri_reports_config_error_test() {
    use navlink::error::invalid_input_error;

    let cli = Cli::parse_from(["navlink", "uri", "trip.json"]);
    let err = run(cli, || Err(invalid_input_error("unknown encoding \"rot13\""))).unwrap_err();

    assert_eq!(err.code, 101);
}
