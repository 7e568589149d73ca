//! sa-sections - list the groups defined in a hosts file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sa_cli::application::ports::GroupSource;
use sa_cli::infra::IniGroupStore;

/// Print every section (group) of an sa hosts file
#[derive(Parser)]
#[command(name = "sa-sections", version)]
struct Args {
    /// Hosts file to inspect (exactly one)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let [file] = args.files.as_slice() else {
        println!("[error] No file");
        return ExitCode::FAILURE;
    };

    let Ok(groups) = IniGroupStore::new(file).load() else {
        println!("[error] Could not load {}", file.display());
        return ExitCode::FAILURE;
    };

    for name in groups.names() {
        println!("Section: {name}");
    }
    ExitCode::SUCCESS
}
