use clap::Parser;
use send_bundle::cli::Cli;

fn main() -> std::process::ExitCode {
    send_bundle::run(Cli::parse())
}
