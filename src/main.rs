use std::process::ExitCode;

fn main() -> ExitCode {
    openaptx_version::cli::run()
}
