use std::process::ExitCode;

fn main() -> ExitCode {
    nora_cli::run()
}
