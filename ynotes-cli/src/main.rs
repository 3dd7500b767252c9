fn main() -> std::process::ExitCode {
    ynotes_cli::run()
}
