use std::process::ExitCode;

fn main() -> ExitCode {
    plugin_version_sync::app::startup::startup()
}
