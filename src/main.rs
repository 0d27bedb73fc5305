use std::process::ExitCode;

use plugfs::PlugfsError;
use plugfs::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = plugfs::cli::parse();
    match app::run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            let code = e.downcast_ref::<PlugfsError>().map(PlugfsError::code).unwrap_or(2);
            ExitCode::from(code as u8)
        }
    }
}
