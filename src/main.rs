use std::process::ExitCode;

use folder_tree::HierarchyError;
use folder_tree::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = folder_tree::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            // Store errors get a distinct status so scripts can tell them from I/O failures.
            if e.downcast_ref::<HierarchyError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
