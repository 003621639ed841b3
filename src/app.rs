//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the store from the data
//! file (or generated sample data), and dispatches the requested command.

use anyhow::Result;
use folder_tree::cli::{Args, Command, OutputFormat};
use folder_tree::config::{self, Config};
use folder_tree::data::{self, load_folders, save_folders};
use folder_tree::output as out;
use folder_tree::{Folder, HierarchyError, HierarchyStore, default_config_path, sample};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        return print_config_location();
    }

    let mut cfg = config::load_config()?;
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json_logs)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    debug!("Starting folder_tree: {:?}", args);

    let Some(command) = args.command.clone() else {
        out::print_info("No command given; try `folder_tree --help`.");
        return Ok(());
    };

    match command {
        Command::InitConfig => init_config(),
        Command::Generate { out: target, save } => generate(&cfg, target.as_deref(), save, args.format),
        Command::Orgs => {
            let store = open_store(&cfg)?;
            for org in store.organizations() {
                out::print_user(&org.to_string());
            }
            Ok(())
        }
        Command::List { org } => {
            let store = open_store(&cfg)?;
            let org = org.unwrap_or(cfg.org_id);
            emit(&store.list_by_org(&org), args.format)
        }
        Command::Children { name, org } => {
            let store = open_store(&cfg)?;
            let org = org.unwrap_or(cfg.org_id);
            let found = store
                .list_descendants(&org, &name)
                .map_err(|e| report(e, "Listing descendants failed"))?;
            emit(&found, args.format)
        }
        Command::Move {
            source,
            destination,
            save,
        } => {
            let mut store = open_store(&cfg)?;
            let moved = store
                .move_folder(&source, &destination)
                .map_err(|e| report(e, "Move failed"))?;
            emit(moved, args.format)?;
            if let Some(moved) = store.find(&source) {
                out::print_success(&format!("Moved {} -> {}", moved.name, moved.paths));
            }
            if save {
                persist(&cfg, store.folders())?;
            }
            Ok(())
        }
    }
}

fn print_config_location() -> Result<()> {
    if let Some(explicit) = std::env::var_os(config::CONFIG_ENV) {
        out::print_info(&format!(
            "Using {} (explicit):\n  {}",
            config::CONFIG_ENV,
            explicit.to_string_lossy()
        ));
        return Ok(());
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default folder_tree config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run `folder_tree init-config` to create one.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
    Ok(())
}

fn init_config() -> Result<()> {
    let path = default_config_path()?;
    config::create_template_config(&path)?;
    out::print_success(&format!("A template folder_tree config was written to: {}", path.display()));
    Ok(())
}

/// Where the collection is written: the configured data file, else the default data path.
fn data_target(cfg: &Config) -> Result<PathBuf> {
    match &cfg.data_file {
        Some(path) => Ok(path.clone()),
        None => data::default_data_path(),
    }
}

/// Build the store from the configured data file, the default data file if one
/// exists, or seeded sample data.
fn open_store(cfg: &Config) -> Result<HierarchyStore> {
    let source = match &cfg.data_file {
        Some(path) => Some(path.clone()),
        None => data::default_data_path().ok().filter(|p| p.is_file()),
    };
    let folders = match source {
        Some(path) => load_folders(&path)?,
        None => {
            debug!(seed = cfg.seed, "No data file found; generating sample data");
            sample::generate_seeded(cfg.seed)
        }
    };
    info!(count = folders.len(), "Loaded folder collection");
    Ok(HierarchyStore::new(folders))
}

fn persist(cfg: &Config, folders: &[Folder]) -> Result<()> {
    let path = data_target(cfg)?;
    save_folders(&path, folders)?;
    out::print_success(&format!("Saved {} folders to {}", folders.len(), path.display()));
    Ok(())
}

fn generate(cfg: &Config, target: Option<&Path>, save: bool, format: OutputFormat) -> Result<()> {
    let folders = sample::generate_seeded(cfg.seed);
    let path = match target {
        Some(path) => path.to_path_buf(),
        None if save => data_target(cfg)?,
        None => return emit(&folders, format),
    };
    save_folders(&path, &folders)?;
    out::print_success(&format!("Wrote {} folders to {}", folders.len(), path.display()));
    Ok(())
}

fn emit(folders: &[Folder], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let bytes = data::to_pretty_json(folders)?;
            out::print_user(&String::from_utf8_lossy(&bytes));
        }
        OutputFormat::Text => print!("{}", data::render_text(folders)),
    }
    Ok(())
}

/// Log a store error with structured fields, then hand it back for `?`.
fn report(e: HierarchyError, msg: &'static str) -> anyhow::Error {
    let code = e.code();
    match &e {
        HierarchyError::NotFound { role, name } => {
            error!(code, kind = e.kind(), role = %role, name = %name, "{msg}")
        }
        HierarchyError::InvalidOperation(rule) => {
            error!(code, kind = e.kind(), rule = %rule, "{msg}")
        }
    }
    anyhow::Error::new(e)
}
