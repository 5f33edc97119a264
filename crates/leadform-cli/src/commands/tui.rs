use anyhow::{anyhow, Result};
use clap::Args;
use leadform_store::paths;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Start with the visit date empty instead of today
    #[arg(long)]
    pub no_prefill: bool,
}

pub fn launch(
    catalog_path: Option<PathBuf>,
    ledger_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    args: TuiArgs,
    verbose: bool,
) -> Result<()> {
    let catalog_path = match catalog_path {
        Some(path) => Some(paths::resolve_catalog_path(Some(path))?),
        None => None,
    };
    let ledger_path = match ledger_path {
        Some(path) => Some(paths::resolve_ledger_path(Some(path))?),
        None => None,
    };
    if verbose {
        if let Some(path) = &catalog_path {
            eprintln!("catalog: {}", path.display());
        }
        if let Some(path) = &ledger_path {
            eprintln!("ledger: {}", path.display());
        }
    }
    let mut command = build_command(
        catalog_path.as_deref(),
        ledger_path.as_deref(),
        config_path,
        args.no_prefill,
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        use anyhow::Context as _;
        let status = command.status().with_context(|| "launch leadform-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(
    catalog_path: Option<&Path>,
    ledger_path: Option<&Path>,
    config_path: Option<PathBuf>,
    no_prefill: bool,
) -> Command {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = catalog_path {
        command.arg("--catalog").arg(path);
    }
    if let Some(path) = ledger_path {
        command.arg("--ledger").arg(path);
    }
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if no_prefill {
        command.arg("--no-prefill");
    }
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("leadform-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "leadform-tui binary not found; build it with `cargo build -p leadform-tui` or install the package"
        );
    }
    anyhow!("launch leadform-tui failed: {}", err)
}
