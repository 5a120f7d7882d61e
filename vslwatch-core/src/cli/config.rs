use crate::config::{Settings, load_file};
use anyhow::Result;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a settings file and exit
    Check {
        /// Path to the HCL settings file
        #[arg(default_value = "vslwatch.hcl")]
        path: PathBuf,
    },

    /// Print the settings file as it was understood
    Dump {
        #[arg(default_value = "vslwatch.hcl")]
        path: PathBuf,

        /// Output as JSON instead of HCL
        #[arg(long)]
        json: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => print!("{}", check(&path)?),
        ConfigCmd::Dump { path, json } => print!("{}", dump(&path, json)?),
    }
    Ok(())
}

pub fn check(path: &Path) -> Result<String> {
    let raw = load_file(path)?;
    let settings = Settings::resolve(raw)?;

    let mut out = String::from("✔ Config loaded successfully\n");

    let active = settings.filters.active();
    if active.is_empty() {
        out.push_str("✔ no filters; every transaction is reported\n");
    } else {
        let names: Vec<&str> = active.iter().map(|f| f.as_str()).collect();
        out.push_str(&format!(
            "✔ {} filters active: {}\n",
            names.len(),
            names.join(", ")
        ));
    }

    if let Some(slow) = settings.filters.slow {
        out.push_str(&format!("✔ slow threshold {} ms\n", slow.millis()));
    }

    Ok(out)
}

pub fn dump(path: &Path, json: bool) -> Result<String> {
    let raw = load_file(path)?;
    Settings::resolve(raw.clone())?;

    let mut out = if json {
        serde_json::to_string_pretty(&raw)?
    } else {
        hcl::to_string(&raw)?
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
