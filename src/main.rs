//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! with wasm-pack and serves `static/` on a local port.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = host::run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::io::ErrorKind;
    use std::process::{Command, ExitStatus};
    use std::{env, io};

    use thiserror::Error;

    const DEFAULT_PORT: u16 = 8000;

    #[derive(Debug, Error)]
    pub enum HelperError {
        #[error("failed to run {tool}: {source}")]
        Spawn { tool: &'static str, source: io::Error },
        #[error("{tool} exited with {status}")]
        Failed { tool: &'static str, status: ExitStatus },
        #[error("PORT must be a port number, got {0:?}")]
        BadPort(String),
    }

    pub fn run() -> Result<(), HelperError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| HelperError::BadPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        log::info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => return Err(HelperError::Failed { tool: "wasm-pack", status }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("wasm-pack not found in PATH; serving whatever is already in static/pkg");
            }
            Err(source) => return Err(HelperError::Spawn { tool: "wasm-pack", source }),
        }

        log::info!("serving static/ at http://127.0.0.1:{port}");
        let status = Command::new("python3")
            .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
            .status()
            .map_err(|source| HelperError::Spawn { tool: "python3", source })?;
        if status.success() {
            Ok(())
        } else {
            Err(HelperError::Failed { tool: "python3", status })
        }
    }
}
