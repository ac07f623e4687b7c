//! Preview server for unpacked static HTML exports.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

/// Run the serve command.
pub async fn run(port: u16, dir: PathBuf, open_browser: bool) -> Result<()> {
    let root = preview_root(&dir)?;

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", root.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&root).append_index_html_on_directories(true));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    if open_browser {
        let url = format!("http://{}", addr);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Could not open browser: {}", e);
        }
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Directory holding the page to serve.
///
/// Accepts either a project folder or the output directory above it, where
/// unpacked exports live under `<dir>/<slug>/`. React projects are refused
/// since their sources need the Next.js toolchain to render.
fn preview_root(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Directory not found: {}. Run 'pagesmith export --format static-html --unpacked' first.",
            dir.display()
        );
    }

    let mut candidates = vec![dir.to_path_buf()];
    let mut children: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    children.sort();
    candidates.extend(children);

    if let Some(root) = candidates.iter().find(|p| p.join("index.html").is_file()) {
        return Ok(root.clone());
    }

    if let Some(project) = candidates.iter().find(|p| p.join("package.json").is_file()) {
        anyhow::bail!(
            "{} is a React export. Run 'npm install && npm run dev' inside it to preview.",
            project.display()
        );
    }

    anyhow::bail!(
        "No index.html under {}. Run 'pagesmith export --format static-html --unpacked' first.",
        dir.display()
    )
}
