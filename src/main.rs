// Entrypoint for the uploader CLI.
// - Parse the three required flags, read GH_REPO_TOKEN, then run the one
//   linear sequence: repository -> release by tag -> asset upload.
// - Returns `anyhow::Result` so every failure prints its chain and exits
//   non-zero; the remote steps share a single catch-all wrapper that
//   names the tag being processed.

use anyhow::{Context, Result};
use clap::Parser;
use ghup_cli::api::{GithubClient, ReleaseAsset};
use ghup_cli::cli::Cli;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn main() -> Result<()> {
    let args = Cli::parse();

    // Fails before any network call if GH_REPO_TOKEN is unset or empty.
    let api = GithubClient::from_env()?;

    let asset = upload_release_asset(&api, &args)
        .with_context(|| format!("Failed to upload asset for release tag '{}'", args.tag))?;

    println!("Uploaded {} to release {}", asset.name, args.tag);
    println!("Download URL: {}", asset.browser_download_url);
    Ok(())
}

/// The three remote steps, in order. Any failure — auth, unknown repo or
/// tag, unreadable file, network error, duplicate asset — bubbles out of
/// here as one undifferentiated error for `main` to wrap and report.
fn upload_release_asset(api: &GithubClient, args: &Cli) -> Result<ReleaseAsset> {
    let repository = api.get_repository(&args.repo)?;
    let release = api.get_release_by_tag(&repository, &args.tag)?;

    // Spinner while the blocking upload runs.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(format!("Uploading {}...", args.file.display()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let asset = api.upload_asset(&release, &args.file);
    spinner.finish_and_clear();
    asset
}
