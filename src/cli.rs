// CLI surface: three required flags, parsed with clap derive. Missing a
// flag produces clap's stock usage error before anything else runs.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ghup")]
#[command(version)]
#[command(about = "Upload a local file as an asset of an existing GitHub release")]
pub struct Cli {
    /// Repository in <owner>/<name> form
    #[arg(long, value_name = "OWNER/NAME")]
    pub repo: String,

    /// Tag of the existing release to attach the asset to
    #[arg(long, value_name = "TAG")]
    pub tag: String,

    /// Path of the local file to upload
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_all_flags_parse() {
        let cli = Cli::parse_from([
            "ghup", "--repo", "owner/name", "--tag", "v1.0.0", "--file", "asset.zip",
        ]);
        assert_eq!(cli.repo, "owner/name");
        assert_eq!(cli.tag, "v1.0.0");
        assert_eq!(cli.file, PathBuf::from("asset.zip"));
    }

    #[test]
    fn test_missing_repo_is_an_error() {
        let res = Cli::try_parse_from(["ghup", "--tag", "v1.0.0", "--file", "asset.zip"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_tag_is_an_error() {
        let res = Cli::try_parse_from(["ghup", "--repo", "owner/name", "--file", "asset.zip"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let res = Cli::try_parse_from(["ghup", "--repo", "owner/name", "--tag", "v1.0.0"]);
        assert!(res.is_err());
    }
}
