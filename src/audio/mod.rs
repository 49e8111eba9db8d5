use crate::client::Transport;
use crate::config::Config;
use crate::error::{Result, TdkError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Extension of `link`, starting at its last `.`.
fn extension(link: &str) -> &str {
    link.rfind('.').map(|pos| &link[pos..]).unwrap_or("")
}

/// File name for the `index`-th (1-based) pronunciation of `word`.
pub fn audio_file_name(prefix: &str, word: &str, index: usize, link: &str) -> String {
    format!("{}{}_{}{}", prefix, word, index, extension(link))
}

/// Download every link into `dir` as `{prefix}{word}_{i}{ext}`.
///
/// Links are fetched one after another. If a fetch fails, files written
/// before it stay on disk.
pub fn download_audio<T: Transport>(
    transport: &T,
    user_agent: &str,
    word: &str,
    links: &[String],
    dir: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(links.len());

    for (i, link) in links.iter().enumerate() {
        let path = dir.join(audio_file_name(prefix, word, i + 1, link));
        let bytes = transport.get(link, user_agent)?;
        fs::write(&path, &bytes).map_err(|e| TdkError::io(&path, e))?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        paths.push(path);
    }

    Ok(paths)
}

/// External program used to play pronunciations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub program: String,
    pub args: Vec<String>,
}

impl Player {
    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.player.clone(),
            args: config.player_args.clone(),
        }
    }

    /// Play `path` and wait for the player to exit.
    pub fn play(&self, path: &Path) -> Result<()> {
        log::debug!("running {} on {}", self.program, path.display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| TdkError::PlayerSpawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(TdkError::PlayerFailed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Stream each link to a temporary file, play it, then remove the file.
pub fn play_links<T: Transport>(
    transport: &T,
    user_agent: &str,
    links: &[String],
    player: &Player,
) -> Result<()> {
    for link in links {
        let bytes = transport.get(link, user_agent)?;

        let mut file = tempfile::Builder::new()
            .prefix("tdk-")
            .suffix(extension(link))
            .tempfile()
            .map_err(|e| TdkError::io(std::env::temp_dir(), e))?;
        file.write_all(&bytes)
            .map_err(|e| TdkError::io(file.path(), e))?;

        // Close the handle before the player opens the file; the path is
        // deleted when `temp_path` drops.
        let temp_path = file.into_temp_path();
        player.play(&temp_path)?;
    }
    Ok(())
}
