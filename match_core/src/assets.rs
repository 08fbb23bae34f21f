//! Asset loading. The font is required; music and shader are optional and only logged when missing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::AssetConfig;
use crate::error::{AssetError, MatchError};

/// Raw font file, handed to the renderer as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

impl Font {
    pub fn new(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }
}

/// Background track and how it should be played
#[derive(Debug, Clone, PartialEq)]
pub struct Music {
    pub path: PathBuf,
    pub data: Vec<u8>,
    pub volume: f32,
    pub looping: bool,
}

impl Music {
    pub const VOLUME: f32 = 2.0;

    pub fn new(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
            volume: Self::VOLUME,
            looping: true,
        }
    }
}

/// Fragment shader source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shader {
    pub path: PathBuf,
    pub source: String,
}

/// Where assets come from
pub trait AssetSource {
    fn load_font(&mut self, path: &Path) -> Result<Font, AssetError>;
    fn load_music(&mut self, path: &Path) -> Result<Music, AssetError>;
    fn load_shader(&mut self, path: &Path) -> Result<Shader, AssetError>;
}

/// Reads assets from the filesystem. Empty files count as failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsAssets;

impl FsAssets {
    fn read(path: &Path) -> Result<Vec<u8>, AssetError> {
        let data = fs::read(path)?;
        if data.is_empty() {
            return Err(AssetError::Empty(path.to_path_buf()));
        }
        Ok(data)
    }
}

impl AssetSource for FsAssets {
    fn load_font(&mut self, path: &Path) -> Result<Font, AssetError> {
        Ok(Font::new(path, Self::read(path)?))
    }

    fn load_music(&mut self, path: &Path) -> Result<Music, AssetError> {
        Ok(Music::new(path, Self::read(path)?))
    }

    fn load_shader(&mut self, path: &Path) -> Result<Shader, AssetError> {
        let source = fs::read_to_string(path)?;
        if source.trim().is_empty() {
            return Err(AssetError::Empty(path.to_path_buf()));
        }
        Ok(Shader {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What made it into memory
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAssets {
    pub font: Font,
    pub music: Option<Music>,
    pub shader: Option<Shader>,
}

impl LoadedAssets {
    /// Load every asset named by `config`. Only a missing font aborts.
    pub fn load(assets: &mut dyn AssetSource, config: &AssetConfig) -> Result<Self, MatchError> {
        let font_path = config.font_path();
        let font = assets
            .load_font(&font_path)
            .map_err(|source| MatchError::FatalAsset {
                path: font_path.clone(),
                source,
            })?;

        let music_path = config.music_path();
        let music = match assets.load_music(&music_path) {
            Ok(music) => Some(music),
            Err(e) => {
                log::warn!("Music `{}` failed to load, playing without it : {e}.", music_path.display());
                None
            }
        };

        let shader_path = config.shader_path();
        let shader = match assets.load_shader(&shader_path) {
            Ok(shader) => Some(shader),
            Err(e) => {
                log::warn!("Shader `{}` failed to load, drawing without it : {e}.", shader_path.display());
                None
            }
        };

        Ok(Self { font, music, shader })
    }
}
