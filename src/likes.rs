//! Liked recipes with JSON file persistence.
//!
//! Likes live in a JSON file that is restored at startup, so a liked
//! recipe survives across sessions.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::SousChefError;
use crate::model::Like;

/// The set of liked recipes, in like order.
#[derive(Debug, Default)]
pub struct Likes {
    likes: Vec<Like>,
    path: Option<PathBuf>,
}

impl Likes {
    /// An in-memory likes list that is never persisted.
    pub fn ephemeral() -> Self {
        Self::default()
    }

    /// Restore likes from `path`. A missing file is an empty list; a
    /// file that does not hold a JSON array of likes is an error.
    pub fn load(path: &Path) -> Result<Self, SousChefError> {
        let likes = match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no likes file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            likes,
            path: Some(path.to_path_buf()),
        })
    }

    /// Add a like if the recipe is not already liked.
    pub fn add(&mut self, like: Like) -> Result<(), SousChefError> {
        if self.is_liked(&like.id) {
            warn!("recipe {} already liked", like.id);
            return Ok(());
        }
        self.likes.push(like);
        self.save()
    }

    /// Remove the like for `id`, if any.
    pub fn remove(&mut self, id: &str) -> Result<(), SousChefError> {
        self.likes.retain(|like| like.id != id);
        self.save()
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn len(&self) -> usize {
        self.likes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Like> {
        self.likes.iter()
    }

    fn save(&self) -> Result<(), SousChefError> {
        if let Some(path) = &self.path {
            fs::write(path, serde_json::to_string_pretty(&self.likes)?)?;
        }
        Ok(())
    }
}
