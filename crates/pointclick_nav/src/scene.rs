//! One-choreographer-per-scene guard
//!
//! Scenes are identified by name. Creating a choreographer claims the
//! scene's slot in a [`SceneRegistry`]; the slot is released when the
//! returned [`SceneSlot`] (held by the choreographer) is dropped.

use crate::error::{NavigationError, Result};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared record of scenes that already host a choreographer
#[derive(Debug, Clone, Default)]
pub struct SceneRegistry {
    occupied: Arc<Mutex<HashSet<String>>>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `scene`, failing if it already has an owner
    pub fn claim(&self, scene: impl Into<String>) -> Result<SceneSlot> {
        let scene = scene.into();
        let mut occupied = self.occupied.lock();
        if !occupied.insert(scene.clone()) {
            log::error!(
                "Failed to create choreographer for scene '{}': only a single instance is allowed",
                scene
            );
            return Err(NavigationError::DuplicateChoreographer(scene));
        }

        Ok(SceneSlot {
            scene,
            occupied: Arc::clone(&self.occupied),
        })
    }

    pub fn is_occupied(&self, scene: &str) -> bool {
        self.occupied.lock().contains(scene)
    }
}

/// Claimed scene slot, released on drop
#[derive(Debug)]
pub struct SceneSlot {
    scene: String,
    occupied: Arc<Mutex<HashSet<String>>>,
}

impl SceneSlot {
    pub fn scene(&self) -> &str {
        &self.scene
    }
}

impl Drop for SceneSlot {
    fn drop(&mut self) {
        self.occupied.lock().remove(&self.scene);
    }
}
