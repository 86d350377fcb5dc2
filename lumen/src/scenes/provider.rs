use std::collections::HashMap;

use custom_error::custom_error;

use crate::io::traits::MeshIOError;
use crate::scene::scene::Scene;

custom_error! {pub SceneError
    FailedToBuild {description: String} = "Failed to build scene: {description}",
}

impl From<MeshIOError> for SceneError {

    fn from(err: MeshIOError) -> Self {
        SceneError::FailedToBuild {
            description: err.to_string(),
        }
    }
}

/// Produces a populated scene from CLI options. The caller still owns the
/// explicit `build()` step before rendering.
pub trait SceneProvider {

    fn scene(&self, options: &HashMap<String, String>) -> Result<Scene, SceneError>;
}

pub fn option_usize(options: &HashMap<String, String>, key: &str, default: usize) -> usize {
    options
        .get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
