use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use minijinja::{Environment, Error, State};
use sha2::{Digest, Sha256};

/// Appends a content fingerprint to static asset URLs so templates can
/// reference them with far-future cache headers. Unknown paths fall back
/// to the bare URL.
#[derive(Debug, Default, Clone)]
pub struct AssetCache {
    fingerprints: Arc<RwLock<HashMap<String, String>>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn url_for(&self, path: &str) -> String {
        if let Some(url) = self.fingerprints.read().unwrap().get(path) {
            return url.clone();
        }

        let url = match fs::read(Path::new("static").join(path)) {
            Ok(contents) => {
                let digest = Sha256::digest(&contents);
                // Eight hex chars of the digest are plenty for cache busting.
                let short: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
                format!("/static/{path}?v={short}")
            }
            Err(_) => format!("/static/{path}"),
        };

        self.fingerprints
            .write()
            .unwrap()
            .insert(path.to_string(), url.clone());
        url
    }

    pub fn register(&self, env: &mut Environment<'_>) {
        let cache = self.clone();
        env.add_function(
            "asset",
            move |_state: &State, path: String| -> Result<String, Error> {
                Ok(cache.url_for(&path))
            },
        );
    }
}
