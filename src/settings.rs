//! Client settings and preferences
//!
//! Persisted in LocalStorage; native builds always use defaults.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SMOOTHING;

/// Client settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Per-frame smoothing toward the latest snapshot, in (0, 1)
    pub smoothing: f32,

    // === Visual Effects ===
    /// Goal particle bursts
    pub particles: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no particle bursts)
    pub reduced_motion: bool,

    // === Network ===
    /// Socket URL override; defaults to `/ws` on the page's host
    pub server_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            particles: true,
            show_fps: false,
            reduced_motion: false,
            server_url: None,
        }
    }
}

impl Settings {
    /// Smoothing factor guaranteed to lie strictly inside (0, 1)
    pub fn effective_smoothing(&self) -> f32 {
        if self.smoothing > 0.0 && self.smoothing < 1.0 {
            self.smoothing
        } else {
            log::warn!(
                "Smoothing {} out of range, using {}",
                self.smoothing,
                DEFAULT_SMOOTHING
            );
            DEFAULT_SMOOTHING
        }
    }

    /// Whether goal bursts should be spawned (respects reduced_motion)
    pub fn effective_particles(&self) -> bool {
        self.particles && !self.reduced_motion
    }

    /// Socket URL for a page served from `host` over `protocol` ("http:"/"https:")
    pub fn socket_url(&self, protocol: &str, host: &str) -> String {
        if let Some(url) = &self.server_url {
            return url.clone();
        }
        let scheme = if protocol == "https:" { "wss" } else { "ws" };
        format!("{}://{}/ws", scheme, host)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "arcade_duel_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
