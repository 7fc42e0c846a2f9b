//! Locally persisted player data
//!
//! The high score and the resolved account name outlive a session. They are
//! loaded once at startup as initial values for the session state, and
//! written back outside of ticks (game over, sign-in/out). The simulation
//! core never touches storage.

/// LocalStorage-backed values carried across sessions
#[derive(Debug, Clone, Default)]
pub struct SavedData {
    /// Best score ever achieved on this device
    pub high_score: u64,
    /// Account name resolved by sign-in (or typed once), used as the default
    /// score-submission name
    pub account: Option<String>,
}

impl SavedData {
    /// LocalStorage keys (used only in wasm32)
    #[allow(dead_code)]
    const HIGH_SCORE_KEY: &'static str = "highScore";
    #[allow(dead_code)]
    const ACCOUNT_KEY: &'static str = "playerAccountName";

    /// Load persisted data; anything missing or unparsable falls back to the
    /// default (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, starting fresh");
            return Self::default();
        };

        let high_score = storage
            .get_item(Self::HIGH_SCORE_KEY)
            .ok()
            .flatten()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let account = storage
            .get_item(Self::ACCOUNT_KEY)
            .ok()
            .flatten()
            .filter(|s| !s.is_empty());

        log::info!(
            "loaded saved data: high score {}, account {:?}",
            high_score,
            account
        );
        Self {
            high_score,
            account,
        }
    }

    /// Persist a new high score (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save_high_score(score: u64) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(Self::HIGH_SCORE_KEY, &score.to_string());
            log::info!("high score saved: {}", score);
        }
    }

    /// Persist the resolved account name (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save_account(name: &str) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(Self::ACCOUNT_KEY, name);
            log::info!("account saved: {}", name);
        }
    }

    /// Forget the stored account (sign-out) (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn clear_account() {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(Self::ACCOUNT_KEY);
            log::info!("account cleared");
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_high_score(_score: u64) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_account(_name: &str) {}

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear_account() {}
}
