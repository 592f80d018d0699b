//! Content settings: messages, labels and the music file
//!
//! Everything has a built-in default; `settings.json` only needs the fields
//! that should change.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the directory holding `settings.json`
/// - If running from source (binary path contains "target") or PROPOSAL_CARD_DEV is set: ./tmp/proposal-card
/// - If installed (binary path elsewhere): ~/.config/proposal-card
pub fn get_config_dir() -> PathBuf {
    let use_local_storage = std::env::var("PROPOSAL_CARD_DEV").is_ok()
        || std::env::current_exe()
            .map(|p| p.iter().any(|c| c == "target"))
            .unwrap_or(false);

    if use_local_storage {
        let mut path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        path.push("tmp");
        path.push("proposal-card");
        path
    } else {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("proposal-card")
    }
}

fn settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Headline on the closed card
    pub card_title: String,
    /// Hint under the headline on the closed card
    pub card_hint: String,
    /// Messages revealed one by one
    pub messages: Vec<String>,
    /// Reveal button label before the first message
    pub reveal_label: String,
    /// Reveal button label once the last message is shown
    pub final_label: String,
    /// Reveal button labels between messages, cycled
    pub encouragements: Vec<String>,
    /// Proposal dialog question
    pub question: String,
    pub accept_label: String,
    pub accepted_label: String,
    pub decline_label: String,
    /// Text on the kiss overlay
    pub kiss_caption: String,
    /// Background music file
    pub music_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_title: "Для тебе ❤".to_string(),
            card_hint: "Натисни, щоб відкрити".to_string(),
            messages: vec![
                "Ніколи не забуду той вогник у твоїх очах, коли ми вперше обирали твій ноутбук...".to_string(),
                "Твоя щира посмішка — це моє найбільше натхнення.".to_string(),
                "Обожнюю ті миті, коли ти ніяковієш і ховаєш погляд у вікно авто. Це так зворушливо.".to_string(),
                "Навіть твої грайливі 'кусь' для мене приємніші за будь-які дотики.".to_string(),
                "Твій талант дотепно жартувати наді мною — це окремий вид мистецтва, який я обожнюю.".to_string(),
                "Наша історія — 'не як у всіх', і саме в цьому її неповторна магія.".to_string(),
            ],
            reveal_label: "Чому ти?".to_string(),
            final_label: "І найголовніше...".to_string(),
            encouragements: vec![
                "Це ще не все...".to_string(),
                "А знаєш, що ще?".to_string(),
                "Слухай далі ❤".to_string(),
                "І ще дещо...".to_string(),
                "Є ще одна причина...".to_string(),
            ],
            question: "Ти вийдеш за мене?".to_string(),
            accept_label: "ТАК!".to_string(),
            accepted_label: "Я теж тебе кохаю! ❤".to_string(),
            decline_label: "Ні".to_string(),
            kiss_caption: "Цьом!".to_string(),
            music_path: PathBuf::from("assets/music.mp3"),
        }
    }
}

/// Parse settings from a JSON payload; absent fields keep their defaults
pub fn parse_settings(payload: &str) -> Result<Settings, SettingsError> {
    Ok(serde_json::from_str(payload)?)
}

pub fn read_settings(path: &Path) -> Result<Settings, SettingsError> {
    let payload = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&payload)
}

/// Load `settings.json`, falling back to defaults when it is absent or broken
pub fn load_settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        tracing::debug!("no settings at {}, using defaults", path.display());
        return Settings::default();
    }

    match read_settings(&path) {
        Ok(settings) => {
            tracing::info!("loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            tracing::warn!("ignoring settings: {err}");
            Settings::default()
        }
    }
}
