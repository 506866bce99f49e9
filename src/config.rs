use crate::error::{ReclassError, Result};
use inventory_reclass_common::{ReclassifyOptions, DEFAULT_DESCRIPTION_FIELDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 検索用テキストに使うフィールド（この順で連結）
    pub description_fields: Vec<String>,
    /// `--zip` 未指定でもZIPを作成する
    pub zip_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description_fields: DEFAULT_DESCRIPTION_FIELDS.iter().map(|f| f.to_string()).collect(),
            zip_by_default: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReclassError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("inventory-reclass").join("config.json"))
    }

    /// カンマ区切りのフィールド名を設定
    pub fn set_description_fields(&mut self, fields: &str) -> Result<()> {
        self.description_fields = fields
            .split(',')
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.description_fields.is_empty() {
            return Err(ReclassError::Config("description_fields が空です".into()));
        }
        Ok(())
    }

    pub fn reclassify_options(&self) -> ReclassifyOptions {
        ReclassifyOptions {
            description_fields: self.description_fields.clone(),
        }
    }
}
