use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{PatrolError, PatrolResult};
use crate::core::graph::DEFAULT_WEIGHT;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub parser: ParserConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 为 `false` 时输出到标准错误
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "patrolgraph".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 输入解析配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ParserConfig {
    /// 每条道路的权重
    pub default_weight: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> PatrolResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> PatrolResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 给定路径时加载配置文件，否则使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PatrolResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> PatrolResult<()> {
        if self.parser.default_weight == 0 {
            return Err(PatrolError::Config(
                "parser.default_weight 必须大于 0".to_string(),
            ));
        }
        if self.log.max_files == 0 {
            return Err(PatrolError::Config("log.max_files 必须大于 0".to_string()));
        }
        Ok(())
    }
}
