//! 会话配置文件
//!
//! ```toml
//! attachment = "fan"
//! coarse_step = 20
//! fine_step = 5
//! verbose = false
//!
//! [serial]
//! port = "/dev/ttyUSB0"
//! baud_rate = 9600
//! ```
//!
//! 省略 `[serial]` 时由 `use_default_port` 决定是否自动发现 USB 串口。

use crate::arm::{DEFAULT_COARSE_STEP, DEFAULT_FINE_STEP, DEFAULT_SETTLE_DELAY};
use robotarm_protocol::DEFAULT_GRIPPER_STEPS;
use robotarm_serial::{ConfigError, SerialConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 会话配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// 末端执行器名称（"gripper" / "fan"）
    pub attachment: String,
    /// 夹爪动作步数
    pub gripper_steps: u32,
    pub coarse_step: i64,
    pub fine_step: i64,
    pub verbose: bool,
    /// 初始化前的等待时间（毫秒）
    pub settle_delay_ms: u64,
    /// 构建时是否打开串口
    pub start_connection: bool,
    /// 未配置串口时是否自动发现
    pub use_default_port: bool,
    pub serial: Option<SerialConfig>,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            attachment: String::from("gripper"),
            gripper_steps: DEFAULT_GRIPPER_STEPS,
            coarse_step: DEFAULT_COARSE_STEP,
            fine_step: DEFAULT_FINE_STEP,
            verbose: true,
            settle_delay_ms: DEFAULT_SETTLE_DELAY.as_millis() as u64,
            start_connection: true,
            use_default_port: true,
            serial: None,
        }
    }
}

impl ArmConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ArmConfig::default();
        assert_eq!(config.attachment, "gripper");
        assert_eq!(config.gripper_steps, 10);
        assert_eq!(config.coarse_step, 20);
        assert_eq!(config.fine_step, 5);
        assert_eq!(config.settle_delay(), Duration::from_millis(1500));
        assert!(config.start_connection);
        assert!(config.use_default_port);
        assert!(config.serial.is_none());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ArmConfig::from_toml_str("").unwrap(), ArmConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = ArmConfig::from_toml_str(
            r#"
            attachment = "fan"
            fine_step = 2
            settle_delay_ms = 0

            [serial]
            port = "/dev/ttyUSB1"
            "#,
        )
        .unwrap();

        assert_eq!(config.attachment, "fan");
        assert_eq!(config.fine_step, 2);
        assert_eq!(config.coarse_step, 20);
        assert_eq!(config.settle_delay(), Duration::ZERO);
        assert_eq!(config.serial, Some(SerialConfig::new("/dev/ttyUSB1")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ArmConfig::from_toml_str("coarse_step = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "verbose = false\nstart_connection = false").unwrap();

        let config = ArmConfig::load(file.path()).unwrap();
        assert!(!config.verbose);
        assert!(!config.start_connection);
    }
}
