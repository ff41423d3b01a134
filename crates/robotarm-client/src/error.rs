//! 会话层错误类型定义

use robotarm_protocol::{Axis, ProtocolError};
use robotarm_serial::{ConfigError, DiscoveryError, TransportError};
use thiserror::Error;

/// 会话层错误类型
#[derive(Error, Debug)]
pub enum ArmError {
    /// 未配置串口
    #[error("No serial port defined")]
    Configuration,

    /// 已配置串口但未打开
    #[error("Serial port is not open")]
    Connection,

    /// 自动发现未找到可用设备
    #[error("Device not found: {0}")]
    DeviceNotFound(#[from] DiscoveryError),

    /// 不支持的末端执行器类型
    #[error("Unsupported attachment type: {tag}")]
    UnsupportedAttachment { tag: String },

    /// 相对运动时该轴位置尚未知
    #[error("Position of axis {axis} is unknown, cannot apply relative move")]
    UnknownPosition { axis: Axis },

    /// 传输层错误
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// 协议错误
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 配置文件错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// 会话层 Result 类型别名
pub type Result<T> = std::result::Result<T, ArmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_error_display() {
        assert_eq!(ArmError::Configuration.to_string(), "No serial port defined");
        assert_eq!(ArmError::Connection.to_string(), "Serial port is not open");

        let err = ArmError::UnsupportedAttachment {
            tag: "laser".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported attachment type: laser");

        let err = ArmError::UnknownPosition { axis: Axis::Z };
        assert!(err.to_string().contains("axis Z"));
    }

    #[test]
    fn test_from_discovery_error() {
        let err: ArmError = DiscoveryError::DeviceNotFound { candidates: vec![] }.into();
        match err {
            ArmError::DeviceNotFound(DiscoveryError::DeviceNotFound { candidates }) => {
                assert!(candidates.is_empty())
            },
            other => panic!("Expected DeviceNotFound variant, got {:?}", other),
        }
    }

    #[test]
    fn test_from_protocol_error() {
        let err: ArmError = ProtocolError::InvalidAxisValue {
            token: "Y?".to_string(),
        }
        .into();
        assert!(matches!(
            err,
            ArmError::Protocol(ProtocolError::InvalidAxisValue { .. })
        ));
    }

    #[test]
    fn test_from_transport_error() {
        let err: ArmError = TransportError::NotOpen.into();
        assert!(err.to_string().contains("Transport not open"));
    }
}
