//! USB 串口自动发现
//!
//! 选择第一个名称中包含 "usb"（不区分大小写）的设备，
//! 例如 `/dev/ttyUSB0`、`/dev/cu.wchusbserial1410`。

use crate::config::SerialConfig;
use crate::serial::SerialTransport;
use thiserror::Error;
use tracing::debug;

/// 自动发现错误
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// 没有名称包含 "usb" 的设备
    #[error("No USB serial device found (candidates: {candidates:?})")]
    DeviceNotFound { candidates: Vec<String> },

    /// 枚举串口失败
    #[error("Failed to enumerate serial ports: {0}")]
    Enumerate(#[from] serialport::Error),
}

/// 列出本机所有串口设备名
pub fn available_port_names() -> Result<Vec<String>, DiscoveryError> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}

/// 从设备名列表中选择第一个 USB 设备
pub fn select_usb_port<S: AsRef<str>>(names: &[S]) -> Result<String, DiscoveryError> {
    names
        .iter()
        .map(|name| name.as_ref())
        .find(|name| name.to_ascii_lowercase().contains("usb"))
        .map(str::to_string)
        .ok_or_else(|| DiscoveryError::DeviceNotFound {
            candidates: names.iter().map(|n| n.as_ref().to_string()).collect(),
        })
}

/// 自动发现 USB 串口并使用默认参数（9600 baud，2 秒超时）
pub fn default_serial_config() -> Result<SerialConfig, DiscoveryError> {
    let names = available_port_names()?;
    debug!("Available serial ports: {:?}", names);
    let port = select_usb_port(&names)?;
    debug!("Selected serial port {}", port);
    Ok(SerialConfig::new(port))
}

/// 自动发现并返回一个未打开的串口
pub fn default_transport() -> Result<SerialTransport, DiscoveryError> {
    default_serial_config().map(SerialTransport::new)
}
