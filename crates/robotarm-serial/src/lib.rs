//! # Robot Arm Serial Transport
//!
//! 串口传输抽象层，提供统一的 [`Transport`] 接口。
//!
//! - `serial`: 基于 `serialport` 的真实串口实现
//! - `discovery`: USB 串口自动发现
//! - `config`: 串口配置（支持 TOML）
//! - `mock`: 无硬件的模拟传输（`mock` feature 或测试中可用）

pub mod config;
pub mod discovery;
pub mod serial;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{ConfigError, SerialConfig};
pub use discovery::{
    DiscoveryError, available_port_names, default_serial_config, default_transport,
    select_usb_port,
};
pub use serial::SerialTransport;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

use thiserror::Error;

/// 传输层统一错误类型
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("Transport not open")]
    NotOpen,
}

/// 串口传输接口
///
/// 协议为单行写入、无应答，因此只需要打开、关闭、写入和状态查询。
/// 读写超时由具体实现在打开时配置。
pub trait Transport: Send {
    /// 打开连接
    fn open(&mut self) -> Result<(), TransportError>;

    /// 关闭连接（未打开时为空操作）
    fn close(&mut self);

    fn is_open(&self) -> bool;

    /// 写入字节，返回实际写入的字节数
    fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError>;

    /// 用于日志和 `Display` 的简短描述
    fn describe(&self) -> String {
        String::from("transport")
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self) -> Result<(), TransportError> {
        (**self).open()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn is_open(&self) -> bool {
        (**self).is_open()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        (**self).write(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
