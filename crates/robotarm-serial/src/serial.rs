//! 基于 `serialport` 的串口传输

use crate::config::SerialConfig;
use crate::{Transport, TransportError};
use std::fmt;
use std::io::Write;
use tracing::{debug, trace};

/// 真实串口
///
/// 创建时不会打开设备，需要显式调用 [`Transport::open`]。
pub struct SerialTransport {
    config: SerialConfig,
    port: Option<Box<dyn serialport::SerialPort>>,
}

impl SerialTransport {
    pub fn new(config: SerialConfig) -> Self {
        Self { config, port: None }
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }
}

impl Transport for SerialTransport {
    fn open(&mut self) -> Result<(), TransportError> {
        if self.port.is_some() {
            return Ok(());
        }
        debug!(
            "Opening serial port {} at {} baud",
            self.config.port, self.config.baud_rate
        );
        let port = serialport::new(&self.config.port, self.config.baud_rate)
            .timeout(self.config.timeout_duration())
            .open()?;
        self.port = Some(port);
        Ok(())
    }

    fn close(&mut self) {
        // 释放句柄即关闭设备
        if self.port.take().is_some() {
            debug!("Closed serial port {}", self.config.port);
        }
    }

    fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        let port = self.port.as_mut().ok_or(TransportError::NotOpen)?;
        port.write_all(bytes)?;
        port.flush()?;
        trace!("Wrote {} bytes to {}", bytes.len(), self.config.port);
        Ok(bytes.len())
    }

    fn describe(&self) -> String {
        format!(
            "Serial<port={}, baud_rate={}, timeout={}ms, open={}>",
            self.config.port,
            self.config.baud_rate,
            self.config.timeout_ms,
            self.is_open()
        )
    }
}

impl fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialTransport")
            .field("config", &self.config)
            .field("open", &self.is_open())
            .finish()
    }
}
