//! 模拟传输
//!
//! 记录所有写入的字节，可模拟打开失败。克隆出的句柄共享同一状态，
//! 因此可以把一个克隆交给会话，另一个留在测试中检查写入内容。

use crate::{Transport, TransportError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MockState {
    open: bool,
    fail_open: bool,
    writes: Vec<Vec<u8>>,
    open_calls: usize,
    close_calls: usize,
}

/// 模拟串口
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// 创建未打开的模拟串口
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建已打开的模拟串口
    pub fn opened() -> Self {
        let mock = Self::new();
        mock.state().open = true;
        mock
    }

    /// 创建打开时总是失败的模拟串口
    pub fn failing_open() -> Self {
        let mock = Self::new();
        mock.state().fail_open = true;
        mock
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 每次写入的内容（按 UTF-8 解码）
    pub fn written_lines(&self) -> Vec<String> {
        self.state()
            .writes
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    /// 累计写入的字节数
    pub fn bytes_written(&self) -> usize {
        self.state().writes.iter().map(Vec::len).sum()
    }

    pub fn open_calls(&self) -> usize {
        self.state().open_calls
    }

    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }

    /// 设置之后的打开操作是否失败
    pub fn set_fail_open(&self, fail: bool) {
        self.state().fail_open = fail;
    }

    /// 清空写入记录
    pub fn clear(&self) {
        self.state().writes.clear();
    }
}

impl Transport for MockTransport {
    fn open(&mut self) -> Result<(), TransportError> {
        let mut state = self.state();
        state.open_calls += 1;
        if state.fail_open {
            return Err(TransportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "mock device unavailable",
            )));
        }
        state.open = true;
        Ok(())
    }

    fn close(&mut self) {
        let mut state = self.state();
        state.close_calls += 1;
        state.open = false;
    }

    fn is_open(&self) -> bool {
        self.state().open
    }

    fn write(&mut self, bytes: &[u8]) -> Result<usize, TransportError> {
        let mut state = self.state();
        if !state.open {
            return Err(TransportError::NotOpen);
        }
        state.writes.push(bytes.to_vec());
        Ok(bytes.len())
    }

    fn describe(&self) -> String {
        format!("Mock<open={}>", self.is_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let probe = MockTransport::new();
        let mut transport = probe.clone();

        transport.open().unwrap();
        transport.write(b"M106\r\n").unwrap();

        assert!(probe.is_open());
        assert_eq!(probe.written_lines(), vec!["M106\r\n"]);
        assert_eq!(probe.bytes_written(), 6);
        assert_eq!(probe.open_calls(), 1);
    }

    #[test]
    fn test_failing_open() {
        let mut transport = MockTransport::failing_open();
        assert!(transport.open().is_err());
        assert!(!transport.is_open());
        assert_eq!(transport.open_calls(), 1);
    }

    #[test]
    fn test_write_requires_open() {
        let mut transport = MockTransport::new();
        assert!(matches!(
            transport.write(b"M17\r\n"),
            Err(TransportError::NotOpen)
        ));
        assert_eq!(transport.bytes_written(), 0);
    }

    #[test]
    fn test_close_and_clear() {
        let mut transport = MockTransport::opened();
        transport.write(b"M17\r\n").unwrap();
        transport.clear();
        transport.close();
        assert!(!transport.is_open());
        assert_eq!(transport.close_calls(), 1);
        assert!(transport.written_lines().is_empty());
    }
}
