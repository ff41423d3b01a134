//! 测试辅助函数

use robotarm_client::{Attachment, RobotArm, RobotArmBuilder};
use robotarm_serial::MockTransport;
use std::time::Duration;

/// 创建已打开并完成初始化的会话
pub fn connected_arm(attachment: Attachment) -> (RobotArm, MockTransport) {
    let mock = MockTransport::opened();
    let arm = RobotArmBuilder::new()
        .attachment(attachment)
        .transport(mock.clone())
        .settle_delay(Duration::ZERO)
        .verbose(false)
        .build()
        .unwrap();
    // 丢弃初始化序列的写入记录
    mock.clear();
    (arm, mock)
}

/// 创建未打开的会话
pub fn disconnected_arm(attachment: Attachment) -> (RobotArm, MockTransport) {
    let mock = MockTransport::new();
    let arm = RobotArmBuilder::new()
        .attachment(attachment)
        .transport(mock.clone())
        .settle_delay(Duration::ZERO)
        .start_connection(false)
        .build()
        .unwrap();
    (arm, mock)
}
