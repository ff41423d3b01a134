//! 机械臂会话接口
//!
//! 本 crate 提供步进电机机械臂的主机端控制接口，包括：
//! - 连接管理（打开失败容错、释放时自动关闭）
//! - 推测位置记录（整数 / 小数坐标）
//! - 绝对运动、相对运动、预设位置、粗调/微调步进
//! - 末端执行器（夹爪 / 风扇）
//! - 连接建立后的一次性初始化序列
//!
//! # 快速开始
//!
//! ```no_run
//! use robotarm_client::{Attachment, RobotArmBuilder};
//!
//! # fn main() -> robotarm_client::Result<()> {
//! let mut arm = RobotArmBuilder::new()
//!     .attachment(Attachment::gripper())
//!     .build()?;
//!
//! arm.home()?;
//! arm.attachment_high()?;
//! arm.end_stop()?;
//! arm.attachment_low()?;
//! arm.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # 并发
//!
//! 会话是同步阻塞的，不做任何内部加锁。多个调用方需要在外部串行化。

mod arm;
pub mod attachment;
mod builder;
pub mod config;
mod error;
mod motion;

pub use arm::{DEFAULT_COARSE_STEP, DEFAULT_FINE_STEP, DEFAULT_SETTLE_DELAY, RobotArm};
pub use attachment::{ATTACHMENT_FAN, ATTACHMENT_GRIPPER, Actuator, Attachment, Fan, Gripper};
pub use builder::RobotArmBuilder;
pub use config::ArmConfig;
pub use error::{ArmError, Result};
pub use motion::{Direction, StepSize};

// 重新导出协议层与传输层常用类型
pub use robotarm_protocol::{Axis, AxisValue, GcodeCommand, Position, Preset, ProtocolError};
pub use robotarm_serial::{SerialConfig, SerialTransport, Transport, TransportError};

#[cfg(feature = "mock")]
pub use robotarm_serial::MockTransport;
