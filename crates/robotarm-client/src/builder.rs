//! Builder 模式实现
//!
//! 提供链式构造 `RobotArm` 实例的便捷方式，并负责连接建立时的初始化。

use crate::arm::{DEFAULT_SETTLE_DELAY, RobotArm};
use crate::attachment::{Attachment, Gripper};
use crate::config::ArmConfig;
use crate::error::Result;
use robotarm_protocol::AxisValue;
use robotarm_serial::{SerialTransport, Transport, default_transport};
use std::time::Duration;
use tracing::debug;

/// RobotArm Builder（链式构造）
///
/// # 构建流程
///
/// 1. 显式提供的串口优先；否则若 `use_default_port` 为真，自动发现 USB 串口
/// 2. 若串口已经打开，立即执行初始化序列
/// 3. 否则若 `start_connection` 为真，调用 [`RobotArm::open`]（其中会执行初始化）
///
/// # Example
///
/// ```no_run
/// use robotarm_client::{Attachment, RobotArmBuilder};
///
/// // 自动发现 USB 串口，打开并初始化
/// let arm = RobotArmBuilder::new()
///     .attachment(Attachment::fan())
///     .build()
///     .unwrap();
///
/// // 只创建会话，稍后手动打开
/// let arm = RobotArmBuilder::new()
///     .port("/dev/ttyUSB0")
///     .start_connection(false)
///     .build()
///     .unwrap();
/// ```
pub struct RobotArmBuilder {
    attachment: Attachment,
    transport: Option<Box<dyn Transport>>,
    use_default_port: bool,
    start_connection: bool,
    verbose: bool,
    settle_delay: Duration,
    coarse_step: Option<AxisValue>,
    fine_step: Option<AxisValue>,
}

impl RobotArmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置文件内容创建 Builder
    ///
    /// 末端执行器名称无法识别时返回 [`ArmError::UnsupportedAttachment`](crate::ArmError::UnsupportedAttachment)。
    pub fn from_config(config: &ArmConfig) -> Result<Self> {
        let attachment = match config.attachment.parse::<Attachment>()? {
            Attachment::Gripper(_) => Attachment::Gripper(Gripper::new(config.gripper_steps)),
            other => other,
        };

        let mut builder = Self::new()
            .attachment(attachment)
            .use_default_port(config.use_default_port)
            .start_connection(config.start_connection)
            .verbose(config.verbose)
            .settle_delay(config.settle_delay())
            .coarse_step(config.coarse_step)
            .fine_step(config.fine_step);

        if let Some(serial) = &config.serial {
            builder = builder.transport(SerialTransport::new(serial.clone()));
        }
        Ok(builder)
    }

    /// 末端执行器（默认夹爪）
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = attachment;
        self
    }

    /// 指定串口（优先于自动发现）
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// 使用指定设备路径和默认参数（9600 baud，2 秒超时）
    pub fn port(self, port: impl Into<String>) -> Self {
        self.transport(SerialTransport::new(robotarm_serial::SerialConfig::new(port)))
    }

    /// 未指定串口时是否自动发现（默认 true）
    pub fn use_default_port(mut self, enabled: bool) -> Self {
        self.use_default_port = enabled;
        self
    }

    /// 构建时是否打开串口（默认 true）
    pub fn start_connection(mut self, enabled: bool) -> Self {
        self.start_connection = enabled;
        self
    }

    /// 是否以 info 级别记录指令（默认 true）
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 初始化前等待串口稳定的时间（默认 1.5 秒）
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn coarse_step(mut self, step: impl Into<AxisValue>) -> Self {
        self.coarse_step = Some(step.into());
        self
    }

    pub fn fine_step(mut self, step: impl Into<AxisValue>) -> Self {
        self.fine_step = Some(step.into());
        self
    }

    /// 构建会话
    ///
    /// 自动发现失败时返回 [`ArmError::DeviceNotFound`](crate::ArmError::DeviceNotFound)。
    /// 构建过程中出错时，已打开的串口会随会话一起释放。
    pub fn build(self) -> Result<RobotArm> {
        let transport = match self.transport {
            Some(transport) => Some(transport),
            None if self.use_default_port => {
                let transport = default_transport()?;
                debug!("Using discovered serial port {}", transport.config().port);
                Some(Box::new(transport) as Box<dyn Transport>)
            },
            None => None,
        };

        let mut arm = RobotArm::new(self.attachment, transport);
        arm.set_verbose(self.verbose);
        arm.set_settle_delay(self.settle_delay);
        if let Some(step) = self.coarse_step {
            arm.set_coarse_step(step);
        }
        if let Some(step) = self.fine_step {
            arm.set_fine_step(step);
        }

        if arm.is_open() {
            arm.initialize()?;
        } else if self.start_connection {
            arm.open()?;
        }
        Ok(arm)
    }
}

impl Default for RobotArmBuilder {
    fn default() -> Self {
        Self {
            attachment: Attachment::default(),
            transport: None,
            use_default_port: true,
            start_connection: true,
            verbose: true,
            settle_delay: DEFAULT_SETTLE_DELAY,
            coarse_step: None,
            fine_step: None,
        }
    }
}
