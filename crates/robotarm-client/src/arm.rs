//! 机械臂会话
//!
//! [`RobotArm`] 独占串口句柄，记录推测位置，并在连接建立后执行一次初始化序列。
//!
//! # 发送流程
//!
//! ```text
//! 高层运动/执行器方法
//!     ↓ 解析缺省坐标、相对增量
//! GcodeCommand 编码
//!     ↓ 检查串口已配置且已打开
//! Transport::write
//!     ↓ 写入成功
//! 提交新位置
//! ```
//!
//! 协议没有应答，因此位置是"乐观"更新的：只要写入成功就认为机械臂已到位。

use crate::attachment::{Actuator, Attachment};
use crate::error::{ArmError, Result};
use robotarm_protocol::{Axis, AxisValue, GcodeCommand, Position, frame_line, scan_axis_tokens};
use robotarm_serial::Transport;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

/// 连接建立后等待接收端稳定的时间
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1500);

/// 默认粗调步长
pub const DEFAULT_COARSE_STEP: i64 = 20;

/// 默认微调步长
pub const DEFAULT_FINE_STEP: i64 = 5;

/// 机械臂会话
///
/// 通常通过 [`RobotArmBuilder`](crate::RobotArmBuilder) 创建。
/// 会话被释放时，如果串口仍处于打开状态会自动关闭。
pub struct RobotArm {
    attachment: Attachment,
    transport: Option<Box<dyn Transport>>,
    position: Position,
    initialized: bool,
    pub(crate) coarse_step: AxisValue,
    pub(crate) fine_step: AxisValue,
    verbose: bool,
    settle_delay: Duration,
}

impl RobotArm {
    /// 创建会话（不打开串口，也不执行初始化）
    pub fn new(attachment: Attachment, transport: Option<Box<dyn Transport>>) -> Self {
        Self {
            attachment,
            transport,
            position: Position::UNSET,
            initialized: false,
            coarse_step: AxisValue::Integer(DEFAULT_COARSE_STEP),
            fine_step: AxisValue::Integer(DEFAULT_FINE_STEP),
            verbose: true,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub(crate) fn set_settle_delay(&mut self, delay: Duration) {
        self.settle_delay = delay;
    }

    /// 是否以 info 级别记录指令流量（否则为 debug）
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    /// 当前推测位置
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // ==================== 连接管理 ====================

    /// 打开串口并执行初始化序列
    ///
    /// # 注意
    ///
    /// 串口打开失败只会记录错误日志，不会返回；之后仍会进入初始化序列。
    /// 若此时尚未初始化，初始化会因串口未打开而返回 [`ArmError::Connection`]。
    /// 若已经初始化过，则直接返回 `Ok(())`，调用方应通过 [`is_open`](Self::is_open)
    /// 确认连接状态。
    pub fn open(&mut self) -> Result<()> {
        if self.transport.is_none() {
            return Err(ArmError::Configuration);
        }
        self.log("Opening connection to serial port");
        if let Some(Err(e)) = self.transport.as_mut().map(|t| t.open()) {
            error!("Error opening serial port: {}", e);
        }
        self.initialize()?;
        Ok(())
    }

    /// 关闭串口
    pub fn close(&mut self) -> Result<()> {
        if self.transport.is_none() {
            return Err(ArmError::Configuration);
        }
        self.log("Closing connection to serial port");
        if let Some(transport) = self.transport.as_mut() {
            transport.close();
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.transport.as_ref().is_some_and(|t| t.is_open())
    }

    // ==================== 初始化序列 ====================

    /// 初始化序列：使能电机 → 移动到限位位置 → 执行器复位
    ///
    /// 每个会话只执行一次，之后的调用不发送任何数据并返回 `Ok(0)`。
    /// 该标志在关闭/重新打开串口后也不会重置。
    pub fn initialize(&mut self) -> Result<usize> {
        if self.initialized {
            self.log("Already initialized");
            return Ok(0);
        }

        // 等待串口接收端稳定
        if !self.settle_delay.is_zero() {
            spin_sleep::sleep(self.settle_delay);
        }

        let mut sent = self.enable_motors()?;
        sent += self.end_stop()?;
        sent += self.attachment_low()?;

        self.initialized = true;
        self.log("Initialization complete");
        Ok(sent)
    }

    // ==================== 电机 / 执行器 ====================

    /// 激活执行器（夹爪夹紧 / 风扇开启）
    pub fn attachment_high(&mut self) -> Result<usize> {
        let command = self.attachment.activate();
        self.send_command(&command)
    }

    /// 复位执行器（夹爪张开 / 风扇关闭）
    pub fn attachment_low(&mut self) -> Result<usize> {
        let command = self.attachment.deactivate();
        self.send_command(&command)
    }

    pub fn enable_motors(&mut self) -> Result<usize> {
        self.send_command(&GcodeCommand::EnableMotors)
    }

    pub fn disable_motors(&mut self) -> Result<usize> {
        self.send_command(&GcodeCommand::DisableMotors)
    }

    /// 夹紧夹爪（辅助电机转动 `steps` 步）
    pub fn close_gripper(&mut self, steps: u32) -> Result<usize> {
        self.send_command(&GcodeCommand::CloseGripper { steps })
    }

    /// 张开夹爪
    pub fn open_gripper(&mut self, steps: u32) -> Result<usize> {
        self.send_command(&GcodeCommand::OpenGripper { steps })
    }

    pub fn enable_fan(&mut self) -> Result<usize> {
        self.send_command(&GcodeCommand::EnableFan)
    }

    pub fn disable_fan(&mut self) -> Result<usize> {
        self.send_command(&GcodeCommand::DisableFan)
    }

    // ==================== 底层发送 ====================

    /// 发送类型化指令，返回写入的字节数
    ///
    /// 运动指令写入成功后，指令中出现的坐标会更新到会话位置；
    /// 值为 `None` 的坐标保持不变。
    pub fn send_command(&mut self, command: &GcodeCommand) -> Result<usize> {
        let written = self.transmit(&command.to_string())?;
        if let Some(target) = command.target() {
            self.commit(
                Axis::ALL
                    .into_iter()
                    .filter_map(|axis| target.get(axis).map(|v| (axis, v))),
            );
        }
        Ok(written)
    }

    /// 发送原始文本指令
    ///
    /// 发送前按空白分割扫描坐标片段（`X`/`Y`/`Z` 更新坐标，`G` 跳过，
    /// 其他片段终止扫描），写入成功后提交扫描到的坐标。
    /// 坐标片段无法解析时返回 [`ArmError::Protocol`]，不会发送任何数据。
    pub fn send_raw(&mut self, command: &str) -> Result<usize> {
        let updates = scan_axis_tokens(command)?;
        let written = self.transmit(command)?;
        self.commit(updates);
        Ok(written)
    }

    /// 追加结束符、编码并写入串口
    fn transmit(&mut self, command: &str) -> Result<usize> {
        let transport = self.transport.as_mut().ok_or(ArmError::Configuration)?;
        if !transport.is_open() {
            return Err(ArmError::Connection);
        }

        let line = frame_line(command);
        let written = transport.write(line.as_bytes())?;
        self.log(format_args!("Sent {:?}", line));
        Ok(written)
    }

    fn commit(&mut self, updates: impl IntoIterator<Item = (Axis, AxisValue)>) {
        for (axis, value) in updates {
            self.position.set(axis, value);
        }
    }

    fn log(&self, message: impl fmt::Display) {
        if self.verbose {
            info!("RobotArm: {}", message);
        } else {
            debug!("RobotArm: {}", message);
        }
    }

    fn describe_transport(&self) -> String {
        self.transport
            .as_ref()
            .map_or_else(|| String::from("None"), |t| t.describe())
    }
}

impl Drop for RobotArm {
    fn drop(&mut self) {
        if let Some(transport) = self.transport.as_mut() {
            if transport.is_open() {
                transport.close();
            }
        }
    }
}

impl fmt::Display for RobotArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotArm, {}", self.describe_transport())
    }
}

impl fmt::Debug for RobotArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RobotArm")
            .field("attachment", &self.attachment)
            .field("transport", &self.describe_transport())
            .field("position", &self.position)
            .field("initialized", &self.initialized)
            .field("coarse_step", &self.coarse_step)
            .field("fine_step", &self.fine_step)
            .finish()
    }
}
