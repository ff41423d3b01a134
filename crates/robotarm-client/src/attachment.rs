//! 末端执行器抽象
//!
//! 同样的两个逻辑动作在不同执行器上对应不同指令：
//!
//! | 动作 | 夹爪 | 风扇 |
//! |---|---|---|
//! | 激活（high） | 夹紧 `M3 T{n}` | 开风扇 `M106` |
//! | 复位（low） | 张开 `M5 T{n}` | 关风扇 `M107` |

use crate::error::ArmError;
use robotarm_protocol::{DEFAULT_GRIPPER_STEPS, GcodeCommand};
use std::fmt;
use std::str::FromStr;

/// 夹爪类型码
pub const ATTACHMENT_GRIPPER: u8 = 0;

/// 风扇类型码
pub const ATTACHMENT_FAN: u8 = 1;

/// 执行器动作映射
pub trait Actuator {
    /// 激活（"high"）
    fn activate(&self) -> GcodeCommand;

    /// 复位到中性状态（"low"），初始化序列会调用
    fn deactivate(&self) -> GcodeCommand;
}

/// 夹爪
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gripper {
    /// 辅助电机每次动作的步数
    pub steps: u32,
}

impl Gripper {
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }
}

impl Default for Gripper {
    fn default() -> Self {
        Self::new(DEFAULT_GRIPPER_STEPS)
    }
}

impl Actuator for Gripper {
    fn activate(&self) -> GcodeCommand {
        GcodeCommand::CloseGripper { steps: self.steps }
    }

    fn deactivate(&self) -> GcodeCommand {
        GcodeCommand::OpenGripper { steps: self.steps }
    }
}

/// 风扇
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fan;

impl Actuator for Fan {
    fn activate(&self) -> GcodeCommand {
        GcodeCommand::EnableFan
    }

    fn deactivate(&self) -> GcodeCommand {
        GcodeCommand::DisableFan
    }
}

/// 安装在机械臂上的末端执行器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    Gripper(Gripper),
    Fan(Fan),
}

impl Attachment {
    /// 默认步数的夹爪
    pub fn gripper() -> Self {
        Attachment::Gripper(Gripper::default())
    }

    pub fn fan() -> Self {
        Attachment::Fan(Fan)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attachment::Gripper(_) => "gripper",
            Attachment::Fan(_) => "fan",
        }
    }
}

impl Default for Attachment {
    fn default() -> Self {
        Attachment::gripper()
    }
}

impl Actuator for Attachment {
    fn activate(&self) -> GcodeCommand {
        match self {
            Attachment::Gripper(g) => g.activate(),
            Attachment::Fan(f) => f.activate(),
        }
    }

    fn deactivate(&self) -> GcodeCommand {
        match self {
            Attachment::Gripper(g) => g.deactivate(),
            Attachment::Fan(f) => f.deactivate(),
        }
    }
}

impl fmt::Display for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Attachment {
    type Error = ArmError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            ATTACHMENT_GRIPPER => Ok(Attachment::gripper()),
            ATTACHMENT_FAN => Ok(Attachment::fan()),
            _ => Err(ArmError::UnsupportedAttachment {
                tag: tag.to_string(),
            }),
        }
    }
}

impl FromStr for Attachment {
    type Err = ArmError;

    /// 按名称解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gripper" => Ok(Attachment::gripper()),
            "fan" => Ok(Attachment::fan()),
            _ => Err(ArmError::UnsupportedAttachment { tag: s.to_string() }),
        }
    }
}
