//! 指令构建
//!
//! 提供类型化的 G-code 指令以及行编码（追加 `\r\n` 并转为 UTF-8 字节）。

use crate::constants::*;
use crate::value::{AxisValue, Position, render_axis};
use std::fmt;

/// 机械臂支持的 G-code 指令
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GcodeCommand {
    /// `M17`
    EnableMotors,
    /// `M18`
    DisableMotors,
    /// `M106`
    EnableFan,
    /// `M107`
    DisableFan,
    /// `M3 T{steps}`
    CloseGripper { steps: u32 },
    /// `M5 T{steps}`
    OpenGripper { steps: u32 },
    /// `G1 X{x} Y{y} Z{z}`
    ///
    /// 坐标为 `None` 时按字面量 `None` 编码。
    LinearMove {
        x: Option<AxisValue>,
        y: Option<AxisValue>,
        z: Option<AxisValue>,
    },
}

impl GcodeCommand {
    /// 运动到指定位置
    pub fn linear_move(target: Position) -> Self {
        GcodeCommand::LinearMove {
            x: target.x,
            y: target.y,
            z: target.z,
        }
    }

    /// 指令的目标位置（仅运动指令）
    pub fn target(&self) -> Option<Position> {
        match *self {
            GcodeCommand::LinearMove { x, y, z } => Some(Position { x, y, z }),
            _ => None,
        }
    }

    /// 编码为带结束符的字节
    pub fn encode_line(&self) -> Vec<u8> {
        frame_line(&self.to_string()).into_bytes()
    }
}

impl fmt::Display for GcodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GcodeCommand::EnableMotors => f.write_str(GCODE_ENABLE_MOTORS),
            GcodeCommand::DisableMotors => f.write_str(GCODE_DISABLE_MOTORS),
            GcodeCommand::EnableFan => f.write_str(GCODE_ENABLE_FAN),
            GcodeCommand::DisableFan => f.write_str(GCODE_DISABLE_FAN),
            GcodeCommand::CloseGripper { steps } => write!(f, "{} T{}", GCODE_CLOSE_GRIPPER, steps),
            GcodeCommand::OpenGripper { steps } => write!(f, "{} T{}", GCODE_OPEN_GRIPPER, steps),
            GcodeCommand::LinearMove { x, y, z } => write!(
                f,
                "{} X{} Y{} Z{}",
                GCODE_LINEAR_MOVE,
                render_axis(x),
                render_axis(y),
                render_axis(z)
            ),
        }
    }
}

/// 为一行指令追加结束符
pub fn frame_line(command: &str) -> String {
    let mut line = String::with_capacity(command.len() + LINE_TERMINATOR.len());
    line.push_str(command);
    line.push_str(LINE_TERMINATOR);
    line
}
