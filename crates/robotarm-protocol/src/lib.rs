//! # Robot Arm Protocol
//!
//! 机械臂串口 G-code 协议定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `constants`: 指令助记符与协议常量
//! - `value`: 坐标数值类型（整数 / 小数）与位置
//! - `command`: 指令构建与编码
//! - `preset`: 预设位置表
//! - `scan`: 原始指令中的坐标提取
//!
//! ## 帧格式
//!
//! 每条指令为一行 ASCII 文本，以 `\r\n` 结尾，UTF-8 编码。
//! 接收端（Arduino）收到 `\r` 时开始执行，`\n` 用于跳过一次多余的循环。

pub mod command;
pub mod constants;
pub mod preset;
pub mod scan;
pub mod value;

// 重新导出常用类型
pub use command::{GcodeCommand, frame_line};
pub use constants::*;
pub use preset::Preset;
pub use scan::scan_axis_tokens;
pub use value::{Axis, AxisValue, Position};

use thiserror::Error;

/// 协议层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// 坐标片段无法解析为整数或小数（如 `Xabc`）
    #[error("Invalid axis value in token '{token}'")]
    InvalidAxisValue { token: String },

    /// 未知的预设位置名
    #[error("Unknown preset position: '{name}'")]
    UnknownPreset { name: String },
}
