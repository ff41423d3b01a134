//! 原始指令的坐标提取
//!
//! 直接发送文本指令时，需要从中提取坐标以更新会话记录的位置。
//!
//! # 扫描规则
//!
//! 按空白分割后逐个检查片段首字母：
//! - `X` / `Y` / `Z`：其余部分解析为坐标值（先整数后小数）
//! - `G`：忽略，继续扫描
//! - 其他字母：立即停止扫描，后续片段不再检查
//!
//! 例如 `G1 X10 Y20 ? Z30` 只会提取 X 和 Y。

use crate::ProtocolError;
use crate::value::{Axis, AxisValue};

/// 扫描指令文本中的坐标片段
///
/// 任一坐标片段无法解析时返回错误，此时调用方不应更新任何坐标。
pub fn scan_axis_tokens(command: &str) -> Result<Vec<(Axis, AxisValue)>, ProtocolError> {
    let mut updates = Vec::new();

    for token in command.split_whitespace() {
        let mut chars = token.chars();
        let Some(head) = chars.next() else {
            continue;
        };

        if let Some(axis) = Axis::from_letter(head) {
            let value = chars
                .as_str()
                .parse::<AxisValue>()
                .map_err(|_| ProtocolError::InvalidAxisValue {
                    token: token.to_string(),
                })?;
            updates.push((axis, value));
        } else if head == 'G' {
            continue;
        } else {
            break;
        }
    }

    Ok(updates)
}
