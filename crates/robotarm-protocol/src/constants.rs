//! 协议常量定义
//!
//! 集中定义所有指令助记符，避免在代码中散落"魔法字符串"。

/// 行结束符
///
/// - `\r`: 接收端开始执行指令
/// - `\n`: 接收端跳过一次循环
///
/// 两个字节缺一不可。
pub const LINE_TERMINATOR: &str = "\r\n";

/// 使能步进电机
pub const GCODE_ENABLE_MOTORS: &str = "M17";

/// 关闭步进电机
pub const GCODE_DISABLE_MOTORS: &str = "M18";

/// 打开风扇
pub const GCODE_ENABLE_FAN: &str = "M106";

/// 关闭风扇
pub const GCODE_DISABLE_FAN: &str = "M107";

/// 夹爪闭合（辅助电机正转），后接 `T{步数}`
pub const GCODE_CLOSE_GRIPPER: &str = "M3";

/// 夹爪张开（辅助电机反转），后接 `T{步数}`
pub const GCODE_OPEN_GRIPPER: &str = "M5";

/// 直线运动到绝对位置
pub const GCODE_LINEAR_MOVE: &str = "G1";

/// 夹爪动作默认步数
pub const DEFAULT_GRIPPER_STEPS: u32 = 10;

/// 未知坐标的文本表示
///
/// 会话尚未发送过任何运动指令时，缺省坐标按此字面量编码。
pub const UNSET_AXIS_LITERAL: &str = "None";
