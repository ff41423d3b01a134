//! 坐标数值类型
//!
//! 机械臂坐标既可以是整数也可以是小数，且编码格式取决于具体类型：
//! 整数不带小数点，小数固定保留一位小数。因此这里用带标签的
//! [`AxisValue`] 保留类型信息，而不是统一转换为 `f64`。

use crate::ProtocolError;
use crate::constants::UNSET_AXIS_LITERAL;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// 全部坐标轴（按指令中的顺序）
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// 指令中的轴字母
    pub fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }

    /// 从指令字母解析坐标轴（区分大小写，协议只使用大写）
    pub fn from_letter(letter: char) -> Option<Axis> {
        match letter {
            'X' => Some(Axis::X),
            'Y' => Some(Axis::Y),
            'Z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// 单轴坐标值
///
/// # 编码规则
///
/// - `Integer(120)` → `120`
/// - `Fractional(19.5)` → `19.5`
/// - `Fractional(134.0)` → `134.0`（小数始终保留一位）
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisValue {
    Integer(i64),
    Fractional(f64),
}

impl AxisValue {
    /// 是否为零（`0` 或 `0.0`）
    ///
    /// 相对运动中，零增量与"无增量"等价。
    pub fn is_zero(&self) -> bool {
        match *self {
            AxisValue::Integer(v) => v == 0,
            AxisValue::Fractional(v) => v == 0.0,
        }
    }

    /// 转换为 `f64`
    pub fn as_f64(&self) -> f64 {
        match *self {
            AxisValue::Integer(v) => v as f64,
            AxisValue::Fractional(v) => v,
        }
    }

    /// 取反（用于负方向步进）
    pub fn negated(self) -> AxisValue {
        match self {
            AxisValue::Integer(v) => AxisValue::Integer(v.saturating_neg()),
            AxisValue::Fractional(v) => AxisValue::Fractional(-v),
        }
    }
}

impl Add for AxisValue {
    type Output = AxisValue;

    /// 整数 + 整数 仍为整数；只要有一方是小数，结果即为小数
    fn add(self, rhs: AxisValue) -> AxisValue {
        match (self, rhs) {
            (AxisValue::Integer(a), AxisValue::Integer(b)) => {
                AxisValue::Integer(a.saturating_add(b))
            },
            (a, b) => AxisValue::Fractional(a.as_f64() + b.as_f64()),
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Integer(v) => write!(f, "{}", v),
            AxisValue::Fractional(v) => write!(f, "{:.1}", v),
        }
    }
}

impl FromStr for AxisValue {
    type Err = ProtocolError;

    /// 两阶段解析：先尝试整数，失败后再尝试小数
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(v) = s.parse::<i64>() {
            return Ok(AxisValue::Integer(v));
        }
        s.parse::<f64>()
            .map(AxisValue::Fractional)
            .map_err(|_| ProtocolError::InvalidAxisValue {
                token: s.to_string(),
            })
    }
}

impl From<i64> for AxisValue {
    fn from(v: i64) -> Self {
        AxisValue::Integer(v)
    }
}

impl From<i32> for AxisValue {
    fn from(v: i32) -> Self {
        AxisValue::Integer(v as i64)
    }
}

impl From<u32> for AxisValue {
    fn from(v: u32) -> Self {
        AxisValue::Integer(v as i64)
    }
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Fractional(v)
    }
}

/// 编码可能未知的坐标
///
/// 未知坐标（`None`）按字面量 `None` 编码。
pub fn render_axis(value: Option<AxisValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => UNSET_AXIS_LITERAL.to_string(),
    }
}

/// 机械臂末端的（推测）位置
///
/// 每个轴独立记录，在发送任何运动指令前均为 `None`。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Option<AxisValue>,
    pub y: Option<AxisValue>,
    pub z: Option<AxisValue>,
}

impl Position {
    /// 未知位置
    pub const UNSET: Position = Position {
        x: None,
        y: None,
        z: None,
    };

    /// 创建三轴均已知的位置
    pub fn new(x: impl Into<AxisValue>, y: impl Into<AxisValue>, z: impl Into<AxisValue>) -> Self {
        Position {
            x: Some(x.into()),
            y: Some(y.into()),
            z: Some(z.into()),
        }
    }

    pub fn get(&self, axis: Axis) -> Option<AxisValue> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn set(&mut self, axis: Axis, value: AxisValue) {
        match axis {
            Axis::X => self.x = Some(value),
            Axis::Y => self.y = Some(value),
            Axis::Z => self.z = Some(value),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            render_axis(self.x),
            render_axis(self.y),
            render_axis(self.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_renders_without_decimal_point() {
        assert_eq!(AxisValue::Integer(120).to_string(), "120");
        assert_eq!(AxisValue::Integer(-40).to_string(), "-40");
        assert_eq!(AxisValue::Integer(0).to_string(), "0");
    }

    #[test]
    fn test_fractional_renders_one_decimal_digit() {
        assert_eq!(AxisValue::Fractional(19.5).to_string(), "19.5");
        assert_eq!(AxisValue::Fractional(134.0).to_string(), "134.0");
        assert_eq!(AxisValue::Fractional(0.0).to_string(), "0.0");
        assert_eq!(AxisValue::Fractional(12.34).to_string(), "12.3");
    }

    #[test]
    fn test_parse_prefers_integer() {
        assert_eq!("10".parse::<AxisValue>().unwrap(), AxisValue::Integer(10));
        assert_eq!("-3".parse::<AxisValue>().unwrap(), AxisValue::Integer(-3));
        assert_eq!(
            "19.5".parse::<AxisValue>().unwrap(),
            AxisValue::Fractional(19.5)
        );
        assert_eq!(
            "134.0".parse::<AxisValue>().unwrap(),
            AxisValue::Fractional(134.0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "abc".parse::<AxisValue>().unwrap_err();
        assert_eq!(
            err,
            ProtocolError::InvalidAxisValue {
                token: "abc".to_string()
            }
        );
        assert!("".parse::<AxisValue>().is_err());
    }

    #[test]
    fn test_add_keeps_integer_when_possible() {
        assert_eq!(
            AxisValue::Integer(100) + AxisValue::Integer(-20),
            AxisValue::Integer(80)
        );
        assert_eq!(
            AxisValue::Fractional(19.5) + AxisValue::Integer(5),
            AxisValue::Fractional(24.5)
        );
        assert_eq!(
            AxisValue::Integer(1) + AxisValue::Fractional(0.5),
            AxisValue::Fractional(1.5)
        );
    }

    #[test]
    fn test_is_zero() {
        assert!(AxisValue::Integer(0).is_zero());
        assert!(AxisValue::Fractional(0.0).is_zero());
        assert!(AxisValue::Fractional(-0.0).is_zero());
        assert!(!AxisValue::Integer(1).is_zero());
        assert!(!AxisValue::Fractional(0.1).is_zero());
    }

    #[test]
    fn test_position_display_with_unset_axes() {
        let mut pos = Position::UNSET;
        assert_eq!(pos.to_string(), "(None, None, None)");

        pos.set(Axis::Y, AxisValue::Fractional(19.5));
        assert_eq!(pos.to_string(), "(None, 19.5, None)");
        assert_eq!(pos.get(Axis::Y), Some(AxisValue::Fractional(19.5)));
        assert_eq!(pos.get(Axis::X), None);
    }

    #[test]
    fn test_axis_letters() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_letter(axis.letter()), Some(axis));
        }
        assert_eq!(Axis::from_letter('G'), None);
        assert_eq!(Axis::from_letter('x'), None);
    }

    proptest! {
        #[test]
        fn prop_integer_matches_plain_decimal(v in any::<i64>()) {
            prop_assert_eq!(AxisValue::Integer(v).to_string(), v.to_string());
        }

        #[test]
        fn prop_fractional_has_exactly_one_decimal_digit(v in -100_000.0f64..100_000.0) {
            let text = AxisValue::Fractional(v).to_string();
            let (_, frac) = text.split_once('.').expect("fractional must contain a decimal point");
            prop_assert_eq!(frac.len(), 1);
        }

        #[test]
        fn prop_integer_text_parses_back_to_integer(v in any::<i64>()) {
            prop_assert_eq!(v.to_string().parse::<AxisValue>().unwrap(), AxisValue::Integer(v));
        }
    }
}
