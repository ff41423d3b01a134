//! 预设位置
//!
//! | 名称 | 位置 |
//! |---|---|
//! | `home` | (0, 120, 120) |
//! | `end_stop` | (0.0, 19.5, 134.0) |
//! | `bottom` | (0, 100, 0) |
//! | `rest` | (0, 40, 70) |

use crate::ProtocolError;
use crate::value::Position;
use std::fmt;
use std::str::FromStr;

/// 预设位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preset {
    #[default]
    Home,
    /// 限位开关位置，初始化序列会移动到这里
    EndStop,
    Bottom,
    Rest,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Home, Preset::EndStop, Preset::Bottom, Preset::Rest];

    /// 预设对应的目标位置
    pub fn target(self) -> Position {
        match self {
            Preset::Home => Position::new(0, 120, 120),
            Preset::EndStop => Position::new(0.0, 19.5, 134.0),
            Preset::Bottom => Position::new(0, 100, 0),
            Preset::Rest => Position::new(0, 40, 70),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Home => "home",
            Preset::EndStop => "end_stop",
            Preset::Bottom => "bottom",
            Preset::Rest => "rest",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ProtocolError::UnknownPreset {
                name: s.to_string(),
            })
    }
}
