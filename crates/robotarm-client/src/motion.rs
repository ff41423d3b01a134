//! 运动接口
//!
//! 绝对运动、相对运动、预设位置和粗调/微调步进。

use crate::arm::RobotArm;
use crate::error::{ArmError, Result};
use robotarm_protocol::{Axis, AxisValue, GcodeCommand, Preset};
use tracing::debug;

/// 步进幅度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSize {
    Coarse,
    Fine,
}

/// 步进方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl RobotArm {
    /// 运动到绝对位置
    ///
    /// 省略的坐标沿用当前记录值；若该轴从未设置过，则按字面量 `None` 编码。
    /// 整数坐标不带小数点，小数坐标保留一位小数。
    pub fn send_absolute(
        &mut self,
        x: Option<AxisValue>,
        y: Option<AxisValue>,
        z: Option<AxisValue>,
    ) -> Result<usize> {
        let current = self.position();
        self.send_command(&GcodeCommand::LinearMove {
            x: x.or(current.x),
            y: y.or(current.y),
            z: z.or(current.z),
        })
    }

    /// 相对运动
    ///
    /// 增量为 `None` 或数值为零（`0` / `0.0`）时该轴保持不动。
    /// 非零增量作用在未知坐标上时返回 [`ArmError::UnknownPosition`]。
    pub fn send_relative(
        &mut self,
        dx: Option<AxisValue>,
        dy: Option<AxisValue>,
        dz: Option<AxisValue>,
    ) -> Result<usize> {
        let x = self.offset_axis(Axis::X, dx)?;
        let y = self.offset_axis(Axis::Y, dy)?;
        let z = self.offset_axis(Axis::Z, dz)?;
        self.send_absolute(x, y, z)
    }

    fn offset_axis(&self, axis: Axis, delta: Option<AxisValue>) -> Result<Option<AxisValue>> {
        let current = self.position().get(axis);
        match delta {
            Some(d) if !d.is_zero() => {
                let base = current.ok_or(ArmError::UnknownPosition { axis })?;
                Ok(Some(base + d))
            },
            _ => Ok(current),
        }
    }

    // ==================== 预设位置 ====================

    /// 运动到预设位置
    pub fn move_to(&mut self, preset: Preset) -> Result<usize> {
        let target = preset.target();
        self.send_absolute(target.x, target.y, target.z)
    }

    /// 按名称运动到预设位置
    ///
    /// 未知名称不报错，返回 `Ok(0)` 且不发送任何数据。
    pub fn move_to_named(&mut self, name: &str) -> Result<usize> {
        match name.parse::<Preset>() {
            Ok(preset) => self.move_to(preset),
            Err(e) => {
                debug!("{}, ignoring", e);
                Ok(0)
            },
        }
    }

    /// (0, 120, 120)
    pub fn home(&mut self) -> Result<usize> {
        self.move_to(Preset::Home)
    }

    /// (0.0, 19.5, 134.0)
    pub fn end_stop(&mut self) -> Result<usize> {
        self.move_to(Preset::EndStop)
    }

    /// (0, 100, 0)
    pub fn bottom(&mut self) -> Result<usize> {
        self.move_to(Preset::Bottom)
    }

    /// (0, 40, 70)
    pub fn rest(&mut self) -> Result<usize> {
        self.move_to(Preset::Rest)
    }

    // ==================== 步进 ====================

    pub fn coarse_step(&self) -> AxisValue {
        self.coarse_step
    }

    pub fn fine_step(&self) -> AxisValue {
        self.fine_step
    }

    pub fn set_coarse_step(&mut self, step: impl Into<AxisValue>) {
        self.coarse_step = step.into();
    }

    pub fn set_fine_step(&mut self, step: impl Into<AxisValue>) {
        self.fine_step = step.into();
    }

    /// 沿单轴移动一个粗调或微调步长
    pub fn jog(&mut self, axis: Axis, size: StepSize, direction: Direction) -> Result<usize> {
        let magnitude = match size {
            StepSize::Coarse => self.coarse_step,
            StepSize::Fine => self.fine_step,
        };
        let delta = match direction {
            Direction::Positive => magnitude,
            Direction::Negative => magnitude.negated(),
        };
        match axis {
            Axis::X => self.send_relative(Some(delta), None, None),
            Axis::Y => self.send_relative(None, Some(delta), None),
            Axis::Z => self.send_relative(None, None, Some(delta)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::Attachment;
    use robotarm_protocol::Position;
    use robotarm_serial::MockTransport;

    fn open_arm() -> (RobotArm, MockTransport) {
        let mock = MockTransport::opened();
        let arm = RobotArm::new(Attachment::gripper(), Some(Box::new(mock.clone())));
        (arm, mock)
    }

    #[test]
    fn test_absolute_from_fresh_session() {
        let (mut arm, mock) = open_arm();
        let written = arm
            .send_absolute(
                Some(AxisValue::Integer(0)),
                Some(AxisValue::Integer(120)),
                Some(AxisValue::Integer(120)),
            )
            .unwrap();

        assert_eq!(mock.written_lines(), vec!["G1 X0 Y120 Z120\r\n"]);
        assert_eq!(written, "G1 X0 Y120 Z120\r\n".len());
        assert_eq!(arm.position(), Position::new(0, 120, 120));
    }

    #[test]
    fn test_absolute_defaults_unset_axes_to_none_literal() {
        let (mut arm, mock) = open_arm();
        arm.send_absolute(None, Some(AxisValue::Fractional(19.5)), None)
            .unwrap();

        assert_eq!(mock.written_lines(), vec!["G1 XNone Y19.5 ZNone\r\n"]);
        let pos = arm.position();
        assert_eq!(pos.x, None);
        assert_eq!(pos.y, Some(AxisValue::Fractional(19.5)));
        assert_eq!(pos.z, None);
    }

    #[test]
    fn test_absolute_defaults_to_tracked_position() {
        let (mut arm, mock) = open_arm();
        arm.home().unwrap();
        arm.send_absolute(Some(AxisValue::Integer(30)), None, None)
            .unwrap();

        assert_eq!(mock.written_lines()[1], "G1 X30 Y120 Z120\r\n");
    }

    #[test]
    fn test_relative_zero_delta_holds_axis() {
        let (mut arm, mock) = open_arm();
        arm.end_stop().unwrap();
        arm.send_relative(None, None, Some(AxisValue::Integer(0)))
            .unwrap();

        assert_eq!(mock.written_lines()[1], "G1 X0.0 Y19.5 Z134.0\r\n");
        assert_eq!(arm.position(), Preset::EndStop.target());
    }

    #[test]
    fn test_relative_fractional_zero_delta_holds_axis() {
        let (mut arm, mock) = open_arm();
        arm.home().unwrap();
        arm.send_relative(Some(AxisValue::Fractional(0.0)), Some(AxisValue::Integer(-20)), None)
            .unwrap();

        assert_eq!(mock.written_lines()[1], "G1 X0 Y100 Z120\r\n");
    }

    #[test]
    fn test_relative_on_unknown_axis() {
        let (mut arm, mock) = open_arm();
        let err = arm
            .send_relative(Some(AxisValue::Integer(5)), None, None)
            .unwrap_err();
        assert!(matches!(err, ArmError::UnknownPosition { axis: Axis::X }));
        assert_eq!(mock.bytes_written(), 0);
    }

    #[test]
    fn test_relative_mixed_types() {
        let (mut arm, mock) = open_arm();
        arm.end_stop().unwrap();
        arm.send_relative(None, Some(AxisValue::Integer(5)), None)
            .unwrap();

        assert_eq!(mock.written_lines()[1], "G1 X0.0 Y24.5 Z134.0\r\n");
    }

    #[test]
    fn test_presets() {
        let (mut arm, mock) = open_arm();
        arm.move_to(Preset::Home).unwrap();
        arm.move_to(Preset::EndStop).unwrap();
        arm.move_to(Preset::Bottom).unwrap();
        arm.move_to(Preset::Rest).unwrap();

        assert_eq!(
            mock.written_lines(),
            vec![
                "G1 X0 Y120 Z120\r\n",
                "G1 X0.0 Y19.5 Z134.0\r\n",
                "G1 X0 Y100 Z0\r\n",
                "G1 X0 Y40 Z70\r\n",
            ]
        );
        assert_eq!(arm.position(), Position::new(0, 40, 70));
    }

    #[test]
    fn test_move_to_named() {
        let (mut arm, mock) = open_arm();
        assert!(arm.move_to_named("bottom").unwrap() > 0);
        assert_eq!(arm.move_to_named("nowhere").unwrap(), 0);
        assert_eq!(mock.written_lines(), vec!["G1 X0 Y100 Z0\r\n"]);
    }

    #[test]
    fn test_jog_coarse_and_fine() {
        let (mut arm, mock) = open_arm();
        arm.bottom().unwrap();

        arm.jog(Axis::Z, StepSize::Coarse, Direction::Negative)
            .unwrap();
        arm.jog(Axis::Z, StepSize::Fine, Direction::Positive)
            .unwrap();
        arm.jog(Axis::X, StepSize::Fine, Direction::Negative)
            .unwrap();

        let lines = mock.written_lines();
        assert_eq!(lines[1], "G1 X0 Y100 Z-20\r\n");
        assert_eq!(lines[2], "G1 X0 Y100 Z-15\r\n");
        assert_eq!(lines[3], "G1 X-5 Y100 Z-15\r\n");
    }

    #[test]
    fn test_custom_step_sizes() {
        let (mut arm, mock) = open_arm();
        assert_eq!(arm.coarse_step(), AxisValue::Integer(20));
        assert_eq!(arm.fine_step(), AxisValue::Integer(5));

        arm.set_coarse_step(50i64);
        arm.set_fine_step(0.5);
        arm.home().unwrap();
        arm.jog(Axis::Y, StepSize::Coarse, Direction::Positive)
            .unwrap();
        arm.jog(Axis::Y, StepSize::Fine, Direction::Negative)
            .unwrap();

        let lines = mock.written_lines();
        assert_eq!(lines[1], "G1 X0 Y170 Z120\r\n");
        assert_eq!(lines[2], "G1 X0 Y169.5 Z120\r\n");
    }

    #[test]
    fn test_zero_step_collapses_to_hold() {
        let (mut arm, mock) = open_arm();
        arm.rest().unwrap();
        arm.set_fine_step(0i64);
        arm.jog(Axis::X, StepSize::Fine, Direction::Positive)
            .unwrap();
        assert_eq!(mock.written_lines()[1], "G1 X0 Y40 Z70\r\n");
    }
}
