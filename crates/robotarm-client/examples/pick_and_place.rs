//! 抓取-放置演示
//!
//! 连接机械臂，移动到底部逐步下探，夹紧后回到限位位置再松开。
//!
//! ```bash
//! # 自动发现 USB 串口
//! cargo run -p robotarm-client --example pick_and_place
//!
//! # 指定串口和配置文件
//! cargo run -p robotarm-client --example pick_and_place -- --port /dev/ttyUSB0
//! cargo run -p robotarm-client --example pick_and_place -- --config arm.toml
//! ```

use clap::Parser;
use robotarm_client::{
    ArmConfig, Axis, Direction, Preset, RobotArmBuilder, SerialConfig, StepSize,
};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pick_and_place")]
#[command(about = "Pick-and-place demo for the stepper robot arm")]
struct Args {
    /// 串口设备路径（默认自动发现 USB 串口）
    #[arg(short, long)]
    port: Option<String>,

    /// 会话配置文件（TOML）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 下探时的粗调步数
    #[arg(long, default_value_t = 6)]
    coarse_steps: usize,
}

fn pause(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("robotarm_client=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArmConfig::load(path)?,
        None => ArmConfig::default(),
    };
    if let Some(port) = args.port {
        config.serial = Some(SerialConfig::new(port));
    }

    println!("Connecting to robot arm...");
    let mut arm = RobotArmBuilder::from_config(&config)?.build()?;
    if !arm.is_open() {
        return Err("serial port could not be opened".into());
    }
    println!("Connected: {}", arm);

    arm.move_to(Preset::Home)?;
    pause(500);

    arm.move_to(Preset::Bottom)?;
    for _ in 0..args.coarse_steps {
        arm.jog(Axis::Z, StepSize::Coarse, Direction::Negative)?;
        pause(100);
    }
    arm.jog(Axis::Z, StepSize::Fine, Direction::Negative)?;
    pause(500);

    arm.attachment_high()?;
    pause(500);

    arm.move_to(Preset::EndStop)?;
    pause(500);

    arm.attachment_low()?;
    pause(500);

    println!("Final position: {}", arm.position());
    arm.close()?;
    println!("All done");
    Ok(())
}
