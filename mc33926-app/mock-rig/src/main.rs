use std::convert::Infallible;
use std::path::PathBuf;
use std::thread::sleep;
use std::time::Duration;

use clap::Parser;
use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use mc33926_core::driver::MotorChannel;
use serde::Deserialize;
use tracing::info;

#[derive(Parser)]
#[clap(version = "1.0")]
struct Opts {
    /// JSON step script; the built-in carrier-board walkthrough runs when omitted
    #[clap(long)]
    script: Option<PathBuf>,
    /// Simulated native duty range of the pins
    #[clap(long, default_value_t = 255)]
    max_duty: u16,
}

/// One replay step: a speed command, optional encoder pulses, optional dwell.
#[derive(Debug, Deserialize)]
struct Step {
    set: i16,
    #[serde(default)]
    pulses: i32,
    #[serde(default)]
    hold_ms: u64,
}

/// Pin double that logs every duty write instead of touching hardware.
struct TracePin {
    name: &'static str,
    max: u16,
}

impl ErrorType for TracePin {
    type Error = Infallible;
}

impl SetDutyCycle for TracePin {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        info!("{}: duty {}/{}", self.name, duty, self.max);
        Ok(())
    }
}

/// Forward half speed, an over-range reverse command, stop, and a net pulse
/// count of 3.
fn default_script() -> Vec<Step> {
    vec![
        Step {
            set: 128,
            pulses: 0,
            hold_ms: 500,
        },
        Step {
            set: -300,
            pulses: 5,
            hold_ms: 500,
        },
        Step {
            set: 0,
            pulses: -2,
            hold_ms: 0,
        },
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts: Opts = Opts::parse();
    let steps = match &opts.script {
        Some(path) => {
            let raw = std::fs::read_to_string(path).unwrap();
            serde_json::from_str(&raw).unwrap()
        }
        None => default_script(),
    };

    let in1 = TracePin {
        name: "in1",
        max: opts.max_duty,
    };
    let in2 = TracePin {
        name: "in2",
        max: opts.max_duty,
    };
    let mut channel = MotorChannel::new(in1, in2).unwrap();

    for step in &steps {
        channel.set(step.set).unwrap();
        channel.add_to_count(step.pulses);
        info!("drive: {:?}", channel.drive());
        if step.hold_ms > 0 {
            sleep(Duration::from_millis(step.hold_ms));
        }
    }

    info!("final pulse count: {}", channel.count());
}
