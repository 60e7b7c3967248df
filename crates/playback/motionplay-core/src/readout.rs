//! Textual readout of the current frame.
//!
//! Time is always shown. Every other line comes from the kind's readout list and is only
//! emitted when the frame carries that field.

use serde::{Deserialize, Serialize};

use crate::catalog::MotionDescriptor;
use crate::frame::Frame;

/// Display label and unit for a canonical frame field.
struct FieldInfo {
    name: &'static str,
    label: &'static str,
    unit: &'static str,
}

const fn info(name: &'static str, label: &'static str, unit: &'static str) -> FieldInfo {
    FieldInfo { name, label, unit }
}

const FIELD_INFO: &[FieldInfo] = &[
    info("position", "Position", "m"),
    info("height", "Height", "m"),
    info("position_x", "Position X", "m"),
    info("position_y", "Position Y", "m"),
    info("angle", "Angle", "rad"),
    info("angular_position", "Angular position", "rad"),
    info("velocity", "Velocity", "m/s"),
    info("velocity_x", "Velocity X", "m/s"),
    info("velocity_y", "Velocity Y", "m/s"),
    info("angular_velocity", "Angular velocity", "rad/s"),
    info("acceleration", "Acceleration", "m/s²"),
    info("acceleration_x", "Acceleration X", "m/s²"),
    info("acceleration_y", "Acceleration Y", "m/s²"),
    info("angular_acceleration", "Angular acceleration", "rad/s²"),
    info("force", "Force", "N"),
    info("kinetic_energy", "Kinetic energy", "J"),
    info("potential_energy", "Potential energy", "J"),
    info("elastic_potential_energy", "Elastic potential energy", "J"),
    info("total_energy", "Total energy", "J"),
    info("amplitude", "Amplitude", "m"),
    info("displacement", "Displacement", "m"),
    info("capacitor_voltage", "Capacitor voltage", "V"),
    info("inductor_voltage", "Inductor voltage", "V"),
    info("current", "Current", "A"),
];

fn field_info(name: &str) -> Option<&'static FieldInfo> {
    FIELD_INFO.iter().find(|f| f.name == name)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReadoutLine {
    pub field: String,
    pub label: String,
    pub value: f64,
    pub unit: String,
    /// Pre-formatted `"{label}: {value} {unit}"`.
    pub text: String,
}

impl ReadoutLine {
    fn new(field: &str, label: &str, value: f64, unit: &str, precision: usize) -> Self {
        let text = if unit.is_empty() {
            format!("{label}: {value:.precision$}")
        } else {
            format!("{label}: {value:.precision$} {unit}")
        };
        Self {
            field: field.to_string(),
            label: label.to_string(),
            value,
            unit: unit.to_string(),
            text,
        }
    }
}

/// Lines for `frame`, time first, then the descriptor's readout fields in order.
pub fn build_readout(
    frame: &Frame,
    desc: &MotionDescriptor,
    precision: usize,
) -> Vec<ReadoutLine> {
    let mut lines = Vec::with_capacity(desc.readout.len() + 1);
    lines.push(ReadoutLine::new("time", "Time", frame.time, "s", precision));
    for name in desc.readout {
        let Some(value) = frame.get(name) else { continue };
        // Fields without display metadata are shown by raw name, unitless.
        match field_info(name) {
            Some(fi) => lines.push(ReadoutLine::new(fi.name, fi.label, value, fi.unit, precision)),
            None => lines.push(ReadoutLine::new(name, name, value, "", precision)),
        }
    }
    lines
}

/// Readout as one newline-separated string.
pub fn format_readout(frame: &Frame, desc: &MotionDescriptor, precision: usize) -> String {
    build_readout(frame, desc, precision)
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor;
    use crate::kind::MotionKind;

    #[test]
    fn time_always_and_absent_fields_omitted() {
        let frame = Frame::new(1.5).with("position", 7.5);
        let text = format_readout(&frame, descriptor(MotionKind::UniformLinear), 2);
        assert_eq!(text, "Time: 1.50 s\nPosition: 7.50 m");
    }

    #[test]
    fn follows_descriptor_order_not_frame_order() {
        let frame = Frame::new(0.0)
            .with("velocity", -9.8)
            .with("height", 4.0);
        let lines = build_readout(&frame, descriptor(MotionKind::FreeFall), 2);
        let fields: Vec<&str> = lines.iter().map(|l| l.field.as_str()).collect();
        assert_eq!(fields, vec!["time", "height", "velocity"]);
        assert_eq!(lines[2].text, "Velocity: -9.80 m/s");
    }

    #[test]
    fn labels_are_distinct_per_field() {
        let frame = Frame::new(0.0)
            .with("angle", 0.2)
            .with("angular_position", 0.2);
        let text = format_readout(&frame, descriptor(MotionKind::SimplePendulum), 2);
        assert_eq!(text, "Time: 0.00 s\nAngle: 0.20 rad\nAngular position: 0.20 rad");

        for (i, a) in FIELD_INFO.iter().enumerate() {
            assert!(
                FIELD_INFO[i + 1..].iter().all(|b| b.label != a.label),
                "duplicate label {}",
                a.label
            );
        }
    }

    #[test]
    fn precision_is_configurable() {
        let frame = Frame::new(0.123456);
        let lines = build_readout(&frame, descriptor(MotionKind::Generic), 4);
        assert_eq!(lines[0].text, "Time: 0.1235 s");
    }

    #[test]
    fn circuit_readout_uses_electrical_units() {
        let frame = Frame::new(0.0)
            .with("capacitor_voltage", 4.2)
            .with("current", 0.01);
        let text = format_readout(&frame, descriptor(MotionKind::RcCircuit), 2);
        assert_eq!(text, "Time: 0.00 s\nCapacitor voltage: 4.20 V\nCurrent: 0.01 A");
    }
}
