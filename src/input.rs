//! Breath input boundary
//!
//! The session never looks at the mouse or a serial port directly. It polls a
//! [`BreathSensor`] once per exhale tick and gets back a [`BreathSignal`], a
//! normalised airflow magnitude. Today the only real source is the primary
//! pointer button, which is binary; a hardware airflow sensor reporting on an
//! analog scale plugs in through [`BreathSignal::from_raw`].

use std::collections::VecDeque;

/// Normalised airflow strength in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct BreathSignal(f32);

impl BreathSignal {
    /// No airflow
    pub const NONE: BreathSignal = BreathSignal(0.0);

    /// Maximum airflow
    pub const FULL: BreathSignal = BreathSignal(1.0);

    /// Create a signal, clamping into range. NaN reads as no airflow.
    pub fn new(magnitude: f32) -> Self {
        if magnitude.is_nan() {
            return Self::NONE;
        }
        Self(magnitude.clamp(0.0, 1.0))
    }

    /// Map a raw analog reading (e.g. a 10-bit ADC value, 0-1023) into range
    pub fn from_raw(raw: u16, raw_max: u16) -> Self {
        if raw_max == 0 {
            return Self::NONE;
        }
        Self::new(raw as f32 / raw_max as f32)
    }

    /// Binary mapping used by button-style inputs
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self::FULL
        } else {
            Self::NONE
        }
    }

    pub fn magnitude(self) -> f32 {
        self.0
    }

    /// Whether any airflow is being reported
    pub fn is_active(self) -> bool {
        self.0 > 0.0
    }

    /// Upward movement this signal produces in one tick
    pub fn lift(self, lift_power: f32) -> f32 {
        lift_power * self.0
    }
}

/// Source of breath readings, polled once per exhale tick
pub trait BreathSensor {
    /// Read the current airflow. Called at most once per tick, never buffered.
    fn read_breath_signal(&mut self) -> BreathSignal;
}

/// Binary sensor driven by the primary pointer button
///
/// The UI writes the button state once per frame with [`PointerSensor::set_pressed`];
/// the session reads it back on every tick of that frame.
#[derive(Debug, Clone, Default)]
pub struct PointerSensor {
    pressed: bool,
}

impl PointerSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest button state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl BreathSensor for PointerSensor {
    fn read_breath_signal(&mut self) -> BreathSignal {
        BreathSignal::from_pressed(self.pressed)
    }
}

/// Sensor that replays queued readings, then holds a fallback value
///
/// Used for headless sessions and scenario replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    queued: VecDeque<BreathSignal>,
    fallback: BreathSignal,
    reads: usize,
}

impl ScriptedSensor {
    /// A sensor that always reports `signal`
    pub fn constant(signal: BreathSignal) -> Self {
        Self {
            fallback: signal,
            ..Default::default()
        }
    }

    /// A sensor that reports `readings` in order, then nothing
    pub fn from_readings(readings: impl IntoIterator<Item = BreathSignal>) -> Self {
        Self {
            queued: readings.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Change the value reported once the queue is drained
    pub fn set_fallback(&mut self, signal: BreathSignal) {
        self.fallback = signal;
    }

    /// Number of times the sensor has been polled
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl BreathSensor for ScriptedSensor {
    fn read_breath_signal(&mut self) -> BreathSignal {
        self.reads += 1;
        self.queued.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_clamps() {
        assert_eq!(BreathSignal::new(1.7), BreathSignal::FULL);
        assert_eq!(BreathSignal::new(-0.3), BreathSignal::NONE);
        assert_eq!(BreathSignal::new(f32::NAN), BreathSignal::NONE);
        assert!(!BreathSignal::NONE.is_active());
    }

    #[test]
    fn test_raw_scale_mapping() {
        assert_eq!(BreathSignal::from_raw(0, 1023), BreathSignal::NONE);
        assert_eq!(BreathSignal::from_raw(1023, 1023), BreathSignal::FULL);
        let half = BreathSignal::from_raw(512, 1024);
        assert!((half.magnitude() - 0.5).abs() < f32::EPSILON);
        assert_eq!(BreathSignal::from_raw(10, 0), BreathSignal::NONE);
    }

    #[test]
    fn test_lift_scales_with_magnitude() {
        assert_eq!(BreathSignal::FULL.lift(0.8), 0.8);
        assert_eq!(BreathSignal::NONE.lift(0.8), 0.0);
        assert!((BreathSignal::new(0.25).lift(4.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_pointer_sensor_is_binary() {
        let mut sensor = PointerSensor::new();
        assert_eq!(sensor.read_breath_signal(), BreathSignal::NONE);

        sensor.set_pressed(true);
        assert!(sensor.is_pressed());
        assert_eq!(sensor.read_breath_signal(), BreathSignal::FULL);
    }

    #[test]
    fn test_scripted_sensor_drains_then_falls_back() {
        let mut sensor =
            ScriptedSensor::from_readings([BreathSignal::FULL, BreathSignal::new(0.5)]);
        sensor.set_fallback(BreathSignal::new(0.1));

        assert_eq!(sensor.read_breath_signal(), BreathSignal::FULL);
        assert_eq!(sensor.read_breath_signal(), BreathSignal::new(0.5));
        assert_eq!(sensor.read_breath_signal(), BreathSignal::new(0.1));
        assert_eq!(sensor.reads(), 3);
    }
}
