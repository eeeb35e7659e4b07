use crate::constants::{AMBIENT_GAIN_ON, AMBIENT_LABEL_OFF, AMBIENT_LABEL_ON};

/// On/off state for the ambient drone. The audio nodes themselves live in the
/// web frontend; this only decides the master-gain ramp target and the
/// toggle-control label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AmbientState {
    on: bool,
}

impl AmbientState {
    /// Flip the flag and return the new master-gain ramp target.
    pub fn toggle(&mut self) -> f32 {
        self.on = !self.on;
        self.target_gain()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn target_gain(&self) -> f32 {
        if self.on {
            AMBIENT_GAIN_ON
        } else {
            0.0
        }
    }

    pub fn label(&self) -> &'static str {
        if self.on {
            AMBIENT_LABEL_ON
        } else {
            AMBIENT_LABEL_OFF
        }
    }
}
