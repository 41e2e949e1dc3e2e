//! Game balance values
//!
//! Every constant the simulation reads comes from a [`Tuning`]. Defaults match
//! [`crate::consts`]; hosts and tests override fields or load JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error produced while loading or validating a [`Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// JSON could not be parsed
    Parse(serde_json::Error),
    /// A value is NaN or infinite
    NotFinite { field: &'static str },
    /// A size, speed or pitch that must be positive is not
    NonPositive { field: &'static str, value: f32 },
    /// Gravity must pull down, flaps must push up
    WrongDirection { field: &'static str, value: f32 },
    /// Gap plus both minimum segments is taller than the viewport
    GapBandTooTall { required: f32, viewport_height: f32 },
    /// Actor does not fit inside the viewport at its start position
    ActorOutOfBounds,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::NotFinite { field } => write!(f, "{field} must be finite"),
            TuningError::NonPositive { field, value } => {
                write!(f, "{field} must be positive (got {value})")
            }
            TuningError::WrongDirection { field, value } => {
                write!(f, "{field} points the wrong way (got {value})")
            }
            TuningError::GapBandTooTall {
                required,
                viewport_height,
            } => write!(
                f,
                "gap band needs {required}px but viewport is only {viewport_height}px tall"
            ),
            TuningError::ActorOutOfBounds => write!(f, "actor does not fit inside the viewport"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Fixed simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward displacement per tick
    pub gravity_step: f32,
    /// Vertical displacement of a flap (negative moves up)
    pub flap_displacement: f32,
    pub obstacle_width: f32,
    /// Height of the opening in every obstacle
    pub gap_height: f32,
    /// Minimum height of the top and bottom obstacle segments
    pub min_segment: f32,
    /// Leftward obstacle displacement per tick
    pub scroll_speed: f32,
    /// Spawn once the newest obstacle is left of `viewport_width - spawn_pitch`
    pub spawn_pitch: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Fixed horizontal position of the actor
    pub actor_start_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity_step: GRAVITY_STEP,
            flap_displacement: FLAP_DISPLACEMENT,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            min_segment: MIN_SEGMENT,
            scroll_speed: SCROLL_SPEED,
            spawn_pitch: SPAWN_PITCH,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_start_x: ACTOR_START_X,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing fields keep their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("gravity_step", self.gravity_step),
            ("flap_displacement", self.flap_displacement),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("min_segment", self.min_segment),
            ("scroll_speed", self.scroll_speed),
            ("spawn_pitch", self.spawn_pitch),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("actor_start_x", self.actor_start_x),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field });
        }

        let positive = [
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("scroll_speed", self.scroll_speed),
            ("spawn_pitch", self.spawn_pitch),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NonPositive { field, value });
        }

        if self.gravity_step < 0.0 {
            return Err(TuningError::WrongDirection {
                field: "gravity_step",
                value: self.gravity_step,
            });
        }
        if self.flap_displacement > 0.0 {
            return Err(TuningError::WrongDirection {
                field: "flap_displacement",
                value: self.flap_displacement,
            });
        }
        if self.min_segment < 0.0 {
            return Err(TuningError::NonPositive {
                field: "min_segment",
                value: self.min_segment,
            });
        }

        let required = self.gap_height + 2.0 * self.min_segment;
        if required > self.viewport_height {
            return Err(TuningError::GapBandTooTall {
                required,
                viewport_height: self.viewport_height,
            });
        }

        if self.actor_height >= self.viewport_height / 2.0
            || self.actor_start_x < 0.0
            || self.actor_start_x + self.actor_width > self.viewport_width
        {
            return Err(TuningError::ActorOutOfBounds);
        }

        Ok(())
    }

    /// Vertical range a gap's top edge may be placed in
    pub fn gap_top_range(&self) -> (f32, f32) {
        let lo = self.min_segment;
        let hi = self.viewport_height - self.gap_height - self.min_segment;
        (lo, hi.max(lo))
    }

    /// Actor resting position before a run starts
    pub fn actor_home(&self) -> glam::Vec2 {
        glam::Vec2::new(self.actor_start_x, self.viewport_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.gap_top_range(), (50.0, 350.0));
        assert_eq!(tuning.actor_home(), glam::Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity_step": 3.5, "scroll_speed": 4 }"#).unwrap();
        assert_eq!(tuning.gravity_step, 3.5);
        assert_eq!(tuning.scroll_speed, 4.0);
        assert_eq!(tuning.gap_height, GAP_HEIGHT);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ gravity").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_oversized_gap() {
        let err = Tuning::from_json(r#"{ "gap_height": 550 }"#).unwrap_err();
        assert!(matches!(err, TuningError::GapBandTooTall { .. }));
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_flap() {
        let err = Tuning::from_json(r#"{ "gravity_step": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::WrongDirection {
                field: "gravity_step",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "flap_displacement": 20 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::WrongDirection {
                field: "flap_displacement",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = Tuning::from_json(r#"{ "scroll_speed": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonPositive {
                field: "scroll_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_actor_outside_viewport() {
        let tuning = Tuning {
            actor_start_x: 390.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ActorOutOfBounds)
        ));
    }
}
