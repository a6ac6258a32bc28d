use serde::{Deserialize, Serialize};

use super::CaptureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceStatus {
    TooClose,
    Good,
    TooFar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightStatus {
    TooDark,
    Good,
    TooBright,
}

/// One sample of the three readiness signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReading {
    pub distance: DistanceStatus,
    pub light: LightStatus,
    pub subject_detected: bool,
}

impl SensorReading {
    pub fn is_favorable(&self) -> bool {
        self.distance == DistanceStatus::Good
            && self.light == LightStatus::Good
            && self.subject_detected
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlashMode {
    #[default]
    Off,
    On,
    Auto,
}

impl FlashMode {
    /// off → on → auto → off
    pub fn next(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Auto,
            FlashMode::Auto => FlashMode::Off,
        }
    }
}

/// Crop growth stage the photo documents; travels with the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStage {
    Sowing,
    Vegetative,
    Flowering,
    Maturity,
    Harvest,
    CropDamage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureTrigger {
    Manual,
    Auto,
}

/// Camera settings handed to the capture port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub facing: CameraFacing,
    pub flash: FlashMode,
}

/// One in-progress capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGuidanceState {
    pub distance_status: DistanceStatus,
    pub light_status: LightStatus,
    pub subject_detected: bool,
    /// In `1..=3` while a countdown runs.
    pub auto_capture_countdown: Option<u8>,
    pub is_capturing: bool,
    pub facing: CameraFacing,
    pub flash: FlashMode,
    pub crop_stage: CropStage,
    /// Last capture failure, shown as an alert.
    pub alert: Option<CaptureError>,
    /// Whether the sampling loop should be running.
    pub active: bool,
}

impl CaptureGuidanceState {
    pub fn new(crop_stage: CropStage) -> Self {
        Self {
            distance_status: DistanceStatus::TooFar,
            light_status: LightStatus::TooDark,
            subject_detected: false,
            auto_capture_countdown: None,
            is_capturing: false,
            facing: CameraFacing::default(),
            flash: FlashMode::default(),
            crop_stage,
            alert: None,
            active: false,
        }
    }

    pub fn reading(&self) -> SensorReading {
        SensorReading {
            distance: self.distance_status,
            light: self.light_status,
            subject_detected: self.subject_detected,
        }
    }

    pub fn settings(&self) -> CaptureSettings {
        CaptureSettings {
            facing: self.facing,
            flash: self.flash,
        }
    }

    /// All three signals favorable, nothing already counting down or capturing.
    pub fn is_ready_for_auto_capture(&self) -> bool {
        self.reading().is_favorable()
            && self.auto_capture_countdown.is_none()
            && !self.is_capturing
    }
}
