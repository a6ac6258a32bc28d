//! Capture guidance state machine.

use super::{
    CaptureAction, CaptureError, CaptureEvent, CaptureGuidanceState, CapturePolicy, CaptureTrigger,
};

#[derive(Debug, Clone, Default)]
pub struct CaptureStateMachine {
    policy: CapturePolicy,
}

type Transition = (CaptureGuidanceState, Vec<CaptureAction>);

impl CaptureStateMachine {
    pub fn new(mut policy: CapturePolicy) -> Self {
        policy.countdown_start = policy.countdown_start.max(1);
        Self { policy }
    }

    pub fn policy(&self) -> &CapturePolicy {
        &self.policy
    }

    pub fn transition(
        &self,
        mut state: CaptureGuidanceState,
        event: CaptureEvent,
    ) -> Transition {
        match event {
            CaptureEvent::Activate if !state.active => {
                state.active = true;
                (state, vec![CaptureAction::StartSampling])
            }
            CaptureEvent::Deactivate => {
                state.active = false;
                state.auto_capture_countdown = None;
                (
                    state,
                    vec![CaptureAction::StopCountdown, CaptureAction::StopSampling],
                )
            }
            CaptureEvent::SensorsSampled { reading } if state.active => {
                state.distance_status = reading.distance;
                state.light_status = reading.light;
                state.subject_detected = reading.subject_detected;
                self.maybe_start_auto_capture(state)
            }
            CaptureEvent::CountdownTick => match state.auto_capture_countdown {
                Some(remaining) if remaining > 1 => {
                    state.auto_capture_countdown = Some(remaining - 1);
                    (state, Vec::new())
                }
                Some(_) => {
                    state.auto_capture_countdown = None;
                    if state.is_capturing {
                        return (state, vec![CaptureAction::StopCountdown]);
                    }
                    state.is_capturing = true;
                    state.alert = None;
                    let settings = state.settings();
                    (
                        state,
                        vec![
                            CaptureAction::StopCountdown,
                            CaptureAction::Capture {
                                trigger: CaptureTrigger::Auto,
                                settings,
                            },
                        ],
                    )
                }
                None => (state, Vec::new()),
            },
            CaptureEvent::CaptureRequested { trigger } if !state.is_capturing => {
                let mut actions = Vec::new();
                if state.auto_capture_countdown.take().is_some() {
                    actions.push(CaptureAction::StopCountdown);
                }
                state.is_capturing = true;
                state.alert = None;
                actions.push(CaptureAction::Capture {
                    trigger,
                    settings: state.settings(),
                });
                (state, actions)
            }
            CaptureEvent::CaptureSucceeded { image, trigger } if state.is_capturing => {
                state.is_capturing = false;
                state.active = false;
                (
                    state,
                    vec![
                        CaptureAction::StopSampling,
                        CaptureAction::HandOff { image, trigger },
                    ],
                )
            }
            CaptureEvent::CaptureFailed if state.is_capturing => {
                state.is_capturing = false;
                state.alert = Some(CaptureError::CaptureFailed);
                (state, Vec::new())
            }
            CaptureEvent::HandOffFailed => {
                state.alert = Some(CaptureError::HandOffFailed);
                if state.active {
                    return (state, Vec::new());
                }
                state.active = true;
                (state, vec![CaptureAction::StartSampling])
            }
            CaptureEvent::DismissAlert => {
                state.alert = None;
                (state, Vec::new())
            }
            CaptureEvent::ToggleCameraFacing => {
                state.facing = state.facing.toggled();
                (state, Vec::new())
            }
            CaptureEvent::CycleFlashMode => {
                state.flash = state.flash.next();
                (state, Vec::new())
            }
            _ => (state, Vec::new()),
        }
    }

    /// Starts the countdown when readiness holds; cancels a running one
    /// when a fresh sample breaks it.
    pub fn maybe_start_auto_capture(&self, mut state: CaptureGuidanceState) -> Transition {
        if state.is_ready_for_auto_capture() {
            state.auto_capture_countdown = Some(self.policy.countdown_start);
            return (state, vec![CaptureAction::StartCountdown]);
        }
        if state.auto_capture_countdown.is_some() && !state.reading().is_favorable() {
            state.auto_capture_countdown = None;
            return (state, vec![CaptureAction::StopCountdown]);
        }
        (state, Vec::new())
    }
}
