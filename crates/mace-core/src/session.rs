//! Estimation session flow
//!
//! Models the form's submit/result lifecycle as an explicit state machine
//! (`Idle → Estimating → Done | Failed`) instead of a pile of boolean
//! flags. The session owns the in-flight guard, resets any previous result
//! when a new run starts, and hosts the artificial latency that emulates a
//! remote model call. The estimator core itself never sleeps.

use crate::{PatientInput, RiskError, RiskEstimator, RiskResult};
use std::time::Duration;

/// Default artificial latency, matching the original form's ~1.5s spinner
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Lifecycle state of one estimation session
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Nothing submitted, or the session was reset
    Idle,
    /// A run has started and has not finished yet
    Estimating,
    /// Last run succeeded
    Done(RiskResult),
    /// Last run failed; the input is kept for correction and resubmission
    Failed(RiskError),
}

/// State-machine misuse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called while a run is outstanding
    EstimationInFlight,
    /// `finish` was called with no run outstanding
    NotEstimating,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EstimationInFlight => {
                write!(f, "An estimation is already in flight")
            }
            SessionError::NotEstimating => {
                write!(f, "No estimation in flight to finish")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// Caller-owned session wrapping one [`RiskEstimator`]
#[derive(Clone, Debug)]
pub struct EstimationSession {
    estimator: RiskEstimator,
    latency: Duration,
    pending: Option<PatientInput>,
    state: SessionState,
}

impl EstimationSession {
    /// New idle session with the default simulated latency
    pub fn new(estimator: RiskEstimator) -> Self {
        EstimationSession {
            estimator,
            latency: DEFAULT_LATENCY,
            pending: None,
            state: SessionState::Idle,
        }
    }

    /// Override the simulated latency (use zero in tests)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Current lifecycle state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Result of the last successful run, if any
    pub fn result(&self) -> Option<&RiskResult> {
        match &self.state {
            SessionState::Done(result) => Some(result),
            _ => None,
        }
    }

    /// Input held for the outstanding or failed run, if any
    pub fn pending_input(&self) -> Option<&PatientInput> {
        self.pending.as_ref()
    }

    /// Begin a run: rejects re-entrant submission, discards any previous
    /// result, and moves to `Estimating`.
    pub fn start(&mut self, input: PatientInput) -> Result<(), SessionError> {
        if self.state == SessionState::Estimating {
            return Err(SessionError::EstimationInFlight);
        }
        self.pending = Some(input);
        self.state = SessionState::Estimating;
        Ok(())
    }

    /// Complete the outstanding run and transition to `Done` or `Failed`.
    ///
    /// On failure the submitted input stays available via
    /// [`pending_input`](Self::pending_input) so the caller can correct
    /// and resubmit.
    pub fn finish(&mut self) -> Result<&SessionState, SessionError> {
        if self.state != SessionState::Estimating {
            return Err(SessionError::NotEstimating);
        }
        let input = self.pending.take().ok_or(SessionError::NotEstimating)?;
        self.state = match self.estimator.estimate(&input) {
            Ok(result) => SessionState::Done(result),
            Err(err) => {
                self.pending = Some(input);
                SessionState::Failed(err)
            }
        };
        Ok(&self.state)
    }

    /// Convenience wrapper: start, sleep for the simulated latency, finish.
    pub fn run_blocking(&mut self, input: PatientInput) -> Result<&SessionState, SessionError> {
        self.start(input)?;
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        self.finish()
    }

    /// Return to `Idle`, dropping any held input and result
    pub fn reset(&mut self) {
        self.pending = None;
        self.state = SessionState::Idle;
    }
}
