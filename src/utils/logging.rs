use log::{Level, log_enabled};
use std::{
    fmt,
    time::{Duration, Instant},
};

/// Summary of one world step, also logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Controllers resolved during the step.
    pub controllers: usize,
    /// Controllers that ended short of their requested move.
    pub blocked: usize,
    pub parallel: bool,
    pub elapsed: Duration,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} controllers ({} blocked, {}) in {} µs",
            self.controllers,
            self.blocked,
            if self.parallel { "parallel" } else { "sequential" },
            self.elapsed.as_micros()
        )
    }
}

/// Times a world step from start to [`finish`](Self::finish).
pub(crate) struct StepTimer {
    controllers: usize,
    parallel: bool,
    start: Instant,
}

impl StepTimer {
    pub(crate) fn start(controllers: usize, parallel: bool) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("world step start: {controllers} controllers");
        }
        Self {
            controllers,
            parallel,
            start: Instant::now(),
        }
    }

    pub(crate) fn finish(self, blocked: usize) -> StepReport {
        let report = StepReport {
            controllers: self.controllers,
            blocked,
            parallel: self.parallel,
            elapsed: self.start.elapsed(),
        };
        log::debug!("world step: {report}");
        report
    }
}
