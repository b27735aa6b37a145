//! Virtual-clock task queue.
//!
//! Tasks are plain job values rather than callbacks; the owner pops due jobs
//! and dispatches them itself. Time only moves through [`Scheduler::advance_to`],
//! and a job scheduled while another is firing is timed from the firing
//! job's due time, so runs are reproducible regardless of frame pacing.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
struct Task<J> {
    handle: TaskHandle,
    job: J,
    due: Duration,
    period: Option<Duration>,
    seq: u64,
}

#[derive(Clone, Debug)]
pub struct Scheduler<J> {
    clock: Duration,
    horizon: Duration,
    next_id: u64,
    next_seq: u64,
    tasks: Vec<Task<J>>,
}

impl<J: Clone> Default for Scheduler<J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: Clone> Scheduler<J> {
    pub fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            horizon: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            tasks: Vec::new(),
        }
    }

    /// Logical time: the due time of the job being dispatched, or the
    /// horizon once nothing is due.
    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fire `job` every `period`, first one period from now.
    pub fn every(&mut self, period: Duration, job: J) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.push(self.clock + period, Some(period), job)
    }

    pub fn after(&mut self, delay: Duration, job: J) -> TaskHandle {
        self.push(self.clock + delay, None, job)
    }

    /// Returns `false` when the handle had already fired or been cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_active(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Move the horizon forward. Never moves backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.horizon = self.horizon.max(now);
    }

    pub fn advance_by(&mut self, dt: Duration) {
        self.advance_to(self.horizon + dt);
    }

    /// Earliest job due at or before the horizon. Recurring tasks are
    /// rescheduled one period later; one-shot tasks are removed.
    pub fn pop_due(&mut self) -> Option<(TaskHandle, J)> {
        let horizon = self.horizon;
        let next = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= horizon)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i);
        let Some(i) = next else {
            self.clock = horizon;
            return None;
        };
        self.clock = self.tasks[i].due;
        match self.tasks[i].period {
            Some(period) => {
                let seq = self.bump_seq();
                let task = &mut self.tasks[i];
                task.due += period;
                task.seq = seq;
                Some((task.handle, task.job.clone()))
            }
            None => {
                let task = self.tasks.swap_remove(i);
                Some((task.handle, task.job))
            }
        }
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, job: J) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.tasks.push(Task {
            handle,
            job,
            due,
            period,
            seq,
        });
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
