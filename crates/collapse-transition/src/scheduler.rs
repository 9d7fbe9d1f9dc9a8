//! Cancellable scheduling of phase completion.
//!
//! Completion is a fixed delay equal to the configured duration, not a
//! transition-end signal: if the host's transition timing diverges from the
//! configured duration, completion fires on its own schedule. The task is
//! explicit and cancellable so a cancellation hook can retract a pending
//! completion instead of letting it fire after styles were reset elsewhere.
//!
//! The scheduler never blocks. The owner drives it by calling
//! [`CompletionScheduler::advance`] with elapsed milliseconds, the same
//! polling shape a frame loop uses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a scheduled completion task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Generate a new unique task ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct ScheduledTask {
    id: TaskId,
    remaining_ms: f32,
}

/// Non-blocking timer queue for phase completions.
#[derive(Debug, Default)]
pub struct CompletionScheduler {
    tasks: Vec<ScheduledTask>,
}

impl CompletionScheduler {
    /// Create a new empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to become due after `delay_ms` of advanced time.
    pub fn schedule(&mut self, delay_ms: f32) -> TaskId {
        let id = TaskId::new();
        self.tasks.push(ScheduledTask {
            id,
            remaining_ms: delay_ms,
        });
        id
    }

    /// Cancel a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Whether a task is still pending.
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advance time and collect the tasks whose delay has fully elapsed.
    pub fn advance(&mut self, delta_ms: f32) -> Vec<TaskId> {
        let mut due = Vec::new();
        for task in &mut self.tasks {
            task.remaining_ms -= delta_ms;
            if task.remaining_ms <= 0.0 {
                due.push(task.id);
            }
        }
        self.tasks.retain(|t| t.remaining_ms > 0.0);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_due_before_delay() {
        let mut scheduler = CompletionScheduler::new();
        let id = scheduler.schedule(300.0);

        assert!(scheduler.advance(299.0).is_empty());
        assert!(scheduler.is_pending(id));

        let due = scheduler.advance(1.0);
        assert_eq!(due, vec![id]);
        assert!(!scheduler.is_pending(id));
    }

    #[test]
    fn test_delay_accumulates_across_advances() {
        let mut scheduler = CompletionScheduler::new();
        let id = scheduler.schedule(100.0);

        for _ in 0..5 {
            assert!(scheduler.advance(16.0).is_empty());
        }
        // 80ms elapsed so far; 32 more crosses the deadline.
        assert_eq!(scheduler.advance(32.0), vec![id]);
    }

    #[test]
    fn test_task_fires_at_most_once() {
        let mut scheduler = CompletionScheduler::new();
        let id = scheduler.schedule(50.0);

        assert_eq!(scheduler.advance(60.0), vec![id]);
        assert!(scheduler.advance(60.0).is_empty());
    }

    #[test]
    fn test_cancel_retracts_pending_task() {
        let mut scheduler = CompletionScheduler::new();
        let id = scheduler.schedule(100.0);

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.advance(200.0).is_empty());
    }

    #[test]
    fn test_zero_delay_is_due_on_first_advance() {
        let mut scheduler = CompletionScheduler::new();
        let id = scheduler.schedule(0.0);
        assert_eq!(scheduler.advance(0.0), vec![id]);
    }
}
