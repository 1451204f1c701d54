use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub deadline: NaiveDate,
}

impl Task {
    /// Deadline is strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline < today
    }

    /// Days from `today` until the deadline (negative once overdue).
    #[must_use]
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }
}

/// Rows touched by an update or delete.
///
/// Zero rows is a no-op, not an error: the target id did not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub affected: usize,
}

impl WriteOutcome {
    #[must_use]
    pub const fn new(affected: usize) -> Self {
        Self { affected }
    }

    #[must_use]
    pub const fn applied(&self) -> bool {
        self.affected > 0
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.affected == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overdue() {
        let task = Task {
            id: 1,
            description: "File taxes".to_string(),
            deadline: date(2025, 4, 15),
        };
        assert!(task.is_overdue(date(2025, 4, 16)));
        assert!(!task.is_overdue(date(2025, 4, 15)));
        assert_eq!(task.days_left(date(2025, 4, 10)), 5);
        assert_eq!(task.days_left(date(2025, 4, 17)), -2);
    }

    #[test]
    fn test_write_outcome() {
        assert!(WriteOutcome::new(0).is_noop());
        assert!(!WriteOutcome::new(0).applied());
        assert!(WriteOutcome::new(3).applied());
        assert_eq!(WriteOutcome::default(), WriteOutcome::new(0));
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task {
            id: 7,
            description: "Buy milk".to_string(),
            deadline: date(2025, 1, 2),
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["description"], "Buy milk");
        assert_eq!(json["deadline"], "2025-01-02");
    }
}
