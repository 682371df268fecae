use chrono::NaiveDate;

use super::models::Streak;

impl Streak {
    /// Count a practice on `today`.
    ///
    /// Same day: unchanged. Next day: extends the streak. Any longer gap (or
    /// a recorded date in the future) restarts it at 1. Returns whether the
    /// streak changed.
    pub fn record_practice(&mut self, today: NaiveDate) -> bool {
        let Some(last) = self.last_practice_date else {
            self.current = 1;
            self.longest = self.longest.max(1);
            self.last_practice_date = Some(today);
            return true;
        };

        match (today - last).num_days() {
            0 => return false,
            1 => {
                self.current += 1;
                self.longest = self.longest.max(self.current);
            }
            _ => self.current = 1,
        }
        self.last_practice_date = Some(today);
        true
    }
}
