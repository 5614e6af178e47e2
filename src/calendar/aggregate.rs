use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, NaiveDateTime};

use crate::calendar::month::SelectedMonth;
use crate::model::attendance::MonthRow;
use crate::model::user::User;

/// Check-ins of one user, keyed by calendar day. A missing day means the user
/// did not check in that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMonth {
    pub user_id: u64,
    pub name: String,
    pub days: BTreeMap<NaiveDate, Vec<NaiveDateTime>>,
}

impl UserMonth {
    fn new(user_id: u64, name: String) -> Self {
        Self {
            user_id,
            name,
            days: BTreeMap::new(),
        }
    }

    pub fn check_ins_on(&self, date: NaiveDate) -> &[NaiveDateTime] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn days_present(&self) -> usize {
        self.days.len()
    }
}

/// Everything the calendar page needs for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthAttendance {
    pub month: SelectedMonth,
    pub num_days: u32,
    pub users: Vec<UserMonth>,
}

impl MonthAttendance {
    /// An empty month with no users; what the page shows when nothing could be loaded.
    pub fn empty(month: SelectedMonth) -> Self {
        Self {
            month,
            num_days: month.num_days(),
            users: Vec::new(),
        }
    }

    /// First user with the given display name.
    pub fn user(&self, name: &str) -> Option<&UserMonth> {
        self.users.iter().find(|u| u.name == name)
    }
}

/// Groups month rows by user, then by day, in a single pass.
///
/// Every user in `users` appears in the result, in the given order, even with
/// no check-ins. Users are keyed by id so two people sharing a name stay apart.
/// Rows without a timestamp or outside `month` are skipped; timestamps keep the
/// row order within a day.
pub fn aggregate_month(month: SelectedMonth, users: &[User], rows: &[MonthRow]) -> MonthAttendance {
    let mut result = MonthAttendance::empty(month);
    let mut index: HashMap<u64, usize> = HashMap::with_capacity(users.len());

    for user in users {
        if index.contains_key(&user.id) {
            continue;
        }
        index.insert(user.id, result.users.len());
        result.users.push(UserMonth::new(user.id, user.name.clone()));
    }

    for row in rows {
        let Some(clock_in) = row.clock_in else {
            continue;
        };
        let date = clock_in.date();
        if !month.contains(date) {
            continue;
        }

        // user created after the user list was read
        let slot = *index.entry(row.user_id).or_insert_with(|| {
            result.users.push(UserMonth::new(row.user_id, row.name.clone()));
            result.users.len() - 1
        });

        result.users[slot]
            .days
            .entry(date)
            .or_default()
            .push(clock_in);
    }

    result
}
