//! In-memory schedule storage for tests and the sandbox binary.

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};

use crate::domain::models::schedule::Schedule;
use crate::storage::traits::ScheduleStorage;

#[derive(Debug, Default)]
pub struct MemoryScheduleStorage {
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    next_id: i64,
    schedules: BTreeMap<i64, Schedule>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            next_id: 1,
            schedules: BTreeMap::new(),
        }
    }
}

impl MemoryScheduleStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStorage for MemoryScheduleStorage {
    fn insert_schedule(&self, mut schedule: Schedule) -> Result<i64> {
        let mut state = self.state.lock().map_err(|_| anyhow!("schedule store lock poisoned"))?;
        let id = state.next_id;
        state.next_id += 1;
        schedule.id = id;
        state.schedules.insert(id, schedule);
        Ok(id)
    }

    fn get_schedule(&self, user_id: i64, schedule_id: i64) -> Result<Option<Schedule>> {
        let state = self.state.lock().map_err(|_| anyhow!("schedule store lock poisoned"))?;
        Ok(state
            .schedules
            .get(&schedule_id)
            .filter(|schedule| schedule.user_id == user_id)
            .cloned())
    }

    fn list_user_schedules(&self, user_id: i64) -> Result<Vec<Schedule>> {
        let state = self.state.lock().map_err(|_| anyhow!("schedule store lock poisoned"))?;
        Ok(state
            .schedules
            .values()
            .filter(|schedule| schedule.user_id == user_id)
            .cloned()
            .collect())
    }
}
