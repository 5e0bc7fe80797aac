use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BASE_TICK_MILLIS;

/// Simulation clock. One growth tick runs per simulated day; a day lasts
/// `ticks_per_day` FixedUpdate ticks.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct GameClock {
    pub day: u32,
    pub tick_in_day: u32,
    pub ticks_per_day: u32,
    /// Time multiplier. Zero behaves like `paused`.
    pub speed: f32,
    pub paused: bool,
    /// Set on the tick that rolls over into a new day, cleared on the next.
    pub day_started: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(10)
    }
}

impl GameClock {
    pub fn new(ticks_per_day: u32) -> Self {
        Self {
            day: 1,
            tick_in_day: 0,
            ticks_per_day: ticks_per_day.max(1),
            speed: 1.0,
            paused: false,
            day_started: false,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.paused && self.speed > 0.0
    }

    pub fn tick(&mut self) {
        self.day_started = false;
        if !self.is_running() {
            return;
        }
        // Speed is handled by scaling the FixedUpdate timestep (sync_fixed_timestep),
        // so each tick always advances by the same amount of game time.
        self.tick_in_day += 1;
        if self.tick_in_day >= self.ticks_per_day {
            self.tick_in_day = 0;
            self.day += 1;
            self.day_started = true;
        }
    }

    pub fn formatted(&self) -> String {
        format!("Day {} ({}/{})", self.day, self.tick_in_day, self.ticks_per_day)
    }
}

pub fn tick_game_clock(mut clock: ResMut<GameClock>) {
    clock.tick();
}

/// Run condition for the growth day.
pub fn day_started(clock: Res<GameClock>) -> bool {
    clock.day_started
}

/// Scales the FixedUpdate timestep based on GameClock speed.
/// Base rate is 10 Hz (100 ms). At 2x speed it becomes 50 ms, at 4x -> 25 ms, etc.
pub fn sync_fixed_timestep(clock: Res<GameClock>, mut time: ResMut<Time<Fixed>>) {
    let base = std::time::Duration::from_millis(BASE_TICK_MILLIS);
    let effective = if clock.is_running() {
        base.div_f32(clock.speed.clamp(0.25, 16.0))
    } else {
        // When paused, keep the timestep but tick_game_clock won't advance
        base
    };
    time.set_timestep(effective);
}
