use std::collections::VecDeque;
use std::time::Duration;

pub struct FramesPerSecond {
    time_history: VecDeque<f32>,
    frames: u64,
}

impl FramesPerSecond {
    pub const RUNNING_AVG_LENGTH: usize = 60;

    pub fn new() -> Self {
        Self {
            time_history: VecDeque::<f32>::with_capacity(Self::RUNNING_AVG_LENGTH),
            frames: 0,
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.frames += 1;
        self.time_history.push_front(dt.as_secs_f32());
        if self.time_history.len() > Self::RUNNING_AVG_LENGTH {
            self.time_history.pop_back();
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // true once per full window of frames, used to throttle logging
    pub fn window_complete(&self) -> bool {
        self.frames > 0 && self.frames % Self::RUNNING_AVG_LENGTH as u64 == 0
    }

    pub fn get_avg_fps(&self) -> f32 {
        let sum: f32 = self.time_history.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }
        self.time_history.len() as f32 / sum
    }
}

impl Default for FramesPerSecond {
    fn default() -> Self {
        Self::new()
    }
}
