use crate::config::HeartbeatParams;

/// Scale factor bouncing between `min` and `max`.
#[derive(Clone, Debug)]
pub struct Heartbeat {
    params: HeartbeatParams,
    scale: f64,
    growing: bool,
}

impl Heartbeat {
    pub fn new(params: HeartbeatParams) -> Self {
        Self {
            params,
            scale: params.min,
            growing: true,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn tick(&mut self) -> f64 {
        let HeartbeatParams { step, min, max } = self.params;
        if self.growing {
            self.scale = (self.scale + step).min(max);
            if self.scale >= max {
                self.growing = false;
            }
        } else {
            self.scale = (self.scale - step).max(min);
            if self.scale <= min {
                self.growing = true;
            }
        }
        self.scale
    }
}
