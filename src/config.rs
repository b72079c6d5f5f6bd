use std::env;

pub const DEFAULT_EVENT_CAPACITY: usize = 1024;
pub const DEFAULT_RING_LINKS: usize = 99;

#[derive(Debug, Clone)]
pub struct KernelConfig {
    pub name: String,
    pub event_capacity: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "kernel".to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl KernelConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = env::var("KERNEL_NAME") {
            if !name.trim().is_empty() {
                config.name = name;
            }
        }

        if let Ok(capacity) = env::var("KERNEL_EVENT_CAPACITY") {
            if let Ok(c) = capacity.parse::<usize>() {
                config.event_capacity = c.max(1);
            }
        }

        config
    }
}

#[derive(Debug, Clone)]
pub struct RingConfig {
    /// Number of forwarding actors between the driver and the terminal actor.
    pub links: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            links: DEFAULT_RING_LINKS,
        }
    }
}

impl RingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(links) = env::var("RING_LINKS") {
            if let Ok(l) = links.parse::<usize>() {
                config.links = l;
            }
        }

        config
    }
}
