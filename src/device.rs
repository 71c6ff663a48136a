//! Device tag carried by every tensor

use std::fmt;

/// Compute device a tensor is labelled with
///
/// The tag is metadata only: every operation runs on the host regardless of
/// its value. It is propagated by constructors and arithmetic results so
/// callers can keep track of where a tensor is meant to live.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Device {
    /// Host CPU
    #[default]
    Cpu,
    /// GPU placeholder
    Gpu,
}

impl Device {
    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cpu() {
        assert_eq!(Device::default(), Device::Cpu);
    }

    #[test]
    fn test_display() {
        assert_eq!(Device::Cpu.to_string(), "CPU");
        assert_eq!(Device::Gpu.to_string(), "GPU");
    }
}
