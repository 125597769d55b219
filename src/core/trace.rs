use super::process::Ticks;

/// Sentinel label for spans where no process is runnable.
pub const IDLE: &str = "IDLE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub duration: Ticks,
}

/// Gantt chart under construction. Consecutive pushes with the same label
/// coalesce into one segment; zero-duration pushes are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    segments: Vec<Segment>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str, duration: Ticks) {
        if duration == 0 {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.label == label {
                last.duration += duration;
                return;
            }
        }
        self.segments.push(Segment {
            label: label.to_owned(),
            duration,
        });
    }

    pub fn idle(&mut self, duration: Ticks) {
        self.push(IDLE, duration);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total(&self) -> Ticks {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// The report form: `label(duration)` tokens separated by spaces.
    pub fn render(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{}({})", s.label, s.duration))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
