use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Time spent by one named solver run.
pub struct Split {
    pub name: String,
    pub duration: Duration,
}

impl Split {
    /// `name: duration (share of total)`
    pub fn display<W: Write>(&self, writer: &mut W, total: Duration) -> io::Result<()> {
        let share = if total.as_nanos() == 0 {
            0.0
        } else {
            100.0 * self.duration.as_secs_f64() / total.as_secs_f64()
        };
        write!(writer, "{}: {:?} ({:.1}%)", self.name, self.duration, share)
    }
}

/// Wall-clock timer with named splits, used to time the solvers against
/// each other.
pub struct Stopwatch {
    pub splits: Vec<Split>,
    pub name: String,
    pub start_total: Instant,
    pub start_split: Instant,
}

impl Stopwatch {
    pub fn new(name: String) -> Stopwatch {
        let now = Instant::now();
        Stopwatch {
            splits: Vec::default(),
            name,
            start_total: now,
            start_split: now,
        }
    }

    pub fn total_elapsed(&self) -> Duration {
        self.start_total.elapsed()
    }

    /// Sum of the recorded splits, excluding time spent between them.
    pub fn recorded_total(&self) -> Duration {
        self.splits.iter().map(|split| split.duration).sum()
    }

    /// Starts the next split without recording the time since the last one.
    pub fn reset_split(&mut self) {
        self.start_split = Instant::now();
    }

    pub fn record_split(&mut self, name: String) -> Duration {
        let duration = self.start_split.elapsed();
        self.start_split = Instant::now();
        self.splits.push(Split { name, duration });
        duration
    }

    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let recorded = self.recorded_total();
        writeln!(
            writer,
            "Stopwatch: {};  Total elapsed duration: {:?};  In solvers: {:?}",
            self.name,
            self.total_elapsed(),
            recorded
        )?;
        for split in self.splits.iter() {
            write!(writer, "  ")?;
            split.display(writer, recorded)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}
