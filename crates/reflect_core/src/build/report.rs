//! Per-run statistics

use crate::classify::RegistrationPlan;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Counts and phase timings for one generation run.
#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub types: usize,
    pub enums: usize,
    pub classes: usize,
    pub components: usize,
    pub systems: usize,
    pub scenes: usize,
    phases: Vec<(&'static str, Duration)>,
}

impl GenerationReport {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Run `f`, adding its wall time to the named phase.
    pub fn time_phase<F, R>(&mut self, name: &'static str, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        match self.phases.iter_mut().find(|(phase, _)| *phase == name) {
            Some((_, total)) => *total += elapsed,
            None => self.phases.push((name, elapsed)),
        }
        result
    }

    pub fn phase(&self, name: &str) -> Option<Duration> {
        self.phases
            .iter()
            .find(|(phase, _)| *phase == name)
            .map(|(_, elapsed)| *elapsed)
    }

    /// Phases in the order they first ran.
    pub fn phases(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.phases.iter().copied()
    }

    pub(crate) fn record_plan(&mut self, types: usize, plan: &RegistrationPlan) {
        self.types = types;
        self.enums = plan.enums.len();
        self.classes = plan.classes.len();
        self.components = plan.components.len();
        self.systems = plan.systems.len();
        self.scenes = plan.scenes.len();
    }

    pub fn log(&self) {
        tracing::info!(
            "Wrote '{}': {} enum(s), {} class(es), {} component(s), {} system(s), {} scene(s) from {} type(s)",
            self.output.display(),
            self.enums,
            self.classes,
            self.components,
            self.systems,
            self.scenes,
            self.types,
        );
        for (phase, elapsed) in self.phases() {
            tracing::debug!("{phase}: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_starts_empty() {
        let report = GenerationReport::new("/out/RegisterTypes.h");
        assert_eq!(report.output, PathBuf::from("/out/RegisterTypes.h"));
        assert_eq!(report.phases().count(), 0);
        assert_eq!(report.components, 0);
    }

    #[test]
    fn phases_accumulate_in_first_run_order() {
        let mut report = GenerationReport::new("RegisterTypes.h");
        let value = report.time_phase("ingest", || 7);
        report.time_phase("emit", || ());
        report.time_phase("ingest", || ());

        assert_eq!(value, 7);
        let names: Vec<_> = report.phases().map(|(name, _)| name).collect();
        assert_eq!(names, ["ingest", "emit"]);
        assert!(report.phase("ingest").is_some());
        assert!(report.phase("classify").is_none());
    }
}
