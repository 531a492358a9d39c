/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::Write as _;
use std::path::Path;
use std::time::{Duration, Instant};

/// Per-phase timings of a codegen run.
pub struct StopWatch {
    last_instant: Instant,
    metrics: Vec<Metric>,
    lwidth: usize,
}

impl StopWatch {
    pub fn start() -> Self {
        Self {
            last_instant: Instant::now(),
            metrics: vec![],
            lwidth: 0,
        }
    }

    /// Ends the current phase, naming it `what`.
    pub fn record(&mut self, what: &'static str) {
        let now = Instant::now();
        let duration = now - self.last_instant;
        self.last_instant = now;
        self.lwidth = usize::max(self.lwidth, what.len());
        self.metrics.push(Metric {
            name: what,
            duration,
        });
    }

    pub fn phase_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.metrics.iter().map(|metric| metric.name)
    }

    /// One line per phase, then a separator and the total.
    pub fn to_stats(&self) -> String {
        let total: Duration = self.metrics.iter().map(|metric| metric.duration).sum();
        let lwidth = usize::max(self.lwidth, "total".len());
        let rwidth = log10(total.as_millis());
        let total_metric = Metric {
            name: "total",
            duration: total,
        };

        let mut out = String::new();
        for metric in self.metrics.iter() {
            Self::write_metric(&mut out, metric, lwidth, rwidth);
        }
        let _ = writeln!(out, "{}", "-".repeat(lwidth + rwidth + 5));
        Self::write_metric(&mut out, &total_metric, lwidth, rwidth);

        out
    }

    pub fn write_stats_to(self, to_file: &Path) {
        std::fs::write(to_file, self.to_stats()).unwrap_or_else(|e| {
            panic!("failed to write stats file {};\n\t{}", to_file.display(), e)
        });
    }

    fn write_metric(out: &mut String, metric: &Metric, lwidth: usize, rwidth: usize) {
        let _ = writeln!(
            out,
            "{: >l$}: {: >r$} ms",
            metric.name,
            metric.duration.as_millis(),
            l = lwidth,
            r = rwidth,
        );
    }
}

fn log10(n: u128) -> usize {
    std::iter::successors(Some(n), |&n| (n >= 10).then_some(n / 10)).count()
}

struct Metric {
    name: &'static str,
    duration: Duration,
}
