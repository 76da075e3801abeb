//! Plain-text reports for packing sessions.

use crate::session::PackingSession;
use std::fmt;

const RULE_WIDTH: usize = 88;

/// Placement table, advisories and summary of a session.
pub struct Report<'a>(pub &'a PackingSession);

/// Renders the report of a session.
pub fn render(session: &PackingSession) -> String {
    Report(session).to_string()
}

/// Prints the session report to stdout.
pub fn print_summary(session: &PackingSession) {
    print!("{}", Report(session));
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, session: &PackingSession) -> fmt::Result {
    let c = &session.container;
    let result = &session.result;

    writeln!(out, "{:=<w$}", "", w = RULE_WIDTH)?;
    writeln!(
        out,
        "CONTAINER {:.2} x {:.2} x {:.2} (volume {:.3})",
        c.length(),
        c.width(),
        c.height(),
        c.volume()
    )?;
    writeln!(out, "{:=<w$}", "", w = RULE_WIDTH)?;

    writeln!(
        out,
        "{:<20} {:>9} {:>9} {:>9}  {:<14} {:<16}",
        "Item", "X", "Y", "Z", "Orientation", "Stacked on"
    )?;
    writeln!(out, "{:-<w$}", "", w = RULE_WIDTH)?;
    for p in &result.placements {
        let name = session.item(&p.item_id).map_or(p.item_id.as_str(), |i| i.name());
        writeln!(
            out,
            "{:<20} {:>9.3} {:>9.3} {:>9.3}  {:<14} {:<16}",
            name,
            p.x(),
            p.y(),
            p.z(),
            p.orientation,
            p.stacked_on.as_deref().unwrap_or("-")
        )?;
    }

    if !result.advisories.is_empty() {
        writeln!(out)?;
        writeln!(out, "Advisories:")?;
        for advisory in &result.advisories {
            writeln!(out, "  - {}", advisory)?;
        }
    }

    let stats = result.placement_stats();
    if stats.count > 0 {
        writeln!(out)?;
        writeln!(out, "Orientations:")?;
        for (label, count) in &stats.orientation_distribution {
            writeln!(out, "  {:<14} {}", label, count)?;
        }
    }

    let summary = session.summary();
    writeln!(out)?;
    writeln!(out, "{:-<w$}", "", w = RULE_WIDTH)?;
    writeln!(
        out,
        "placed={} stacked={} unplaced={} of {}",
        summary.total_placed, summary.total_stacked, summary.total_unplaced, summary.total_requested
    )?;
    writeln!(
        out,
        "efficiency={} placed_volume={:.3} placed_weight={:.1}",
        result.efficiency_percent(),
        summary.placed_volume,
        summary.placed_weight
    )?;
    if let Some(limit) = c.max_weight() {
        writeln!(out, "payload limit={:.1}", limit)?;
    }

    Ok(())
}
