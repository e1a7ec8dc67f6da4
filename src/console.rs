//! Console collaborator: reads lane values from a stream and renders the
//! pipeline's input, output and bit-planes.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::bitslice::groups::PlaneGroups;
use crate::bitslice::planes::BitPlaneVector;
use crate::config::{OverflowPolicy, RunConfig};
use crate::error::{out_of_range, parse_error, Result};

/// Reads whitespace-separated decimal `u32` values until end of input.
///
/// Under [`OverflowPolicy::Truncate`] reading stops at the first token past
/// `capacity`; that token and the rest of the stream are never parsed.
///
/// # Errors
///
/// Fails on a token that is not a `u32`, on a read failure, and, under
/// [`OverflowPolicy::Reject`], when more than `capacity` values arrive.
pub fn read_values<R: BufRead>(
    reader: R,
    capacity: usize,
    policy: OverflowPolicy,
) -> Result<Vec<u32>> {
    let mut values = Vec::with_capacity(capacity.min(crate::LANES));
    let mut seen = 0usize;

    for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if policy == OverflowPolicy::Truncate && seen == capacity {
                warn!(
                    "input cut off at {} values, ignoring the rest of the stream",
                    capacity
                );
                return Ok(values);
            }

            let value = token
                .parse::<u32>()
                .map_err(|_| parse_error(token, seen))?;
            seen += 1;

            if values.len() < capacity || policy == OverflowPolicy::Extend {
                values.push(value);
            }
        }
    }

    if seen > capacity {
        match policy {
            OverflowPolicy::Reject => return Err(out_of_range(seen, capacity)),
            // returned at the cut-off above
            OverflowPolicy::Truncate => {}
            OverflowPolicy::Extend => debug!(
                "read {} values past capacity {}, extending into {} plane groups",
                seen,
                capacity,
                seen.div_ceil(crate::LANES)
            ),
        }
    }

    Ok(values)
}

/// Renders a bit-plane vector, one `nums[nn]` line per plane.
pub fn render_planes(planes: &BitPlaneVector) -> String {
    planes.to_string()
}

/// Renders values as space-separated decimals.
pub fn render_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_groups<W: Write>(out: &mut W, title: &str, groups: &PlaneGroups) -> Result<()> {
    writeln!(out, "{title}:")?;
    for (g, group) in groups.groups().iter().enumerate() {
        if groups.group_count() > 1 {
            writeln!(out, "group {g}:")?;
        }
        writeln!(out, "{}", render_planes(group))?;
    }
    Ok(())
}

/// Reads values from `reader`, increments them and writes the report to `out`.
///
/// # Errors
///
/// Propagates reader errors and failures to write the report.
pub fn run<R: BufRead, W: Write>(config: &RunConfig, reader: R, out: &mut W) -> Result<Vec<u32>> {
    let input = read_values(reader, config.capacity, config.policy)?;
    let mut groups = PlaneGroups::from_values(&input);

    if config.show_planes {
        write_groups(out, "Input", &groups)?;
    }

    if config.parallel {
        groups.par_increment();
    } else {
        groups.increment();
    }

    if config.show_planes {
        write_groups(out, "Output", &groups)?;
        writeln!(out)?;
    }

    let output = groups.to_values();

    writeln!(out, "Input:")?;
    writeln!(out, "{}", render_values(&input))?;
    writeln!(out, "Output:")?;
    writeln!(out, "{}", render_values(&output))?;

    Ok(output)
}
