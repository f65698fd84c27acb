//! Interactive parameter collection.
//!
//! Mirrors the flag defaults: every prompt accepts empty or invalid input
//! and falls back to the documented default, so an operator can hold ENTER
//! through the whole dialog.

use std::io::{BufRead, Write};

use foresight_core::models::{EventLabel, RankedFeature};

/// Ask how many completed steps there are, then let the operator pick each
/// step from the numbered feature list. Invalid selections fall back to
/// the first feature.
pub fn choose_completed_actions<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    features: &[RankedFeature],
) -> std::io::Result<Vec<EventLabel>> {
    writeln!(
        output,
        "How many steps were already taken? Invalid input counts as 0. [ENTER]"
    )?;
    let count = read_number(input)?.unwrap_or(0);

    let mut steps = Vec::with_capacity(count);
    for step in 1..=count {
        for feature in features {
            writeln!(output, "{}: {}", feature.rank, feature.label)?;
        }
        writeln!(
            output,
            "Choose step {step} from the list above (default: 1). [ENTER]"
        )?;
        let choice = read_number(input)?
            .filter(|n| (1..=features.len()).contains(n))
            .unwrap_or(1);
        steps.push(features[choice - 1].label.clone());
    }

    if !steps.is_empty() {
        writeln!(output, "Steps taken as pre-given:")?;
        for (index, step) in steps.iter().enumerate() {
            writeln!(output, "#{}: {}", index + 1, step)?;
        }
    }
    Ok(steps)
}

/// One line of input parsed as a number; `None` on empty or non-numeric.
fn read_number<R: BufRead>(input: &mut R) -> std::io::Result<Option<usize>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().parse().ok())
}
