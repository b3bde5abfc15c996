use crate::domain::ports::ParcelRecord;

/// Whether each rendered line is stripped of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTrim {
    Trim,
    Keep,
}

/// Renders one parcel per line and joins them with `\n` (no trailing newline).
pub fn render_lines<'a, P, I>(parcels: I, trim: LineTrim) -> String
where
    P: ParcelRecord + 'a,
    I: IntoIterator<Item = &'a P>,
{
    let lines: Vec<String> = parcels
        .into_iter()
        .map(|parcel| {
            let line = parcel.to_string();
            match trim {
                LineTrim::Trim => line.trim().to_string(),
                LineTrim::Keep => line,
            }
        })
        .collect();

    lines.join("\n")
}
