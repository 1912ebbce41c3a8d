#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render left-aligned columns with a dashed divider under the header.
///
/// When `max_width` is set the widest columns shrink first and overflowing
/// cells are cut with `…`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let header = widths
        .iter()
        .zip(headers)
        .map(|(width, header)| pad(&cut(header, *width), *width))
        .collect::<Vec<_>>()
        .join(GAP);
    let divider = "-".repeat(header.trim_end().chars().count());

    let mut lines = vec![header.trim_end().to_string(), divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let text = cut(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&text, *width);
                if options.color { colorize(&text, padded) } else { padded }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some((index, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[index] -= 1;
    }
}

fn cut(value: &str, width: usize) -> String {
    let single_line = value.replace('\n', " ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let mut out = single_line.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

/// Color whole cells whose text is a known state word. Padding stays outside
/// the escape codes so alignment is unaffected.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "true" | "authenticated" | "ready" => "32",
        "unknown" | "submitting" | "asking" => "33",
        "false" | "unauthenticated" | "failed" => "31",
        _ => return padded,
    };
    let trailing = &padded[text.len()..];
    format!("\u{1b}[{code}m{text}\u{1b}[0m{trailing}")
}
