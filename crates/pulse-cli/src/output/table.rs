//! Fixed-column text tables for dashboard, trend, and search rows.

/// Spacing between columns.
const GAP: &str = "  ";

/// Narrowest a column may be squeezed to when the terminal is tight.
const MIN_COLUMN_WIDTH: usize = 4;

const ELLIPSIS: char = '…';

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`.
///
/// A column is right aligned when every cell in it parses as a number. With
/// `max_width` set, the widest column gives up characters until a line fits.
/// The `category` column is colored when `options.color` is on.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let numeric: Vec<bool> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .all(|row| row.get(col).is_some_and(|cell| cell.parse::<f64>().is_ok()))
        })
        .collect();

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        squeeze(&mut widths, max_width);
    }

    let category_col = headers
        .iter()
        .position(|h| *h == "category")
        .filter(|_| options.color);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(line(headers.iter().copied(), &widths, &[], None));
    lines.push("-".repeat(line_width(&widths)));
    for row in rows {
        lines.push(line(
            (0..widths.len()).map(|col| row.get(col).map_or("-", String::as_str)),
            &widths,
            &numeric,
            category_col,
        ));
    }
    lines.join("\n")
}

fn line_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)
}

fn squeeze(widths: &mut [usize], max_width: usize) {
    let mut excess = line_width(widths).saturating_sub(max_width);
    while excess > 0 {
        let Some((col, width)) = widths
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, width)| *width > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        let cut = excess.min(width - MIN_COLUMN_WIDTH);
        widths[col] -= cut;
        excess -= cut;
    }
}

fn line<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    numeric: &[bool],
    category_col: Option<usize>,
) -> String {
    let rendered = cells
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, width))| {
            let text = fit(cell, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let text = if category_col == Some(col) {
                paint_category(&text)
            } else {
                text
            };
            if numeric.get(col).copied().unwrap_or(false) {
                format!("{pad}{text}")
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP);
    rendered.trim_end().to_string()
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let mut cut: String = cell.chars().take(width.saturating_sub(1)).collect();
    cut.push(ELLIPSIS);
    cut
}

fn paint_category(value: &str) -> String {
    let code = match value {
        "demand_trend" | "innovation" => "32",
        "policy" => "33",
        "supply_risk" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn long_cells_are_cut_with_ellipsis() {
        assert_eq!(fit("Textile & Apparel", 8), "Textile…");
        assert_eq!(fit("Surat", 8), "Surat");
    }

    #[test]
    fn number_columns_align_right() {
        let rows = vec![
            vec!["1".to_string(), "Rubber Goods".to_string(), "+5.00".to_string()],
            vec!["10".to_string(), "Pharmaceuticals".to_string(), "-4.25".to_string()],
        ];
        let table = render(&["rank", "activity", "growth"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "rank  activity         growth");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   1  Rubber Goods      +5.00");
        assert_eq!(lines[3], "  10  Pharmaceuticals   -4.25");
    }

    #[test]
    fn widest_column_shrinks_to_fit() {
        let rows = vec![vec!["x".repeat(80), "71.00".to_string()]];
        let table = render(
            &["headline", "index"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.lines().nth(2).is_some_and(|line| line.contains(ELLIPSIS)));
    }

    #[test]
    fn only_the_category_column_is_colored() {
        let rows = vec![vec!["policy".to_string(), "policy".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render(&["category", "headline"], &rows, options);
        let row = table.lines().nth(2).unwrap_or_default();
        assert!(row.starts_with("\u{1b}[33mpolicy\u{1b}[0m"));
        assert!(row.ends_with("  policy"));
    }

    #[test]
    fn short_rows_show_placeholder() {
        let table = render(&["activity", "code"], &[vec!["Rubber Goods".to_string()]], PLAIN);
        assert!(table.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }
}
