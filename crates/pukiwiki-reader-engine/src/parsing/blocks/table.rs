//! Table nodes, per-cell formats and their HTML.
//!
//! A row is a `Vec<Option<Cell>>` with one slot per column. `None` marks a
//! slot covered by a span: either a `|>|` placeholder folded into the next
//! real cell's `col_span`, or a `|~|` hole folded into the `row_span` of the
//! cell above it.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::RenderError,
    parsing::inline::Expression,
    render::{RenderContext, WikiNode},
};

use super::{kinds::TableSyntax, types::Alignment};

pub type Row = Vec<Option<Cell>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Formats from a `c` row, one per column.
    pub column_formats: Option<Vec<TableCellFormat>>,
    /// `h` row, rendered in `<thead>`.
    pub header: Option<Row>,
    pub rows: Vec<Row>,
    /// `f` row, rendered in `<tfoot>`.
    pub footer: Option<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub format: TableCellFormat,
    pub content: Expression,
    pub is_header: bool,
    pub col_span: usize,
    pub row_span: usize,
}

impl Cell {
    pub fn new(format: TableCellFormat, content: Expression, is_header: bool) -> Self {
        Self {
            format,
            content,
            is_header,
            col_span: 1,
            row_span: 1,
        }
    }
}

/// The role a row plays, selected by the text after its last `|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    Format,
    Header,
    Footer,
    Body,
}

impl RowRole {
    pub fn from_token(token: &str) -> Self {
        match token {
            TableSyntax::FORMAT_ROW => RowRole::Format,
            TableSyntax::HEADER_ROW => RowRole::Header,
            TableSyntax::FOOTER_ROW => RowRole::Footer,
            _ => RowRole::Body,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            RowRole::Format => TableSyntax::FORMAT_ROW,
            RowRole::Header => TableSyntax::HEADER_ROW,
            RowRole::Footer => TableSyntax::FOOTER_ROW,
            RowRole::Body => "",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCellFormat {
    pub alignment: Option<Alignment>,
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub font_size: Option<u32>,
    /// Column width in pixels; only set from a `c` row.
    pub width: Option<u32>,
}

static FORMAT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<kind>[A-Z]+)(?:\((?<arg>.*)\))?$").expect("Invalid table format regex")
});

impl TableCellFormat {
    /// Parses a run of `:`-terminated tokens such as `CENTER:BGCOLOR(red):`.
    ///
    /// Unknown tokens and non-numeric sizes are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut format = Self::default();
        for token in text.split(':').map(str::trim).filter(|t| !t.is_empty()) {
            let Some(caps) = FORMAT_TOKEN.captures(token) else {
                log::warn!("ignoring table format token {token:?}");
                continue;
            };
            let arg = caps.name("arg").map(|m| m.as_str().trim().to_string());
            match (&caps["kind"], arg) {
                (kind, None) if Alignment::from_keyword(kind).is_some() => {
                    format.alignment = Alignment::from_keyword(kind);
                }
                ("BGCOLOR", Some(color)) => format.background_color = Some(color),
                ("COLOR", Some(color)) => format.foreground_color = Some(color),
                ("SIZE", Some(size)) => match size.parse() {
                    Ok(size) => format.font_size = Some(size),
                    Err(_) => log::warn!("ignoring non-numeric table font size {size:?}"),
                },
                _ => log::warn!("ignoring table format token {token:?}"),
            }
        }
        format
    }

    /// Layers `cell` over this column format: fields the cell sets win, the
    /// width always comes from the column.
    pub fn merged(&self, cell: &TableCellFormat) -> TableCellFormat {
        TableCellFormat {
            alignment: cell.alignment.or(self.alignment),
            background_color: cell
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            foreground_color: cell
                .foreground_color
                .clone()
                .or_else(|| self.foreground_color.clone()),
            font_size: cell.font_size.or(self.font_size),
            width: self.width,
        }
    }

    /// ` width=".." style=".."`, each only when there is something to say.
    pub fn html_attributes(&self) -> String {
        let mut style = String::new();
        if let Some(alignment) = self.alignment {
            style.push_str(&format!("text-align:{};", alignment.css()));
        }
        if let Some(color) = &self.background_color {
            style.push_str(&format!("background-color:{color};"));
        }
        if let Some(color) = &self.foreground_color {
            style.push_str(&format!("color:{color};"));
        }
        if let Some(size) = self.font_size {
            style.push_str(&format!("font-size:{size}px;"));
        }

        let mut out = String::new();
        if let Some(width) = self.width.filter(|w| *w > 0) {
            out.push_str(&format!(" width=\"{width}\""));
        }
        if !style.is_empty() {
            out.push_str(&format!(" style=\"{style}\""));
        }
        out
    }

    /// The format tokens in markup form; the width is not included.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        if let Some(alignment) = self.alignment {
            out.push_str(alignment.keyword());
            out.push(':');
        }
        if let Some(color) = &self.background_color {
            out.push_str(&format!("BGCOLOR({color}):"));
        }
        if let Some(color) = &self.foreground_color {
            out.push_str(&format!("COLOR({color}):"));
        }
        if let Some(size) = self.font_size {
            out.push_str(&format!("SIZE({size}):"));
        }
        out
    }
}

impl Cell {
    fn render(
        &self,
        column: Option<&TableCellFormat>,
        ctx: &RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let tag = if self.is_header { "th" } else { "td" };
        let format = match column {
            Some(column) => column.merged(&self.format),
            None => self.format.clone(),
        };
        let mut attributes = format.html_attributes();
        if self.row_span > 1 {
            attributes.push_str(&format!(" rowspan=\"{}\"", self.row_span));
        }
        if self.col_span > 1 {
            attributes.push_str(&format!(" colspan=\"{}\"", self.col_span));
        }
        Ok(format!("<{tag}{attributes}>{}</{tag}>", self.content.render(ctx)?))
    }

    fn serialize(&self) -> String {
        let format = self.format.serialize();
        let content = self.content.serialize();
        let mut out = String::new();
        if self.is_header {
            out.push(TableSyntax::HEADER);
            if format.is_empty() && content.is_empty() {
                out.push(' ');
            }
        } else if format.is_empty()
            && (content.starts_with(TableSyntax::HEADER)
                || content == TableSyntax::COLUMN_SPAN.to_string())
        {
            // Leading whitespace is skipped on re-parse.
            out.push(' ');
        }
        out.push_str(&format);
        out.push_str(&content);
        out
    }
}

impl Table {
    fn column_format(&self, column: usize) -> Option<&TableCellFormat> {
        self.column_formats.as_ref().and_then(|f| f.get(column))
    }

    fn render_row(
        &self,
        row: &Row,
        ctx: &RenderContext<'_>,
        lines: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        lines.push("<tr>".to_string());
        for (column, cell) in row.iter().enumerate() {
            if let Some(cell) = cell {
                lines.push(cell.render(self.column_format(column), ctx)?);
            }
        }
        lines.push("</tr>".to_string());
        Ok(())
    }
}

/// Writes one row. `owed_holes[column]` counts the `|~|` slots still owed to
/// a row span from a cell above; an empty slot beyond those is a trailing
/// `|>|` unless a cell follows it on the row.
fn serialize_row(row: &Row, role: RowRole, owed_holes: &mut Vec<usize>) -> String {
    owed_holes.resize(row.len(), 0);

    // Slots folded into a later cell's column span.
    let mut covered = vec![false; row.len()];
    for (column, cell) in row.iter().enumerate() {
        if let Some(cell) = cell {
            let first = column.saturating_sub(cell.col_span.saturating_sub(1));
            covered[first..column].iter_mut().for_each(|c| *c = true);
        }
    }

    let mut out = String::new();
    for (column, cell) in row.iter().enumerate() {
        match cell {
            Some(cell) => {
                owed_holes[column] = cell.row_span.saturating_sub(1);
                for _ in 1..cell.col_span {
                    out.push(TableSyntax::SEPARATOR);
                    out.push(TableSyntax::COLUMN_SPAN);
                }
                out.push(TableSyntax::SEPARATOR);
                out.push_str(&cell.serialize());
            }
            None if covered[column] => {}
            None => {
                let hole = if owed_holes[column] > 0 {
                    owed_holes[column] -= 1;
                    true
                } else {
                    row[column + 1..].iter().any(Option::is_some)
                };
                out.push(TableSyntax::SEPARATOR);
                out.push(if hole {
                    TableSyntax::ROW_SPAN
                } else {
                    TableSyntax::COLUMN_SPAN
                });
            }
        }
    }
    out.push(TableSyntax::SEPARATOR);
    out.push_str(role.token());
    out
}

impl WikiNode for Table {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let mut lines = vec!["<table>".to_string()];
        if let Some(header) = &self.header {
            lines.push("<thead>".to_string());
            self.render_row(header, ctx, &mut lines)?;
            lines.push("</thead>".to_string());
        }
        for row in &self.rows {
            self.render_row(row, ctx, &mut lines)?;
        }
        if let Some(footer) = &self.footer {
            lines.push("<tfoot>".to_string());
            self.render_row(footer, ctx, &mut lines)?;
            lines.push("</tfoot>".to_string());
        }
        lines.push("</table>".to_string());
        Ok(lines.join("\n"))
    }

    fn serialize(&self) -> String {
        let mut lines = vec![];
        if let Some(formats) = &self.column_formats {
            let mut line = String::new();
            for format in formats {
                line.push(TableSyntax::SEPARATOR);
                line.push_str(&format.serialize());
                if let Some(width) = format.width {
                    line.push_str(&width.to_string());
                }
            }
            line.push(TableSyntax::SEPARATOR);
            line.push_str(RowRole::Format.token());
            lines.push(line);
        }
        if let Some(header) = &self.header {
            lines.push(serialize_row(header, RowRole::Header, &mut vec![]));
        }
        let mut owed_holes = vec![];
        for row in &self.rows {
            lines.push(serialize_row(row, RowRole::Body, &mut owed_holes));
        }
        if let Some(footer) = &self.footer {
            lines.push(serialize_row(footer, RowRole::Footer, &mut vec![]));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::WikiConfig, document::Document};
    use pretty_assertions::assert_eq;

    fn cell(text: &str) -> Cell {
        Cell::new(
            TableCellFormat::default(),
            Expression::Plain(text.to_string()),
            false,
        )
    }

    #[test]
    fn format_tokens_are_parsed_by_kind() {
        let format = TableCellFormat::parse("CENTER:BGCOLOR(#eee):COLOR(red):SIZE(12):");
        assert_eq!(
            format,
            TableCellFormat {
                alignment: Some(Alignment::Center),
                background_color: Some("#eee".into()),
                foreground_color: Some("red".into()),
                font_size: Some(12),
                width: None,
            }
        );
    }

    #[test]
    fn bad_format_tokens_are_ignored() {
        let format = TableCellFormat::parse("SIZE(big):LEFT:WAT:");
        assert_eq!(format.font_size, None);
        assert_eq!(format.alignment, Some(Alignment::Left));
    }

    #[test]
    fn cell_fields_win_over_column_but_width_comes_from_column() {
        let column = TableCellFormat {
            alignment: Some(Alignment::Right),
            foreground_color: Some("blue".into()),
            width: Some(80),
            ..Default::default()
        };
        let cell = TableCellFormat {
            alignment: Some(Alignment::Left),
            width: Some(5),
            ..Default::default()
        };
        let merged = column.merged(&cell);
        assert_eq!(merged.alignment, Some(Alignment::Left));
        assert_eq!(merged.foreground_color.as_deref(), Some("blue"));
        assert_eq!(merged.width, Some(80));
    }

    #[test]
    fn attributes_only_when_set() {
        assert_eq!(TableCellFormat::default().html_attributes(), "");
        let format = TableCellFormat {
            alignment: Some(Alignment::Center),
            font_size: Some(10),
            width: Some(40),
            ..Default::default()
        };
        assert_eq!(
            format.html_attributes(),
            r#" width="40" style="text-align:center;font-size:10px;""#
        );
    }

    #[test]
    fn table_layout_with_spans() {
        let mut a = cell("a");
        a.row_span = 2;
        let mut wide = cell("w");
        wide.col_span = 2;
        let mut head = cell("h");
        head.is_header = true;
        let table = Table {
            column_formats: None,
            header: Some(vec![Some(head), Some(cell("i"))]),
            rows: vec![
                vec![Some(a), Some(cell("b"))],
                vec![None, Some(cell("c"))],
                vec![None, Some(wide)],
            ],
            footer: None,
        };
        let config = WikiConfig::default();
        let doc = Document::default();
        let html = table.render(&RenderContext::new(&config, &doc)).unwrap();
        assert_eq!(
            html,
            [
                "<table>",
                "<thead>",
                "<tr>",
                "<th>h</th>",
                "<td>i</td>",
                "</tr>",
                "</thead>",
                "<tr>",
                r#"<td rowspan="2">a</td>"#,
                "<td>b</td>",
                "</tr>",
                "<tr>",
                "<td>c</td>",
                "</tr>",
                "<tr>",
                r#"<td colspan="2">w</td>"#,
                "</tr>",
                "</table>",
            ]
            .join("\n")
        );
        assert_eq!(table.serialize(), "|~h|i|h\n|a|b|\n|~|c|\n|>|w|");
    }

    #[test]
    fn empty_slots_serialize_by_what_covers_them() {
        let mut tall = cell("y");
        tall.row_span = 2;
        let spanned = Table {
            rows: vec![vec![Some(cell("x")), Some(tall)], vec![Some(cell("a")), None]],
            ..Table::default()
        };
        assert_eq!(spanned.serialize(), "|x|y|\n|a|~|");

        let trailing = Table {
            rows: vec![vec![Some(cell("x")), Some(cell("y"))], vec![Some(cell("a")), None]],
            ..Table::default()
        };
        assert_eq!(trailing.serialize(), "|x|y|\n|a|>|");

        let leading = Table {
            rows: vec![vec![None, Some(cell("a"))]],
            ..Table::default()
        };
        assert_eq!(leading.serialize(), "|~|a|");
    }
}
