use crate::{
    error::ParseError,
    parsing::{
        blocks::{
            kinds::TableSyntax,
            table::{Cell, Row, RowRole, Table, TableCellFormat},
            types::Statement,
        },
        inline::{Expression, parse_inline_until},
    },
    render::WikiNode,
};

use super::StatementParser;

/// One row as read from the source, before it is placed in the table.
struct ParsedRow {
    cells: Row,
    role: RowRole,
    /// Columns holding a `|~|`, to be folded into the cell above.
    row_spans: Vec<usize>,
}

impl StatementParser<'_> {
    /// Reads rows while lines start with `|`.
    ///
    /// The first row fixes the column count; a row with a different count is
    /// left unconsumed and ends the table.
    pub(super) fn parse_table(&mut self) -> Result<Statement, ParseError> {
        if !self.cur.is_at(TableSyntax::SEPARATOR) {
            return Err(self.cur.expected(&["|"]));
        }

        let mut table = Table::default();
        let mut columns = None;

        while self.cur.is_at(TableSyntax::SEPARATOR) {
            let row_start = self.cur.pos();
            let row = self.parse_row()?;
            if columns.is_some_and(|n| n != row.cells.len()) {
                self.cur.set_pos(row_start);
                break;
            }
            columns = Some(row.cells.len());

            match row.role {
                RowRole::Format => {
                    table.column_formats = Some(row.cells.into_iter().map(column_format).collect());
                }
                RowRole::Header => table.header = Some(row.cells),
                RowRole::Footer => table.footer = Some(row.cells),
                RowRole::Body => {
                    for column in row.row_spans {
                        let above = table
                            .rows
                            .iter_mut()
                            .rev()
                            .find_map(|r| r.get_mut(column).and_then(Option::as_mut));
                        if let Some(cell) = above {
                            cell.row_span += 1;
                        }
                    }
                    table.rows.push(row.cells);
                }
            }
        }

        Ok(Statement::Table(table))
    }

    /// Parses `|cell|cell|role` through the end of its line.
    fn parse_row(&mut self) -> Result<ParsedRow, ParseError> {
        let mut cells = vec![];
        let mut row_spans = vec![];
        let mut col_span = 1;

        loop {
            // The last `|` on the line closes the row.
            if !self.cur.line_remainder()[1..].contains(TableSyntax::SEPARATOR) {
                self.cur.advance();
                let role = self.take_rest_of_line().trim();
                return Ok(ParsedRow {
                    cells,
                    role: RowRole::from_token(role),
                    row_spans,
                });
            }

            self.cur.advance();
            match (self.cur.current(), self.cur.peek(1)) {
                (Some(TableSyntax::COLUMN_SPAN), Some(TableSyntax::SEPARATOR)) => {
                    self.cur.advance();
                    col_span += 1;
                    cells.push(None);
                }
                (Some(TableSyntax::ROW_SPAN), Some(TableSyntax::SEPARATOR)) => {
                    self.cur.advance();
                    row_spans.push(cells.len());
                    cells.push(None);
                }
                _ => {
                    let mut cell = self.parse_cell()?;
                    cell.col_span = std::mem::replace(&mut col_span, 1);
                    cells.push(Some(cell));
                }
            }
        }
    }

    /// Parses one cell after its opening `|`, leaving the cursor on the closing `|`.
    fn parse_cell(&mut self) -> Result<Cell, ParseError> {
        let is_header = self.cur.is_at(TableSyntax::HEADER);
        if is_header {
            self.cur.advance();
        }
        self.cur.skip_whitespace();

        let mut format = String::new();
        while self.cur.matches_ahead(&TableSyntax::FORMAT_PREFIXES, false)? {
            format.push_str(self.cur.take_until_any(&[":", "|"], false)?);
            format.push(':');
            if self.cur.is_at(':') {
                self.cur.advance();
            }
        }

        let content = parse_inline_until(&mut self.cur, &|c| Ok(c.is_at(TableSyntax::SEPARATOR)))?;
        if !self.cur.is_at(TableSyntax::SEPARATOR) {
            return Err(self.cur.expected(&["|"]));
        }

        Ok(Cell::new(TableCellFormat::parse(&format), content, is_header))
    }
}

/// A `c` row cell's format; numeric content sets the column width.
fn column_format(cell: Option<Cell>) -> TableCellFormat {
    let Some(cell) = cell else {
        return TableCellFormat::default();
    };
    let mut format = cell.format;
    if let Ok(width) = cell.content.serialize().trim().parse() {
        format.width = Some(width);
    }
    format
}

#[cfg(test)]
mod tests {
    use super::super::tests::{parse, plain};
    use crate::parsing::blocks::{
        table::{Table, TableCellFormat},
        types::{Alignment, Statement},
    };
    use pretty_assertions::assert_eq;

    fn table(text: &str) -> Table {
        match parse(text).remove(0) {
            Statement::Table(table) => table,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn row_span_is_folded_into_cell_above() {
        let table = table("|a|b|\n|~|c|\n");
        assert_eq!(table.rows.len(), 2);
        let a = table.rows[0][0].as_ref().unwrap();
        assert_eq!(a.row_span, 2);
        assert!(table.rows[1][0].is_none());
        assert_eq!(table.rows[1][1].as_ref().unwrap().content, plain("c"));
    }

    #[test]
    fn row_span_skips_earlier_holes() {
        let table = table("|a|\n|~|\n|~|\n");
        assert_eq!(table.rows[0][0].as_ref().unwrap().row_span, 3);
    }

    #[test]
    fn column_span_applies_to_next_cell() {
        let table = table("|>|>|wide|\n|a|b|c|\n");
        let row = &table.rows[0];
        assert!(row[0].is_none() && row[1].is_none());
        assert_eq!(row[2].as_ref().unwrap().col_span, 3);
        assert_eq!(table.rows[1][0].as_ref().unwrap().col_span, 1);
    }

    #[test]
    fn mismatched_row_starts_a_new_table() {
        let statements = parse("|a|b|\n|c|\n");
        assert_eq!(statements.len(), 2);
        let Statement::Table(second) = &statements[1] else {
            panic!("expected table");
        };
        assert_eq!(second.rows[0][0].as_ref().unwrap().content, plain("c"));
    }

    #[test]
    fn row_roles() {
        let table = table("|~Name|~Age|h\n|LEFT:|20|c\n|bob|3|\n|sum|3|f\n");
        let header = table.header.as_ref().unwrap();
        assert!(header[0].as_ref().unwrap().is_header);
        assert_eq!(header[0].as_ref().unwrap().content, plain("Name"));
        assert_eq!(
            table.column_formats,
            Some(vec![
                TableCellFormat {
                    alignment: Some(Alignment::Left),
                    ..Default::default()
                },
                TableCellFormat {
                    width: Some(20),
                    ..Default::default()
                },
            ])
        );
        assert_eq!(table.rows.len(), 1);
        assert!(table.footer.is_some());
    }

    #[test]
    fn cell_format_prefixes() {
        let table = table("|RIGHT:BGCOLOR(yellow):x|SIZE(9):y|\n");
        let x = table.rows[0][0].as_ref().unwrap();
        assert_eq!(x.format.alignment, Some(Alignment::Right));
        assert_eq!(x.format.background_color.as_deref(), Some("yellow"));
        assert_eq!(x.content, plain("x"));
        assert_eq!(table.rows[0][1].as_ref().unwrap().format.font_size, Some(9));
    }

    #[test]
    fn empty_cells_hold_empty_expressions() {
        let table = table("||b|\n");
        assert!(table.rows[0][0].as_ref().unwrap().content.is_empty());
    }

    #[test]
    fn inline_markup_in_cells() {
        let table = table("|''bold''|[[Page]]|\n");
        assert!(matches!(
            table.rows[0][0].as_ref().unwrap().content,
            crate::parsing::inline::Expression::Bold(_)
        ));
    }

    #[test]
    fn orphan_row_span_is_a_plain_hole() {
        let table = table("|~|a|\n");
        assert!(table.rows[0][0].is_none());
    }
}
