// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{Cell, SheetTable};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export: one worksheet per table, styled header, banded rows and
/// columns sized to their content.
pub(crate) fn export_xlsx(tables: &[SheetTable], path: &Path, currency: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let amount_num_format = format!("\"{currency}\"#,##0.00;-\"{currency}\"#,##0.00");

    for table in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.name)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &header_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        if table.rows.is_empty() {
            worksheet.write(1, 0, "No data available")?;
        }

        let mut col_widths: Vec<usize> = table
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(*h))
            .collect();

        let band1 = Color::RGB(0xEAF3FB);
        let band2 = Color::RGB(0xFFFFFF);

        for (row_index, values) in table.rows.iter().enumerate() {
            let row = (row_index + 1) as u32;
            let band_color = if row_index % 2 == 0 { band1 } else { band2 };

            for (col, cell) in values.iter().enumerate() {
                write_xlsx_cell(worksheet, row, col as u16, cell, band_color, &amount_num_format)?;

                let shown = match cell {
                    // leave room for the currency symbol and decimals
                    Cell::Amount(v) => format!("{currency}{v:.2}"),
                    other => other.as_plain(),
                };
                if let Some(w) = col_widths.get_mut(col) {
                    *w = (*w).max(UnicodeWidthStr::width(shown.as_str()));
                }
            }
        }

        for (c, w) in col_widths.iter().enumerate() {
            worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
        }
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
    amount_num_format: &str,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Amount(v) => {
            let fmt = base
                .set_align(FormatAlign::Right)
                .set_num_format(amount_num_format);
            worksheet.write_with_format(row, col, *v, &fmt)?;
        }
        Cell::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), &base)?;
        }
        Cell::Empty => {
            worksheet.write_blank(row, col, &base)?;
        }
    }

    Ok(())
}
