use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use pwgen::GeneratedPassword;

pub fn display_table<ItemType: TableDisplay>(
    rows: &[ItemType],
    mut output: impl Write,
) -> io::Result<()> {
    let column_count = ItemType::columns();
    let mut column_widths = (0..column_count)
        .map(|column_index| ItemType::column_name(column_index).width())
        .collect::<Vec<_>>();

    for row in rows {
        for (column_index, width) in column_widths.iter_mut().enumerate() {
            *width = std::cmp::max(row.item(column_index).width(), *width);
        }
    }

    output_row(&mut output, column_count, |column_index| {
        Padded(
            ItemType::column_name(column_index),
            column_widths[column_index],
        )
    })?;
    output_row(&mut output, column_count, |column_index| {
        Divider(column_widths[column_index])
    })?;
    for row in rows {
        output_row(&mut output, column_count, |column_index| {
            Padded(row.item(column_index), column_widths[column_index])
        })?;
    }

    Ok(())
}

pub trait TableDisplay {
    fn columns() -> usize;
    fn column_name(column_index: usize) -> &'static str;
    fn item(&self, column_index: usize) -> &str;
}

/// Print the recent passwords, newest first.
pub fn display_recent<'a>(
    recent: impl Iterator<Item = &'a GeneratedPassword>,
    output: impl Write,
) -> io::Result<()> {
    let rows = recent.map(RecentRow::new).collect::<Vec<_>>();
    display_table(&rows, output)
}

struct RecentRow {
    generated_at: String,
    length: String,
    classes: String,
    password: String,
}

impl RecentRow {
    fn new(record: &GeneratedPassword) -> RecentRow {
        RecentRow {
            generated_at: record
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            length: record.options.length.to_string(),
            classes: record
                .options
                .classes()
                .map(|class| class.name())
                .collect::<Vec<_>>()
                .join(", "),
            password: record.password.as_str().to_owned(),
        }
    }
}

impl TableDisplay for RecentRow {
    fn columns() -> usize {
        4
    }

    fn column_name(column_index: usize) -> &'static str {
        match column_index {
            0 => "Generated at",
            1 => "Length",
            2 => "Classes",
            3 => "Password",
            _ => panic!(),
        }
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => &self.generated_at,
            1 => &self.length,
            2 => &self.classes,
            3 => &self.password,
            _ => panic!(),
        }
    }
}

fn output_row<F, D>(
    mut output: impl Write,
    column_count: usize,
    get_column_display: F,
) -> io::Result<()>
where
    D: Display,
    F: Fn(usize) -> D,
{
    for column_index in 0..column_count {
        if column_index > 0 {
            write!(&mut output, "  ")?;
        }
        write!(&mut output, "{}", get_column_display(column_index))?;
    }
    writeln!(&mut output)?;
    Ok(())
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "─")?;
        }
        Ok(())
    }
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}{:padding$}", self.0, "")
    }
}
