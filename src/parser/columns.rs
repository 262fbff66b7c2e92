//! Parser for whitespace-delimited header/columns tables (`ps aux`, `lsblk`).

/// A parsed header/columns table.
///
/// The first non-empty line defines the field names; every following line is
/// one row. Rows may be shorter than the header (missing trailing fields) but
/// never longer: extra tokens are folded into the last column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Parse a header/columns table from raw utility output.
pub fn parse(text: &str) -> ColumnTable {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match &headers {
            None => headers = Some(tokens.iter().map(|t| t.to_string()).collect()),
            Some(h) => {
                let mut row: Vec<String> = Vec::with_capacity(h.len());
                if tokens.len() > h.len() {
                    // A value containing spaces (e.g. a command line) spills
                    // past the header count; keep it whole in the last column.
                    for token in &tokens[..h.len() - 1] {
                        row.push(token.to_string());
                    }
                    row.push(tokens[h.len() - 1..].join(" "));
                } else {
                    row.extend(tokens.iter().map(|t| t.to_string()));
                }
                rows.push(row);
            }
        }
    }

    ColumnTable {
        headers: headers.unwrap_or_default(),
        rows,
    }
}

impl ColumnTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            headers: &self.headers,
            values,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// One row of a [`ColumnTable`], addressable by header name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Look up a field by header name. Absent for headers past the row's end.
    pub fn get(&self, header: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == header)?;
        self.values.get(idx).map(|s| s.as_str())
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }
}
