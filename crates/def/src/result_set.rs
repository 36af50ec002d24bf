use {crate::value::Value, core::fmt};

/// Rows produced by a query, rendered as tab separated lines headed by the
/// column names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: vec![],
        }
    }

    pub fn push(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header.join("\t"))?;

        for row in &self.rows {
            f.write_str("\n")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let mut result = ResultSet::new(vec!["id".into(), "c1".into(), "c2".into()]);
        assert_eq!(result.to_string(), "id\tc1\tc2");

        result.push(vec![Value::Integer(1), Value::from("a"), Value::Integer(1)]);
        result.push(vec![Value::Integer(2), Value::from("b c"), Value::Null]);

        assert_eq!(result.to_string(), "id\tc1\tc2\n1\ta\t1\n2\tb c\tNULL");
    }
}
