use clap::Parser;

use bricks_ds::{Array, DuplicatePolicy, PrintWindow, Value};

use crate::parse::parse_value;

#[derive(Debug, Parser)]
pub(crate) struct ArrayCommand {
    /// Values to add. `[1,2,3]` is a sequence, integers and floats are
    /// numbers, anything else is text.
    #[arg(required = true, allow_negative_numbers = true)]
    pub(crate) values: Vec<String>,
    /// Drop values that are already in the array
    #[arg(long)]
    pub(crate) unique: bool,
    /// Number of leading slots to print
    #[arg(long)]
    pub(crate) head: Option<usize>,
    /// Number of trailing slots to print
    #[arg(long)]
    pub(crate) tail: Option<usize>,
}

impl ArrayCommand {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let values = self
            .values
            .iter()
            .map(|s| parse_value(s))
            .collect::<anyhow::Result<Vec<Value>>>()?;
        let policy = if self.unique {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        };
        let array = Array::create(policy, values);
        log::debug!(
            "array holds {} of {} values, capacity {}",
            array.len(),
            self.values.len(),
            array.capacity()
        );
        array.print(&self.window())?;
        Ok(())
    }

    fn window(&self) -> PrintWindow {
        match (self.head, self.tail) {
            (None, None) => PrintWindow::default(),
            (head, tail) => PrintWindow::new(head.unwrap_or(0), tail.unwrap_or(0)),
        }
    }
}
