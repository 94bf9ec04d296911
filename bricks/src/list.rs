use clap::Parser;

use bricks_ds::LinkedList;

#[derive(Debug, Parser)]
pub(crate) struct List {
    /// Numbers to put in the list
    #[arg(required = true, allow_negative_numbers = true)]
    pub(crate) numbers: Vec<f64>,
}

impl List {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let list = LinkedList::from_slice(&self.numbers);
        let chain = list
            .iter()
            .map(|node| node.body.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        println!("{}", chain);
        println!("min: {}", list.min()?);
        println!("max: {}", list.max()?);
        Ok(())
    }
}
