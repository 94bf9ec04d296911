use clap::Parser;

use bricks_linalg::Metric;

use crate::parse::parse_vector;

#[derive(Debug, Parser)]
pub(crate) struct Distance {
    /// First vector, comma separated
    pub(crate) first: String,
    /// Second vector, comma separated
    pub(crate) second: String,
    /// Distance measure: euclidean, l1, canberra or chebyshev
    #[arg(long, default_value_t = Metric::Euclidean)]
    pub(crate) metric: Metric,
}

impl Distance {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let first = parse_vector(&self.first)?;
        let second = parse_vector(&self.second)?;
        let distance = self.metric.distance(&first, &second)?;
        println!("{}", distance);
        Ok(())
    }
}
