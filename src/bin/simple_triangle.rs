use flow_demos::{demos::SimpleTriangle, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<SimpleTriangle>()
}
