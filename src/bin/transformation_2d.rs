use flow_demos::{demos::Transformation2d, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Transformation2d>()
}
