use flow_demos::{demos::PolygonalShading, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<PolygonalShading>()
}
