use flow_demos::{demos::VertexColors, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<VertexColors>()
}
