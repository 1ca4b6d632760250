use flow_demos::{demos::Primitives, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Primitives>()
}
