use flow_demos::{demos::Viewports, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Viewports>()
}
