use flow_demos::{demos::Orbit, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Orbit>()
}
