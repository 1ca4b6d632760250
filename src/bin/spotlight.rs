use flow_demos::{demos::Spotlight, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Spotlight>()
}
