use flow_demos::{demos::ScreenPoints, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<ScreenPoints>()
}
