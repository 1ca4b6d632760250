use flow_demos::{demos::Coordinates, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Coordinates>()
}
