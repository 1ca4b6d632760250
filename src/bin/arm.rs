use flow_demos::{demos::Arm, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<Arm>()
}
