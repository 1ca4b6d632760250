use flow_demos::{demos::DrawCircle, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<DrawCircle>()
}
