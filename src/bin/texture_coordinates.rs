use flow_demos::{demos::TextureCoordinates, flow};

fn main() -> anyhow::Result<()> {
    flow::run::<TextureCoordinates>()
}
